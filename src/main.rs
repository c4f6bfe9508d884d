use lambda_runtime::{service_fn, Error};
use tracing_subscriber::EnvFilter;

use lottery_report_lambda_rust::handler::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Structured JSON logs; CloudWatch stamps the time itself
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    lambda_runtime::run(service_fn(handler)).await
}
