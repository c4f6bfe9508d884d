use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::draw::{self, Lottery};
use crate::gemini::{Gemini, GeminiReporter, ReportGenerator};
use crate::prompt::build_prompt;
use crate::serverchan::{Notifier, ServerChan};

/// Title of the push sent when the report could not be generated.
pub const FAILURE_TITLE: &str = "任务执行失败";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// What a single run did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NoDraw,
    Delivered { lottery: Lottery, model: String },
    Failed { lottery: Lottery, error: String },
}

impl Outcome {
    pub fn summary(&self) -> String {
        match self {
            Outcome::NoDraw => "No draw today; nothing sent".to_string(),
            Outcome::Delivered { lottery, model } => {
                format!("{} report generated by {} and pushed", lottery.display_name(), model)
            }
            Outcome::Failed { lottery, error } => {
                format!("{} report failed: {}", lottery.display_name(), error)
            }
        }
    }
}

/// Push best-effort: a failed push is logged and otherwise ignored.
fn push<N: Notifier + ?Sized>(notifier: &N, title: &str, content: &str) {
    if let Err(e) = notifier.notify(title, content) {
        error!(error = %e, title, "Notification not delivered");
    }
}

/// One run: classify the day, generate the report, push it. Never fails.
/// Provider errors become a single failure push; on a no-draw day nothing is called.
pub fn run<G, N>(now: DateTime<Utc>, generator: &G, notifier: &N) -> Outcome
where
    G: ReportGenerator + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(lottery) = draw::draw_for(now) else {
        info!("No draw today, done");
        return Outcome::NoDraw;
    };
    info!(lottery = lottery.display_name(), "Starting report run");

    let prompt = build_prompt(lottery.command(), draw::beijing_time(now));
    match generator.generate_report(&prompt) {
        Ok(report) => {
            info!(model = %report.model, "Report generated");
            push(notifier, &lottery.report_title(), &report.text);
            Outcome::Delivered { lottery, model: report.model }
        }
        Err(e) => {
            error!(error = %e, "Report generation failed");
            let error = e.to_string();
            push(notifier, FAILURE_TITLE, &format!("错误日志: {}", error));
            Outcome::Failed { lottery, error }
        }
    }
}

/// Lambda entry. The scheduled event payload carries nothing we need, so any JSON is accepted.
#[instrument(skip(_event))]
pub async fn handler(_event: LambdaEvent<serde_json::Value>) -> Result<Response, Error> {
    let config = Config::from_env();
    info!(config = ?config, "Loaded configuration");

    // ureq is blocking; keep it off the runtime's worker threads.
    let outcome = tokio::task::spawn_blocking(move || {
        let generator = GeminiReporter::new(Gemini::new(config.gemini_api_key), config.model);
        let notifier = ServerChan::new(config.serverchan_key);
        run(Utc::now(), &generator, &notifier)
    })
    .await;

    let message = match outcome {
        Ok(outcome) => outcome.summary(),
        Err(e) => {
            error!(error = %e, "Report task join error");
            format!("Report task join error: {}", e)
        }
    };
    info!(message = %message, "Run finished");
    Ok(Response { message })
}
