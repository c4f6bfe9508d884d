use thiserror::Error;
use tracing::{error, info, instrument};

pub const RELAY_BASE_URL: &str = "https://sctapi.ftqq.com";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("SERVERCHAN_KEY is not set")]
    MissingSendKey,
    #[error("failed to push to ServerChan: {0}")]
    Request(#[from] ureq::Error),
}

/// Delivers a titled message to the user's device.
pub trait Notifier {
    fn notify(&self, title: &str, content: &str) -> Result<(), NotifyError>;
}

/// ServerChan push relay client encapsulating the send key.
#[derive(Clone)]
pub struct ServerChan {
    send_key: Option<String>,
}

impl std::fmt::Debug for ServerChan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerChan")
            .field("send_key", &self.send_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl ServerChan {
    pub fn new(send_key: Option<String>) -> Self {
        Self { send_key }
    }

    /// Webhook URL for the configured key, or None without one.
    pub fn send_url(&self) -> Option<String> {
        self.send_key
            .as_deref()
            .map(|key| format!("{}/{}.send", RELAY_BASE_URL, key))
    }
}

impl Notifier for ServerChan {
    /// Form-encoded POST of `title` and `desp`. The relay's reply is logged, not validated.
    /// Without a key nothing is sent.
    #[instrument(level = "info", skip(self, content), fields(content_chars = content.chars().count()))]
    fn notify(&self, title: &str, content: &str) -> Result<(), NotifyError> {
        let Some(url) = self.send_url() else {
            error!("SERVERCHAN_KEY not found; skipping push");
            return Err(NotifyError::MissingSendKey);
        };

        match ureq::post(&url).send_form([("title", title), ("desp", content)]) {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let body = resp.into_body().read_to_string().unwrap_or_default();
                info!(status, body = %body, "Pushed message to ServerChan");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to push to ServerChan");
                Err(NotifyError::Request(e))
            }
        }
    }
}
