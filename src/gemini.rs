use thiserror::Error;
use tracing::{error, info, info_span, instrument, warn};

use crate::model::content::{GenerateContentRequest, GenerateContentResponse};
use crate::model::listing::{ListModelsResponse, ModelInfo};

pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Used when discovery cannot produce a model.
pub const DEFAULT_MODEL: &str = "models/gemini-1.5-flash";
const GENERATE_METHOD: &str = "generateContent";
const FAMILY_MARKER: &str = "gemini";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("provider returned no text ({0})")]
    EmptyResponse(String),
}

/// A generated report and the model that wrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub model: String,
    pub text: String,
}

/// Anything that turns a prompt into report text.
pub trait ReportGenerator {
    fn generate_report(&self, prompt: &str) -> Result<Report, GenerateError>;
}

/// Source of the provider's published model list.
pub trait ModelCatalog {
    fn list_models(&self) -> Result<Vec<ModelInfo>, GenerateError>;
}

/// How the model identifier is chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStrategy {
    /// Use this identifier as-is; the catalog is never consulted.
    Fixed(String),
    /// First listed gemini model that supports generateContent, else [`DEFAULT_MODEL`].
    Discover,
}

impl ModelStrategy {
    /// Resolve to a concrete model name. Never fails: listing errors fall back to the default.
    pub fn resolve(&self, catalog: &dyn ModelCatalog) -> String {
        match self {
            ModelStrategy::Fixed(name) => name.clone(),
            ModelStrategy::Discover => {
                info!("Listing provider models");
                match catalog.list_models() {
                    Ok(models) => match first_generative(&models) {
                        Some(m) => {
                            info!(model = %m.name, "Found usable model");
                            m.name.clone()
                        }
                        None => {
                            warn!(listed = models.len(), fallback = DEFAULT_MODEL, "No usable model listed");
                            DEFAULT_MODEL.to_string()
                        }
                    },
                    Err(e) => {
                        error!(error = %e, fallback = DEFAULT_MODEL, "Failed to list models");
                        DEFAULT_MODEL.to_string()
                    }
                }
            }
        }
    }
}

/// First entry, in listing order, that supports generateContent and belongs to the gemini family.
pub fn first_generative(models: &[ModelInfo]) -> Option<&ModelInfo> {
    models
        .iter()
        .find(|m| m.supports(GENERATE_METHOD) && m.name.contains(FAMILY_MARKER))
}

/// Blocking client for the Gemini REST API.
#[derive(Clone)]
pub struct Gemini {
    api_key: Option<String>,
    base_url: String,
}

impl std::fmt::Debug for Gemini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Gemini {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key, base_url: API_BASE_URL.to_string() }
    }

    fn key(&self) -> Result<&str, GenerateError> {
        self.api_key.as_deref().ok_or(GenerateError::MissingApiKey)
    }

    /// URL of the generateContent endpoint; bare names get the `models/` prefix.
    pub fn generate_url(&self, model: &str) -> String {
        if model.starts_with("models/") {
            format!("{}/{}:{}", self.base_url, model, GENERATE_METHOD)
        } else {
            format!("{}/models/{}:{}", self.base_url, model, GENERATE_METHOD)
        }
    }

    /// Ask `model` to complete `prompt`; returns the first candidate's text verbatim.
    #[instrument(level = "info", skip(self, prompt), fields(prompt_chars = prompt.chars().count()))]
    pub fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        let key = self.key()?;
        let url = self.generate_url(model);
        let body = GenerateContentRequest::from_text(prompt);

        let response = {
            let _span = info_span!("gemini_generate", url = %url).entered();
            ureq::post(&url).header("x-goog-api-key", key).send_json(&body)
        }
        .map_err(|source| GenerateError::Request { url: url.clone(), source })?;

        let raw = response
            .into_body()
            .read_to_string()
            .map_err(|source| GenerateError::Request { url: url.clone(), source })?;
        let parsed: GenerateContentResponse = serde_json::from_str(&raw)?;
        match parsed.text() {
            Some(text) => {
                info!(chars = text.chars().count(), "Received report text");
                Ok(text)
            }
            None => Err(GenerateError::EmptyResponse(parsed.empty_reason())),
        }
    }
}

impl ModelCatalog for Gemini {
    /// Walk every page of the model list.
    #[instrument(level = "info", skip(self))]
    fn list_models(&self) -> Result<Vec<ModelInfo>, GenerateError> {
        let key = self.key()?;
        let url = format!("{}/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = ureq::get(&url).header("x-goog-api-key", key);
            if let Some(token) = page_token.as_deref() {
                request = request.query("pageToken", token);
            }
            let response = request
                .call()
                .map_err(|source| GenerateError::Request { url: url.clone(), source })?;
            let raw = response
                .into_body()
                .read_to_string()
                .map_err(|source| GenerateError::Request { url: url.clone(), source })?;
            let page: ListModelsResponse = serde_json::from_str(&raw)?;
            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        info!(count = models.len(), "Listed provider models");
        Ok(models)
    }
}

/// Gemini client paired with a model selection strategy.
#[derive(Debug, Clone)]
pub struct GeminiReporter {
    client: Gemini,
    strategy: ModelStrategy,
}

impl GeminiReporter {
    pub fn new(client: Gemini, strategy: ModelStrategy) -> Self {
        Self { client, strategy }
    }
}

impl ReportGenerator for GeminiReporter {
    fn generate_report(&self, prompt: &str) -> Result<Report, GenerateError> {
        let model = self.strategy.resolve(&self.client);
        info!(model = %model, "Requesting report");
        let text = self.client.generate(&model, prompt)?;
        Ok(Report { model, text })
    }
}
