use std::env;

use crate::gemini::ModelStrategy;

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const SERVERCHAN_KEY: &str = "SERVERCHAN_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";

/// Credentials and model choice for one run, passed explicitly to each component.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub serverchan_key: Option<String>,
    pub model: ModelStrategy,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let model = match get(GEMINI_MODEL) {
            Some(name) => ModelStrategy::Fixed(name),
            None => ModelStrategy::Discover,
        };
        Self {
            gemini_api_key: get(GEMINI_API_KEY),
            serverchan_key: get(SERVERCHAN_KEY),
            model,
        }
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<set>"))
            .field("serverchan_key", &self.serverchan_key.as_ref().map(|_| "<set>"))
            .field("model", &self.model)
            .finish()
    }
}
