//! Environment-sourced configuration.
//!
//! The process environment is read once, up front, into an [`EnvConfig`]
//! value so that validation stays a pure function of its inputs.

use super::defaults::WEBHOOK_URL_VAR;

/// Configuration values taken from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Value of `WEBHOOK_URL`, if set and non-empty
    pub webhook_url: Option<String>,
}

impl EnvConfig {
    /// Creates an environment snapshot with the given webhook URL.
    #[must_use]
    pub fn with_webhook_url(url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(url.into()),
        }
        .normalized()
    }

    /// Reads the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded
    /// first. Variables already present in the environment are not
    /// overridden by it.
    #[must_use]
    pub fn from_process() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {e}"),
        }

        Self {
            webhook_url: std::env::var(WEBHOOK_URL_VAR).ok(),
        }
        .normalized()
    }

    /// Treats empty or whitespace-only values as unset.
    fn normalized(mut self) -> Self {
        self.webhook_url = self
            .webhook_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        self
    }
}
