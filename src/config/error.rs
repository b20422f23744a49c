use std::path::PathBuf;

use thiserror::Error;

/// Why the configuration could not be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// No source supplied a webhook URL.
    #[error("WEBHOOK_URL is not set (use the environment, a .env file, --url, or webhook.url)")]
    MissingUrl,

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Timeout must be greater than 0 seconds")]
    ZeroTimeout,
}
