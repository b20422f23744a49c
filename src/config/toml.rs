//! The optional `--config` file.
//!
//! ```toml
//! [webhook]
//! url = "https://chat.googleapis.com/v1/spaces/AAA/messages?key=...&token=..."
//! timeout = 30
//!
//! [input]
//! path = "./send-json.json"
//!
//! [delivery]
//! fail_on_error = false
//! ```
//!
//! Every key is optional. Unknown keys and sections are rejected so that a
//! typo does not silently fall back to a default.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub webhook: WebhookSection,
    pub input: InputSection,
    pub delivery: DeliverySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebhookSection {
    /// Lower precedence than both `--url` and `WEBHOOK_URL`.
    pub url: Option<String>,
    /// Seconds.
    pub timeout: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeliverySection {
    pub fail_on_error: bool,
}

impl TomlConfig {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FileRead`] or [`ConfigError::TomlParse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// # Errors
    ///
    /// [`ConfigError::TomlParse`] on malformed TOML or unknown keys.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
