//! Validated configuration after merging CLI, environment, and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::env::EnvConfig;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args, an environment
/// snapshot, and an optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// Path to the JSON input document
    pub input: PathBuf,

    /// Request timeout for the webhook call
    pub timeout: Duration,

    /// Print the payload instead of sending it
    pub dry_run: bool,

    /// Escalate delivery failures to a non-zero exit status
    pub fail_on_delivery_error: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ url: {}, input: {}, timeout: {}s, dry_run: {}, \
             fail_on_delivery_error: {} }}",
            redact_query(&self.url),
            self.input.display(),
            self.timeout.as_secs(),
            self.dry_run,
            self.fail_on_delivery_error,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from all configuration sources.
    ///
    /// Priority is CLI, then environment, then TOML, then built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing or invalid
    /// - The timeout is zero
    pub fn from_raw(
        cli: &Cli,
        env: &EnvConfig,
        toml: Option<&TomlConfig>,
    ) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, env, toml)?;
        let input = Self::resolve_input(cli, toml);
        let timeout = Self::resolve_timeout(cli, toml)?;

        let fail_on_delivery_error =
            cli.fail_on_delivery_error || toml.is_some_and(|t| t.delivery.fail_on_error);

        Ok(Self {
            url,
            input,
            timeout,
            dry_run: cli.dry_run,
            fail_on_delivery_error,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI, environment, and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli, env: &EnvConfig) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, env, toml.as_ref())
    }

    fn resolve_url(
        cli: &Cli,
        env: &EnvConfig,
        toml: Option<&TomlConfig>,
    ) -> Result<Url, ConfigError> {
        let url_str = cli
            .url
            .as_deref()
            .or(env.webhook_url.as_deref())
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or(ConfigError::MissingUrl)?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}', expected http or https", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_input(cli: &Cli, toml: Option<&TomlConfig>) -> PathBuf {
        if let Some(ref path) = cli.input {
            return path.clone();
        }

        toml.and_then(|t| t.input.path.as_deref())
            .unwrap_or(defaults::INPUT_PATH)
            .into()
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Duration::from_secs(seconds))
    }
}

// Helper functions

/// Hides the query string, which carries credentials for chat webhooks.
fn redact_query(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let mut redacted = url.clone();
    redacted.set_query(Some("redacted"));
    redacted.to_string()
}
