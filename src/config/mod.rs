//! Configuration layer for json-card.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Environment snapshot ([`EnvConfig`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Environment** - only `WEBHOOK_URL`, optionally loaded from a `.env` file
//! 3. **TOML config file**
//! 4. **Built-in defaults**
//!
//! The webhook URL has no default; it must come from one of the first three.
//!
//! Boolean flags (`--fail-on-delivery-error`) use OR semantics: if set in
//! either the CLI or TOML, the result is `true`.

mod cli;
mod defaults;
mod env;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::Cli;
pub use env::EnvConfig;
pub use error::ConfigError;
pub use toml::TomlConfig;
pub use validated::ValidatedConfig;
