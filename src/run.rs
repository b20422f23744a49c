//! Application execution logic.
//!
//! Runs the one-shot pipeline: resolve the configuration, load the document,
//! flatten it, build the card, and deliver it to the webhook.

use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use json_card::card::{CardPayload, build_card};
use json_card::config::{Cli, ConfigError, EnvConfig, ValidatedConfig};
use json_card::flatten::flatten;
use json_card::input::{self, InputError};
use json_card::webhook::{CardSender, DeliveryError, HttpWebhook, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The input document could not be loaded.
    #[error("{0}")]
    Input(#[from] InputError),

    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Failed to render the payload for a dry run.
    #[error("Failed to render card payload: {0}")]
    Render(#[source] serde_json::Error),

    /// The card was not delivered and delivery failures are fatal.
    #[error("{0}")]
    Delivery(#[source] DeliveryError),
}

/// A resolved configuration together with the card it will send.
#[derive(Debug)]
pub struct Prepared {
    pub config: ValidatedConfig,
    pub payload: CardPayload,
}

/// Resolves the configuration, then loads the document and builds its card.
///
/// The webhook URL is checked before the input is opened, so a missing URL
/// is reported even when the document is also missing.
///
/// # Errors
///
/// Returns [`RunError::Config`] if the configuration is invalid, otherwise
/// [`RunError::Input`] if the document cannot be loaded.
pub fn prepare(cli: &Cli, env: &EnvConfig) -> Result<Prepared, RunError> {
    let config = ValidatedConfig::load(cli, env)?;
    tracing::debug!("{config}");

    let payload = load_card(&config.input)?;
    Ok(Prepared { config, payload })
}

/// Prints or delivers a prepared card.
///
/// A delivery failure is logged and swallowed unless
/// `fail_on_delivery_error` is set.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be created
/// - Delivery fails and `fail_on_delivery_error` is set
#[cfg(not(tarpaulin_include))]
pub async fn execute(prepared: Prepared) -> Result<(), RunError> {
    let Prepared { config, payload } = prepared;

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - card will be printed but not sent");
        let rendered = serde_json::to_string_pretty(&payload).map_err(RunError::Render)?;
        println!("{rendered}");
        return Ok(());
    }

    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::ClientBuild)?;
    let webhook = HttpWebhook::new(client, config.url);

    deliver(&webhook, &payload, config.fail_on_delivery_error).await
}

/// Loads the document at `path` and turns it into a card.
fn load_card(path: &Path) -> Result<CardPayload, RunError> {
    let document = input::load_document(path)?;
    Ok(card_for(&document))
}

/// Flattens a document and builds its card.
fn card_for(document: &Map<String, Value>) -> CardPayload {
    let flat = flatten(document);
    tracing::debug!("Flattened document into {} entries", flat.len());
    build_card(&flat)
}

/// Sends the card once and applies the delivery failure policy.
async fn deliver<S: CardSender>(
    sender: &S,
    payload: &CardPayload,
    fail_on_error: bool,
) -> Result<(), RunError> {
    match sender.send(payload).await {
        Ok(()) => Ok(()),
        Err(e) if fail_on_error => Err(RunError::Delivery(e)),
        Err(e) => {
            tracing::error!("{e}");
            Ok(())
        }
    }
}
