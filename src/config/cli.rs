use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Post a flattened JSON document as a chat card
///
/// Reads a JSON object, flattens nested objects into dotted key-value
/// pairs, and posts them as a card to a webhook (e.g. Google Chat).
#[derive(Debug, Parser)]
#[command(name = "json-card", version, about, long_about = None)]
pub struct Cli {
    /// Webhook URL (overrides the WEBHOOK_URL environment variable)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// JSON document to send ('-' reads standard input) [default: ./send-json.json]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Seconds to wait for the webhook to answer [default: 30]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// TOML file with webhook, input and delivery settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the card payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 2 when the card cannot be delivered
    #[arg(long)]
    pub fail_on_delivery_error: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses an explicit argument list; the first item is the program name.
    pub fn parse_from_iter<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }
}
