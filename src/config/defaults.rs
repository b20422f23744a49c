//! Default values for configuration options.

/// Environment variable holding the webhook URL.
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";

/// Default input document path, relative to the working directory.
pub const INPUT_PATH: &str = "./send-json.json";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;
