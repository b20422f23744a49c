//! json-card: flatten a JSON document and post it as a chat card.
//!
//! The pipeline is:
//! 1. [`input`] loads a JSON document whose root is an object
//! 2. [`flatten`] turns nested objects into dotted key-value pairs
//! 3. [`card`] builds a chat card with one widget per pair
//! 4. [`webhook`] posts the card to a webhook URL once
//!
//! [`config`] resolves the webhook URL and options from the CLI, the
//! environment, and an optional TOML file.

pub mod card;
pub mod config;
pub mod flatten;
pub mod input;
pub mod webhook;
