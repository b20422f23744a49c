//! Delivery of a card to the chat webhook.
//!
//! [`HttpWebhook`] turns a [`CardPayload`](crate::card::CardPayload) into a
//! single JSON `POST` through an [`HttpClient`]. [`ReqwestClient`] is the
//! network-backed client; tests plug in canned ones.

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::{DeliveryError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse, JSON_CONTENT_TYPE};
pub use sender::{CardSender, HttpWebhook};
