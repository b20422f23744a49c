//! Card sender trait and HTTP implementation.

use crate::card::CardPayload;

use super::{DeliveryError, HttpClient, HttpRequest};

/// Trait for delivering a card payload to an external service.
///
/// This abstraction lets the pipeline be driven with a mock sender in tests.
pub trait CardSender: Send + Sync {
    /// Delivers the card.
    ///
    /// Implementations make a single attempt; they do not retry.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if the card could not be delivered.
    fn send(
        &self,
        payload: &CardPayload,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}

/// HTTP-based card sender.
///
/// POSTs the card as a JSON body to a fixed webhook URL.
///
/// # Example
///
/// ```
/// use json_card::webhook::{HttpWebhook, ReqwestClient};
/// use url::Url;
///
/// let webhook = HttpWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://chat.example.com/v1/spaces/AAA/messages").unwrap(),
/// );
/// ```
#[derive(Debug)]
pub struct HttpWebhook<H> {
    client: H,
    url: url::Url,
}

impl<H> HttpWebhook<H> {
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> HttpWebhook<H> {
    fn build_request(&self, payload: &CardPayload) -> Result<HttpRequest, DeliveryError> {
        Ok(HttpRequest::json(self.url.clone(), payload.to_json_bytes()?))
    }
}

impl<H: HttpClient> CardSender for HttpWebhook<H> {
    async fn send(&self, payload: &CardPayload) -> Result<(), DeliveryError> {
        let request = self.build_request(payload)?;

        tracing::debug!(
            host = self.url.host_str().unwrap_or_default(),
            widgets = payload.widgets().count(),
            "Posting card"
        );

        let response = self.client.request(request).await?;

        if response.is_success() {
            tracing::info!(status = %response.status, "Card sent successfully");
            return Ok(());
        }

        Err(DeliveryError::NonSuccessStatus {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}
