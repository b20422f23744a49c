use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// [`HttpClient`] backed by a `reqwest::Client`.
///
/// ```no_run
/// use json_card::webhook::{HttpClient, HttpRequest, ReqwestClient};
/// use std::time::Duration;
///
/// # async fn post() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10))?;
/// let url = url::Url::parse("https://chat.example.com/webhook")?;
/// let response = client.request(HttpRequest::json(url, b"{}".to_vec())).await?;
/// assert!(response.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// A client without a request deadline; prefer [`Self::with_timeout`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that take longer than `timeout` fail with
    /// [`HttpError::Timeout`].
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner })
    }

    #[must_use]
    pub const fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self
            .inner
            .post(req.url.as_str())
            .header(http::header::CONTENT_TYPE, req.content_type)
            .body(req.body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify)?.to_vec();

        Ok(HttpResponse::new(status, body))
    }
}

fn classify(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout
    } else if error.is_builder() {
        HttpError::InvalidUrl(error.to_string())
    } else {
        HttpError::Connection(Box::new(error))
    }
}
