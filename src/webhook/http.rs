//! Webhook request/response values and the client trait.

use http::{HeaderValue, StatusCode};

use super::HttpError;

/// Media type of every webhook body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON document to be POSTed to a webhook.
///
/// Webhook delivery only ever issues `POST` with a JSON body, so the
/// method is implied and the content type is fixed at construction.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Webhook URL
    pub url: url::Url,
    /// `Content-Type` header value
    pub content_type: HeaderValue,
    /// Serialized JSON body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a POST request carrying an already-serialized JSON body.
    #[must_use]
    pub fn json(url: url::Url, body: Vec<u8>) -> Self {
        Self {
            url,
            content_type: HeaderValue::from_static(JSON_CONTENT_TYPE),
            body,
        }
    }
}

/// What the webhook answered. The body is kept only for error reporting.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status
    pub status: StatusCode,
    /// Buffered response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its status and body.
    #[must_use]
    pub const fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Creates an empty-bodied response.
    #[must_use]
    pub const fn with_status(status: StatusCode) -> Self {
        Self::new(status, Vec::new())
    }

    /// Returns true for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as text, if it is valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Transport used to deliver webhook requests.
///
/// [`ReqwestClient`](super::ReqwestClient) is the production implementation;
/// tests substitute canned responses.
pub trait HttpClient: Send + Sync {
    /// Sends the request and buffers the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if no response was received: connection
    /// failure, timeout, or a URL the transport rejects.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
