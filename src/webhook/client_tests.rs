//! Tests for `ReqwestClient`.
//!
//! These cover construction and transport error classification. Success
//! paths against a live server are exercised through the mock-based
//! sender tests instead.

use super::*;
use std::time::Duration;

/// Client for loopback tests; bypasses any proxy configured in the environment.
fn local_client(timeout: Duration) -> ReqwestClient {
    let inner = reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap();
    ReqwestClient::from_client(inner)
}

mod reqwest_client {
    use super::*;

    #[test]
    fn with_timeout_builds_client() {
        let client = ReqwestClient::with_timeout(Duration::from_secs(5)).unwrap();

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        let _ = format!("{client:?}");
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn connection_refused_is_connection_error() {
        // Bind then drop a listener so the port is very likely closed.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = local_client(Duration::from_secs(5));
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/hook")).unwrap();

        let result = client.request(HttpRequest::json(url, b"{}".to_vec())).await;

        assert!(
            matches!(result, Err(HttpError::Connection(_))),
            "Expected connection error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        // Accepts the connection but never answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let client = local_client(Duration::from_millis(200));
        let url = url::Url::parse(&format!("http://{addr}/hook")).unwrap();

        let result = client.request(HttpRequest::json(url, b"{}".to_vec())).await;
        drop(listener);

        assert!(
            matches!(result, Err(HttpError::Timeout)),
            "Expected timeout, got {result:?}"
        );
    }
}
