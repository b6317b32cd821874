//! HTTP client for the Skycast proxy endpoint.
//!
//! Mirrors what the proxy promises: JSON on every path. A non-JSON body is
//! treated as a malformed response rather than decoded blindly, and
//! structured `{"error": ...}` bodies become user-facing messages.

use reqwest::{Client, header};
use serde::Deserialize;
use skycast_core::model::WeatherData;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Connection error. Check your network and try again.")]
    Connection(#[source] reqwest::Error),

    #[error("The server returned an invalid response. Try again in a moment.")]
    MalformedResponse,

    /// The proxy answered with a structured error body.
    #[error("{0}")]
    Server(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    http: Client,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub async fn get_weather(&self, city: &str) -> Result<WeatherData, ClientError> {
        let url = format!("{}/api/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("city", city)])
            .send()
            .await
            .map_err(ClientError::Connection)?;

        let status = res.status();

        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("application/json") {
            return Err(ClientError::MalformedResponse);
        }

        let body = res
            .text()
            .await
            .map_err(|_| ClientError::MalformedResponse)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP error {status}"));
            return Err(ClientError::Server(message));
        }

        serde_json::from_str(&body).map_err(|_| ClientError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::get};

    async fn spawn_stub(app: Router) -> ProxyClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        ProxyClient::new(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn non_json_body_is_a_malformed_response() {
        // Plain &str handlers answer with text/plain, like a gateway error
        // page in front of the proxy would.
        let app = Router::new().route(
            "/api/weather",
            get(|| async { "<html>service unavailable</html>" }),
        );
        let client = spawn_stub(app).await;

        let err = client.get_weather("London").await.unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse));
        assert!(err.to_string().contains("invalid response"));
    }

    #[tokio::test]
    async fn structured_error_body_becomes_the_message() {
        let app = Router::new().route(
            "/api/weather",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({"error": "city not found; check the name"})),
                )
            }),
        );
        let client = spawn_stub(app).await;

        let err = client.get_weather("Atlantis").await.unwrap_err();
        match err {
            ClientError::Server(message) => assert_eq!(message, "city not found; check the name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = ProxyClient::new("http://127.0.0.1:3000///");
        assert_eq!(client.base_url, "http://127.0.0.1:3000");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        let client = ProxyClient::new("http://127.0.0.1:1");
        let err = client.get_weather("London").await.unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
        assert!(err.to_string().contains("Connection error"));
    }
}
