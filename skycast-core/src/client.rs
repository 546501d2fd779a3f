use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Thin wrapper over [`reqwest::Client`] with a fixed per-request timeout.
///
/// Transport-level failures (connect, timeout, body read) map to
/// [`Error::Network`]; status interpretation is left to the caller, which
/// knows which endpoint it is talking to.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
}

/// Status plus raw body of a completed exchange.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Issue a GET with query parameters.
    pub async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(format!("request to {url} failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| Error::Network(format!("failed to read response body from {url}: {e}")))?;

        debug!("GET {url} -> {status}");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connection_refused_maps_to_network_error() {
        // Bind then drop a listener so the port is known to be closed.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = HttpClient::new(Duration::from_secs(1)).unwrap();
        let err = client
            .get(&format!("http://127.0.0.1:{port}/anything"), &[])
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn json_deserializes_the_body() {
        let res = HttpResponse {
            status: StatusCode::OK,
            body: r#"{"lat": 3.0, "lon": 101.0}"#.to_string(),
        };

        let value: serde_json::Value = res.json().unwrap();
        assert_eq!(value["lat"], 3.0);
    }
}
