//! Async transport backed by reqwest.
//!
//! # Design
//! reqwest reports an error from `send()` only when no response arrived;
//! status codes are handed back as data. Once the status is known, a failure
//! while reading the body is tagged with that status so the gateway treats it
//! as a server-side failure. Error text includes the whole `source()` chain,
//! since reqwest's top-level message hides the root cause.

use std::time::Duration;

use async_trait::async_trait;

use super::HttpTransport;
use crate::config::GatewayConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Async transport built on a shared `reqwest::Client`.
///
/// ```ignore
/// use product_core::{ProductGateway, ReqwestTransport};
///
/// let gateway = ProductGateway::new("http://localhost:8080", ReqwestTransport::new());
/// let products = gateway.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::no_response(&e))?;
        Ok(Self { client })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, TransportError> {
        Self::with_timeout(config.timeout)
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::no_response(&e))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::body(status, &e))?;

        Ok(HttpResponse { status, headers, body })
    }
}
