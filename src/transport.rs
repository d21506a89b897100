//! # HTTP transport
//!
//! The client does not talk to the network directly: it hands a route path and a JSON body
//! to a [`Transport`] and gets back the raw status and body. This keeps status handling and
//! deserialization in one place ([`LongClient`](crate::client::LongClient)) and lets tests
//! plug in a transport that never opens a socket.
//!
//! [`ReqwestTransport`] is the production implementation, backed by a pooled
//! [`reqwest::Client`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::trace;

use crate::{config::ClientConfig, horolong_errors::Result};

/// Status and body of an HTTP answer, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST request per call.
///
/// Implementations must not retry, and must only fail for transport-level problems:
/// a non-success status is a valid [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build the HTTP client from `config`.
    ///
    /// Return
    /// ----------
    /// * The transport, or an error if `config` does not pass [`ClientConfig::check`]
    ///   or the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.check()?;
        let http_client = Client::builder().timeout(config.timeout).build()?;
        Ok(ReqwestTransport {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse> {
        let url = self.url_for(path);
        trace!(%url, "sending POST");

        let response = self.http_client.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        trace!(%url, status, bytes = body.len(), "received answer");
        Ok(RawResponse { status, body })
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
