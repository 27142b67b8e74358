// crates/nationnote-core/src/source/http.rs
use super::{HttpReply, Transport};
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

/// [`Transport`] over a blocking `reqwest` client (rustls).
///
/// Without `request_timeout` in the config the client waits indefinitely.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("nationnote/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| DirectoryError::SourceUnavailable(format!("HTTP client setup: {e}")))?;
        Ok(Self { client })
    }

    /// Uses an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpReply> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| DirectoryError::SourceUnavailable(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| DirectoryError::SourceUnavailable(e.to_string()))?;
        debug!(%url, status, bytes = body.len(), "received reply");
        Ok(HttpReply { status, body })
    }
}
