//! Outbound GET requests.

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};

use crate::error::BindError;

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issues one GET and returns the raw body of a 2xx response.
    async fn get(&self, url: &str) -> Result<Vec<u8>, BindError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>, BindError> {
        let network = |source: reqwest::Error| BindError::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BindError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(network)?;
        Ok(body.to_vec())
    }
}
