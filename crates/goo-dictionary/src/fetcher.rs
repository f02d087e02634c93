use std::time::Duration;

use goo_config::network::NetworkConfig;
use reqwest::blocking::Client;

use crate::error::FetchError;

/// Retrieves raw page text. One attempt per call, blocking until done.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// `PageFetcher` backed by a blocking reqwest client
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Client with the timeout and user agent from the network config
    pub fn from_config(config: &NetworkConfig) -> Result<Self, FetchError> {
        Self::build(config.timeout(), config.user_agent.as_deref())
    }

    fn build(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            // the body is still parsed; the site's own pages decide what it means
            tracing::warn!("GET {} returned HTTP {}", url, status);
        }

        Ok(response.text()?)
    }
}
