use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tokio::time::timeout;

use crate::config::FactsConfig;

use super::{FactClient, LookupError};

/// Fact client that asks a numbers-facts HTTP service (`GET {base_url}/{n}`).
#[derive(Debug, Clone)]
pub struct HttpFactClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpFactClient {
    pub fn new(config: &FactsConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|source| LookupError::Request { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// Full URL queried for `number`.
    pub fn url_for(&self, number: i64) -> String {
        format!("{}/{}", self.base_url, number)
    }

    async fn do_fetch(&self, number: i64) -> Result<String, LookupError> {
        let response = self
            .client
            .get(self.url_for(number))
            .header(ACCEPT, "text/plain")
            .send()
            .await
            .map_err(|source| LookupError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| LookupError::Request { source })?;

        let text = body.trim();
        if text.is_empty() {
            return Err(LookupError::EmptyBody);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl FactClient for HttpFactClient {
    async fn fetch(&self, number: i64) -> Result<String, LookupError> {
        tracing::debug!(number, url = %self.url_for(number), "Fetching fact");

        match timeout(self.request_timeout, self.do_fetch(number)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn url_joins_base_and_number() {
        let config = FactsConfig {
            base_url: "http://facts.example.com/".to_string(),
            ..FactsConfig::default()
        };
        let client = HttpFactClient::new(&config).unwrap();
        assert_eq!(client.url_for(42), "http://facts.example.com/42");
        assert_eq!(client.url_for(-3), "http://facts.example.com/-3");
    }
}
