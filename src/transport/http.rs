//! Blocking HTTP transport for the explore endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderValue};

use crate::domain::dataset::DatasetSummary;
use crate::dto::explore::SearchRequest;
use crate::models::config::ClientConfig;
use crate::transport::{SearchTransport, TransportError, TransportResult, decode_results};
use crate::{CSRF_HEADER, EXPLORE_ENDPOINT};

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransportError::Status(status.as_u16()),
            None => TransportError::Request(err.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let user_agent = config.user_agent.clone().unwrap_or_else(|| {
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
        });
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self::from_client(client, &config.base_url))
    }

    /// Wraps an existing client; `base_url` is the site root.
    pub fn from_client(client: Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), EXPLORE_ENDPOINT);
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchTransport for HttpSearchClient {
    fn search(&self, request: &SearchRequest) -> TransportResult<Vec<DatasetSummary>> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(&request.criteria);
        if let Some(token) = &request.criteria.csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }

        log::debug!("POST {} (request #{})", self.endpoint, request.seq);
        let response = builder.send()?.error_for_status()?;
        let body = response.text()?;

        decode_results(&body)
    }
}
