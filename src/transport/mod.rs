//! Delivery of search requests to the explore endpoint.

use thiserror::Error;

use crate::domain::dataset::DatasetSummary;
use crate::dto::explore::SearchRequest;

#[cfg(feature = "cli")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

pub trait SearchTransport {
    /// Sends one request and returns the datasets in server order.
    fn search(&self, request: &SearchRequest) -> TransportResult<Vec<DatasetSummary>>;
}

impl<T: SearchTransport + ?Sized> SearchTransport for &T {
    fn search(&self, request: &SearchRequest) -> TransportResult<Vec<DatasetSummary>> {
        (**self).search(request)
    }
}

/// Decodes the endpoint body: a JSON array of dataset summaries.
pub fn decode_results(body: &str) -> TransportResult<Vec<DatasetSummary>> {
    Ok(serde_json::from_str(body)?)
}
