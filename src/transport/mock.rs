//! Mock transport for isolating controllers in tests.

use mockall::mock;

use crate::domain::dataset::DatasetSummary;
use crate::dto::explore::SearchRequest;
use crate::transport::{SearchTransport, TransportResult};

mock! {
    pub Transport {}

    impl SearchTransport for Transport {
        fn search(&self, request: &SearchRequest) -> TransportResult<Vec<DatasetSummary>>;
    }
}
