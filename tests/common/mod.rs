#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::FixedOffset;
use dataset_explore::domain::dataset::{Author, DatasetSummary};
use dataset_explore::domain::types::DatasetId;
use dataset_explore::dto::explore::SearchRequest;
use dataset_explore::render::CardRenderer;
use dataset_explore::transport::{SearchTransport, TransportResult};

/// Transport answering from a queue of canned responses and recording every
/// request it receives.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<TransportResult<Vec<DatasetSummary>>>>,
    requests: RefCell<Vec<SearchRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: TransportResult<Vec<DatasetSummary>>) -> &Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.borrow().clone()
    }
}

impl SearchTransport for ScriptedTransport {
    fn search(&self, request: &SearchRequest) -> TransportResult<Vec<DatasetSummary>> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn renderer() -> CardRenderer {
    CardRenderer::with_offset(FixedOffset::east_opt(0).unwrap()).unwrap()
}

pub fn dataset(id: i64, title: &str) -> DatasetSummary {
    DatasetSummary {
        id: DatasetId::new(id),
        url: format!("/doi/10.1234/dataset{id}"),
        title: title.to_string(),
        description: format!("Description of {title}"),
        created_at: "Wed, 03 Apr 2024 17:30:00 GMT".to_string(),
        publication_type: "Journal Article".to_string(),
        total_size_in_human_format: "2.5 MB".to_string(),
        authors: vec![Author {
            name: "Ada Lovelace".to_string(),
            affiliation: Some("University of Seville".to_string()),
            orcid: None,
        }],
        tags: vec!["genomics".to_string(), "dna".to_string()],
    }
}
