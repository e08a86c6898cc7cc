//! Dataset summaries returned by the search endpoint.

use serde::Deserialize;

use crate::domain::types::DatasetId;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub orcid: Option<String>,
}

impl Author {
    /// Affiliation if present and non-empty.
    pub fn affiliation(&self) -> Option<&str> {
        self.affiliation.as_deref().filter(|s| !s.is_empty())
    }

    /// ORCID if present and non-empty.
    pub fn orcid(&self) -> Option<&str> {
        self.orcid.as_deref().filter(|s| !s.is_empty())
    }
}

/// One search hit. Rendered immediately and then dropped.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DatasetSummary {
    pub id: DatasetId,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Timestamp exactly as the endpoint serialized it.
    pub created_at: String,
    pub publication_type: String,
    pub total_size_in_human_format: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DatasetSummary {
    /// Download link for the dataset archive.
    pub fn download_url(&self) -> String {
        format!("/dataset/download/{}", self.id)
    }
}
