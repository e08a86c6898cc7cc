use serde::Serialize;

use crate::domain::criteria::SearchCriteria;

/// A search issued by the filter controller. `seq` increases with every
/// request the controller issues, so a completion can be matched to the
/// latest one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub criteria: SearchCriteria,
}

/// What a completed search did to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// `n` cards were rendered.
    Rendered(usize),
    /// The endpoint returned no datasets; the "not found" panel is shown.
    Empty,
    /// Transport or decoding failed; the error indicator is shown.
    Failed,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

/// One author line of a card.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AuthorLine {
    pub name: String,
    pub affiliation: Option<String>,
    pub orcid: Option<String>,
}

/// Render-ready view of a dataset summary.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DatasetCard {
    pub id: i64,
    /// Link target, already checked to be relative or http(s).
    pub href: String,
    pub download_href: String,
    pub title: String,
    pub publication_type: String,
    pub created_at: String,
    /// Sanitized markup.
    pub description: String,
    pub authors: Vec<AuthorLine>,
    pub tags: Vec<String>,
    pub total_size: String,
}
