//! Result card rendering.
//!
//! Cards are produced from embedded Tera templates with autoescaping on, so
//! text coming from the search endpoint (titles, tags, author names, ...) is
//! always escaped. Descriptions may carry inline markup and go through
//! `ammonia` before being inserted verbatim.

use chrono::FixedOffset;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::dataset::DatasetSummary;
use crate::dto::explore::{AuthorLine, DatasetCard};

pub mod date;

const CARD_TEMPLATE_NAME: &str = "explore/card.html";
const CARD_TEMPLATE: &str = include_str!("../../templates/explore/card.html");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Count label shown above the results.
pub fn results_label(count: usize) -> String {
    let noun = if count == 1 { "dataset" } else { "datasets" };
    format!("{count} {noun} found")
}

/// Keeps relative and http(s) links; anything else (e.g. `javascript:`)
/// becomes `#`.
pub fn safe_href(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if trimmed.starts_with('/') || lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        "#".to_string()
    }
}

pub fn sanitize_description(description: &str) -> String {
    ammonia::clean(description)
}

pub struct CardRenderer {
    tera: Tera,
    offset: FixedOffset,
}

impl CardRenderer {
    pub fn with_offset(offset: FixedOffset) -> RenderResult<Self> {
        Self::with_template(offset, CARD_TEMPLATE)
    }

    pub(crate) fn with_template(offset: FixedOffset, template: &str) -> RenderResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(CARD_TEMPLATE_NAME, template)?;
        Ok(Self { tera, offset })
    }

    pub fn card(&self, dataset: &DatasetSummary) -> DatasetCard {
        DatasetCard {
            id: dataset.id.get(),
            href: safe_href(&dataset.url),
            download_href: dataset.download_url(),
            title: dataset.title.clone(),
            publication_type: dataset.publication_type.clone(),
            created_at: date::format_created_at(&dataset.created_at, self.offset),
            description: sanitize_description(&dataset.description),
            authors: dataset
                .authors
                .iter()
                .map(|author| AuthorLine {
                    name: author.name.clone(),
                    affiliation: author.affiliation().map(str::to_string),
                    orcid: author.orcid().map(str::to_string),
                })
                .collect(),
            tags: dataset.tags.clone(),
            total_size: dataset.total_size_in_human_format.clone(),
        }
    }

    pub fn render(&self, dataset: &DatasetSummary) -> RenderResult<String> {
        let mut context = Context::new();
        context.insert("dataset", &self.card(dataset));
        Ok(self.tera.render(CARD_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Author;
    use crate::domain::types::DatasetId;

    fn renderer() -> CardRenderer {
        CardRenderer::with_offset(FixedOffset::east_opt(0).unwrap()).unwrap()
    }

    fn sample() -> DatasetSummary {
        DatasetSummary {
            id: DatasetId::new(7),
            url: "http://localhost/doi/10.1234/ds7".to_string(),
            title: "Genomics <b>set</b>".to_string(),
            description: "Reads <em>and</em> <script>alert(1)</script>calls".to_string(),
            created_at: "Wed, 03 Apr 2024 17:30:00 GMT".to_string(),
            publication_type: "Journal Article".to_string(),
            total_size_in_human_format: "1.2 MB".to_string(),
            authors: vec![
                Author {
                    name: "Ada".to_string(),
                    affiliation: Some("Uni".to_string()),
                    orcid: Some("0000-0001".to_string()),
                },
                Author {
                    name: "Bob".to_string(),
                    affiliation: None,
                    orcid: None,
                },
            ],
            tags: vec!["dna".to_string(), "rna".to_string()],
        }
    }

    #[test]
    fn label_pluralizes() {
        assert_eq!(results_label(0), "0 datasets found");
        assert_eq!(results_label(1), "1 dataset found");
        assert_eq!(results_label(12), "12 datasets found");
    }

    #[test]
    fn href_rejects_script_urls() {
        assert_eq!(safe_href("/dataset/view/1"), "/dataset/view/1");
        assert_eq!(safe_href("HTTPS://example.org"), "HTTPS://example.org");
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href(""), "#");
    }

    #[test]
    fn card_view_collects_fields() {
        let card = renderer().card(&sample());

        assert_eq!(card.id, 7);
        assert_eq!(card.download_href, "/dataset/download/7");
        assert_eq!(card.created_at, "April 3, 2024 at 5:30 PM");
        assert_eq!(card.authors[1].affiliation, None);
        assert!(!card.description.contains("script"));
        assert!(card.description.contains("<em>and</em>"));
    }

    #[test]
    fn rendered_card_escapes_server_text() {
        let html = renderer().render(&sample()).unwrap();

        assert!(html.contains("Genomics &lt;b&gt;set&lt;&#x2F;b&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("data-dataset-id=\"7\""));
        assert!(html.contains("Download (1.2 MB)"));
        assert!(html.contains("April 3, 2024 at 5:30 PM"));
    }

    #[test]
    fn rendered_card_lists_authors_and_tags_in_order() {
        let html = renderer().render(&sample()).unwrap();

        assert!(html.contains("Ada (Uni) (0000-0001)</p>"));
        assert!(html.contains(">Bob</p>"));
        let dna = html.find("data-tag=\"dna\"").unwrap();
        let rna = html.find("data-tag=\"rna\"").unwrap();
        assert!(dna < rna);
        assert!(html.contains("data-publication-type=\"Journal Article\""));
    }
}
