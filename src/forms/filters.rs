//! Query-string inputs: the page's `?query=` parameter and the driver's
//! filter arguments.

use serde::Deserialize;

use crate::domain::criteria::SORTING_OPTIONS;
use crate::forms::FormError;
use crate::page::{DomReader, DomWriter, ids};

/// Parameters read from the page location on load.
#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    query: Vec<String>,
}

impl LocationQuery {
    /// Parses a location search string, with or without the leading `?`.
    pub fn parse(search: &str) -> Result<Self, FormError> {
        Ok(serde_html_form::from_str(search.trim_start_matches('?'))?)
    }

    /// First `query` value, or `""` when absent.
    pub fn query(&self) -> &str {
        self.query.first().map(String::as_str).unwrap_or_default()
    }
}

/// Filter values passed to the command-line driver as a query string, e.g.
/// `query=genomics&publication_type=Journal+Article&sorting=oldest`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterArgs {
    pub query: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub affiliation: Option<String>,
    pub tags: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Option value (`article`) or its visible label (`Journal Article`).
    pub publication_type: Option<String>,
    pub sorting: Option<String>,
}

impl FilterArgs {
    pub fn parse(input: &str) -> Result<Self, FormError> {
        Ok(serde_html_form::from_str(input.trim_start_matches('?'))?)
    }

    /// The `query` value, reused as the page location for the initial search.
    pub fn location(&self) -> String {
        match &self.query {
            Some(query) => serde_html_form::to_string([("query", query.as_str())])
                .map(|encoded| format!("?{encoded}"))
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Writes the filters into the form controls, leaving `query` to the
    /// location pre-fill.
    pub fn apply<D>(&self, dom: &mut D) -> Result<(), FormError>
    where
        D: DomReader + DomWriter,
    {
        let text_fields = [
            (ids::TITLE, &self.title),
            (ids::AUTHOR, &self.author),
            (ids::AFFILIATION, &self.affiliation),
            (ids::TAGS, &self.tags),
            (ids::START_DATE, &self.start_date),
            (ids::END_DATE, &self.end_date),
        ];
        for (id, value) in text_fields {
            if let Some(value) = value {
                dom.set_value(id, value)?;
            }
        }

        if let Some(publication_type) = &self.publication_type {
            let wanted = publication_type.trim();
            let option = dom
                .select_options(ids::PUBLICATION_TYPE)?
                .into_iter()
                .find(|option| option.value == wanted || option.text.eq_ignore_ascii_case(wanted))
                .ok_or_else(|| FormError::UnknownPublicationType(wanted.to_string()))?;
            dom.set_value(ids::PUBLICATION_TYPE, &option.value)?;
        }

        if let Some(sorting) = &self.sorting {
            if !SORTING_OPTIONS.contains(&sorting.as_str()) {
                return Err(FormError::UnknownSorting(sorting.clone()));
            }
            dom.check_radio(ids::SORTING, sorting)?;
        }

        Ok(())
    }
}
