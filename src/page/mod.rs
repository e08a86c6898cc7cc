//! Element access seam between the controllers and the host document.
//!
//! A browser binding implements [`DomReader`] and [`DomWriter`] over the real
//! DOM; [`memory::MemoryDom`] is the in-process implementation used by the
//! command-line driver and the tests.

use crate::page::errors::PageResult;

pub mod errors;
pub mod events;
pub mod memory;

/// Element ids (and radio group names) the explore page and the community
/// form expose.
pub mod ids {
    pub const FILTERS: &str = "filters";
    pub const RESULTS: &str = "results";
    pub const RESULTS_NOT_FOUND: &str = "results_not_found";
    pub const RESULTS_NUMBER: &str = "results_number";
    pub const RESULTS_ERROR: &str = "results_error";
    pub const CLEAR_FILTERS: &str = "clear-filters";
    pub const CSRF_TOKEN: &str = "csrf_token";
    pub const QUERY: &str = "query";
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const AFFILIATION: &str = "affiliation";
    pub const TAGS: &str = "tags";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const DOI: &str = "doi";
    pub const MIN_SIZE: &str = "min_size";
    pub const MAX_SIZE: &str = "max_size";
    pub const PUBLICATION_TYPE: &str = "publication_type";
    /// Radio group name, not an element id.
    pub const SORTING: &str = "sorting";

    pub const VISUAL_IDENTITY_INPUT: &str = "visual_identity_input";
    pub const VISUAL_IDENTITY_PREVIEW_CONTAINER: &str = "visual_identity_preview_container";
    pub const VISUAL_IDENTITY_PREVIEW: &str = "visual_identity_preview";
}

/// CSS `display` states the controllers toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

/// An `<option>` of a `<select>`: submitted value and visible text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

pub trait DomReader {
    fn has_element(&self, id: &str) -> bool;
    fn has_radio_group(&self, name: &str) -> bool;
    /// Current `value` of an input or select; `None` when the element is absent.
    fn value(&self, id: &str) -> Option<String>;
    /// Value of the checked radio in the group, if any.
    fn checked_radio(&self, name: &str) -> Option<String>;
    fn select_options(&self, id: &str) -> PageResult<Vec<SelectOption>>;
    fn text(&self, id: &str) -> Option<String>;
    fn display(&self, id: &str) -> Option<Display>;
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
}

pub trait DomWriter {
    fn set_value(&mut self, id: &str, value: &str) -> PageResult<()>;
    /// Checks the radio whose value matches and unchecks the rest of the group.
    fn check_radio(&mut self, name: &str, value: &str) -> PageResult<()>;
    fn set_text(&mut self, id: &str, text: &str) -> PageResult<()>;
    fn set_display(&mut self, id: &str, display: Display) -> PageResult<()>;
    fn clear_children(&mut self, id: &str) -> PageResult<()>;
    fn append_html(&mut self, id: &str, html: &str) -> PageResult<()>;
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> PageResult<()>;
}
