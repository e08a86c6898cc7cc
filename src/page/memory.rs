//! In-process document used by the command-line driver and the tests.

use std::collections::{BTreeMap, HashMap};

use crate::domain::criteria::{DEFAULT_PUBLICATION_TYPE, DEFAULT_SORTING, SORTING_OPTIONS};
use crate::page::errors::{PageError, PageResult};
use crate::page::{Display, DomReader, DomWriter, SelectOption, ids};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Input,
    Select,
    Block,
    Image,
    Button,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub value: String,
    pub text: String,
    pub display: Display,
    pub options: Vec<SelectOption>,
    /// Markup fragments appended as children, in order.
    pub children: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            value: String::new(),
            text: String::new(),
            display: Display::Block,
            options: Vec::new(),
            children: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Radio {
    pub value: String,
    pub checked: bool,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryDom {
    elements: HashMap<String, Element>,
    radio_groups: HashMap<String, Vec<Radio>>,
}

/// Publication types offered by the explore selector, as `(value, label)`.
pub const PUBLICATION_TYPES: &[(&str, &str)] = &[
    ("none", "None"),
    ("annotationcollection", "Annotation Collection"),
    ("book", "Book"),
    ("section", "Book Section"),
    ("conferencepaper", "Conference Paper"),
    ("datamanagementplan", "Data Management Plan"),
    ("article", "Journal Article"),
    ("patent", "Patent"),
    ("preprint", "Preprint"),
    ("deliverable", "Project Deliverable"),
    ("milestone", "Project Milestone"),
    ("proposal", "Proposal"),
    ("report", "Report"),
    ("softwaredocumentation", "Software Documentation"),
    ("taxonomictreatment", "Taxonomic Treatment"),
    ("technicalnote", "Technical Note"),
    ("thesis", "Thesis"),
    ("workingpaper", "Working Paper"),
    ("other", "Other"),
];

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full explore page: filter form, result panels and indicators.
    pub fn explore_page() -> Self {
        let mut options = vec![SelectOption::new(DEFAULT_PUBLICATION_TYPE, "Any")];
        options.extend(
            PUBLICATION_TYPES
                .iter()
                .map(|(value, text)| SelectOption::new(*value, *text)),
        );

        let mut dom = Self::new()
            .with_block(ids::FILTERS)
            .with_block(ids::RESULTS)
            .with_block(ids::RESULTS_NOT_FOUND)
            .with_block(ids::RESULTS_NUMBER)
            .with_block(ids::RESULTS_ERROR)
            .with_button(ids::CLEAR_FILTERS)
            .with_input(ids::CSRF_TOKEN, "");
        for id in [
            ids::QUERY,
            ids::TITLE,
            ids::AUTHOR,
            ids::AFFILIATION,
            ids::TAGS,
            ids::START_DATE,
            ids::END_DATE,
            ids::DOI,
            ids::MIN_SIZE,
            ids::MAX_SIZE,
        ] {
            dom = dom.with_input(id, "");
        }
        dom.with_select(ids::PUBLICATION_TYPE, options, DEFAULT_PUBLICATION_TYPE)
            .with_radio_group(ids::SORTING, &SORTING_OPTIONS, DEFAULT_SORTING)
            .hidden(ids::RESULTS_NOT_FOUND)
            .hidden(ids::RESULTS_ERROR)
    }

    /// Community form with the visual identity field and its preview.
    pub fn community_form(visual_identity: &str) -> Self {
        Self::new()
            .with_input(ids::VISUAL_IDENTITY_INPUT, visual_identity)
            .with_block(ids::VISUAL_IDENTITY_PREVIEW_CONTAINER)
            .with_image(ids::VISUAL_IDENTITY_PREVIEW)
            .hidden(ids::VISUAL_IDENTITY_PREVIEW_CONTAINER)
    }

    pub fn with_input(mut self, id: &str, value: &str) -> Self {
        let mut element = Element::new(ElementKind::Input);
        element.value = value.to_string();
        self.elements.insert(id.to_string(), element);
        self
    }

    pub fn with_select(mut self, id: &str, options: Vec<SelectOption>, selected: &str) -> Self {
        let mut element = Element::new(ElementKind::Select);
        element.value = selected.to_string();
        element.options = options;
        self.elements.insert(id.to_string(), element);
        self
    }

    pub fn with_block(mut self, id: &str) -> Self {
        self.elements
            .insert(id.to_string(), Element::new(ElementKind::Block));
        self
    }

    pub fn with_image(mut self, id: &str) -> Self {
        self.elements
            .insert(id.to_string(), Element::new(ElementKind::Image));
        self
    }

    pub fn with_button(mut self, id: &str) -> Self {
        self.elements
            .insert(id.to_string(), Element::new(ElementKind::Button));
        self
    }

    pub fn with_radio_group(mut self, name: &str, values: &[&str], checked: &str) -> Self {
        let radios = values
            .iter()
            .map(|value| Radio {
                value: (*value).to_string(),
                checked: *value == checked,
            })
            .collect();
        self.radio_groups.insert(name.to_string(), radios);
        self
    }

    pub fn hidden(mut self, id: &str) -> Self {
        if let Some(element) = self.elements.get_mut(id) {
            element.display = Display::None;
        }
        self
    }

    /// Drops an element, e.g. to model a page that lacks an optional control.
    pub fn without(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self.radio_groups.remove(id);
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Child fragments of an element; empty when the element is absent.
    pub fn children(&self, id: &str) -> &[String] {
        self.elements
            .get(id)
            .map(|element| element.children.as_slice())
            .unwrap_or_default()
    }

    fn element_mut(&mut self, id: &str) -> PageResult<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }
}

impl DomReader for MemoryDom {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn has_radio_group(&self, name: &str) -> bool {
        self.radio_groups
            .get(name)
            .is_some_and(|radios| !radios.is_empty())
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements
            .get(id)
            .filter(|element| matches!(element.kind, ElementKind::Input | ElementKind::Select))
            .map(|element| element.value.clone())
    }

    fn checked_radio(&self, name: &str) -> Option<String> {
        self.radio_groups
            .get(name)?
            .iter()
            .find(|radio| radio.checked)
            .map(|radio| radio.value.clone())
    }

    fn select_options(&self, id: &str) -> PageResult<Vec<SelectOption>> {
        let element = self
            .elements
            .get(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
        if element.kind != ElementKind::Select {
            return Err(PageError::WrongElementKind {
                id: id.to_string(),
                expected: "a select",
            });
        }
        Ok(element.options.clone())
    }

    fn text(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|element| element.text.clone())
    }

    fn display(&self, id: &str) -> Option<Display> {
        self.elements.get(id).map(|element| element.display)
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.attributes.get(name).cloned()
    }
}

impl DomWriter for MemoryDom {
    fn set_value(&mut self, id: &str, value: &str) -> PageResult<()> {
        let element = self.element_mut(id)?;
        match element.kind {
            ElementKind::Input => element.value = value.to_string(),
            // A select only takes values it has an option for.
            ElementKind::Select => {
                element.value = if element.options.iter().any(|o| o.value == value) {
                    value.to_string()
                } else {
                    String::new()
                };
            }
            _ => {
                return Err(PageError::WrongElementKind {
                    id: id.to_string(),
                    expected: "a form control",
                });
            }
        }
        Ok(())
    }

    fn check_radio(&mut self, name: &str, value: &str) -> PageResult<()> {
        let radios = self
            .radio_groups
            .get_mut(name)
            .ok_or_else(|| PageError::MissingRadioGroup(name.to_string()))?;
        for radio in radios.iter_mut() {
            radio.checked = radio.value == value;
        }
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> PageResult<()> {
        let element = self.element_mut(id)?;
        element.children.clear();
        element.text = text.to_string();
        Ok(())
    }

    fn set_display(&mut self, id: &str, display: Display) -> PageResult<()> {
        self.element_mut(id)?.display = display;
        Ok(())
    }

    fn clear_children(&mut self, id: &str) -> PageResult<()> {
        let element = self.element_mut(id)?;
        element.children.clear();
        element.text.clear();
        Ok(())
    }

    fn append_html(&mut self, id: &str, html: &str) -> PageResult<()> {
        self.element_mut(id)?.children.push(html.to_string());
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> PageResult<()> {
        self.element_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
