//! Live faceted search on the explore page.
//!
//! The controller keeps the results list in sync with the filter form: every
//! bound control edit issues a [`SearchRequest`], and [`FilterController::complete`]
//! renders the response for the most recent request only.

use log::{debug, error, info, warn};

use crate::domain::criteria::{CriteriaField, DEFAULT_PUBLICATION_TYPE, DEFAULT_SORTING, SearchCriteria};
use crate::domain::dataset::DatasetSummary;
use crate::dto::explore::{SearchOutcome, SearchRequest};
use crate::forms::filters::LocationQuery;
use crate::page::events::{ClickTarget, UiEvent};
use crate::page::{Display, DomReader, DomWriter, ids};
use crate::render::{CardRenderer, results_label};
use crate::services::{ServiceError, ServiceResult, require_elements};
use crate::transport::TransportResult;

/// Count label shown when a search could not be completed.
pub const SEARCH_FAILED_LABEL: &str = "Search failed";
/// Message placed in the error indicator.
pub const SEARCH_FAILED_MESSAGE: &str = "Could not load datasets. Please try again.";

/// Event kind a bound control triggers a search on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Input,
    Change,
}

/// Controls bound to the search action. `sorting` is a radio group name.
/// `doi`, `min_size` and `max_size` refresh the results but are not sent.
pub const BINDINGS: &[(&str, Trigger)] = &[
    (ids::QUERY, Trigger::Input),
    (ids::TITLE, Trigger::Input),
    (ids::AUTHOR, Trigger::Input),
    (ids::AFFILIATION, Trigger::Input),
    (ids::TAGS, Trigger::Input),
    (ids::START_DATE, Trigger::Input),
    (ids::END_DATE, Trigger::Input),
    (ids::DOI, Trigger::Input),
    (ids::MIN_SIZE, Trigger::Input),
    (ids::MAX_SIZE, Trigger::Input),
    (ids::PUBLICATION_TYPE, Trigger::Change),
    (ids::SORTING, Trigger::Change),
];

pub const REQUIRED_ELEMENTS: &[&str] = &[
    ids::FILTERS,
    ids::RESULTS,
    ids::RESULTS_NOT_FOUND,
    ids::RESULTS_NUMBER,
    ids::CLEAR_FILTERS,
    ids::QUERY,
    ids::PUBLICATION_TYPE,
];

/// Fields emptied by the clear-filters action.
pub const CLEARED_FIELDS: &[&str] = &[
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
];

pub fn trigger_for(target: &str) -> Option<Trigger> {
    BINDINGS
        .iter()
        .find(|(id, _)| *id == target)
        .map(|(_, trigger)| *trigger)
}

/// Optional elements found on the page at startup.
#[derive(Debug)]
struct FilterElements {
    results_error: bool,
    clearable: Vec<&'static str>,
}

impl FilterElements {
    fn resolve<D: DomReader>(dom: &D) -> Self {
        let clearable: Vec<&'static str> = CLEARED_FIELDS
            .iter()
            .copied()
            .filter(|id| dom.has_element(id))
            .collect();
        for id in CLEARED_FIELDS.iter().filter(|id| !clearable.contains(*id)) {
            warn!("Optional filter #{id} is not on the page");
        }
        Self {
            results_error: dom.has_element(ids::RESULTS_ERROR),
            clearable,
        }
    }
}

pub struct FilterController<D> {
    dom: D,
    renderer: CardRenderer,
    elements: FilterElements,
    last_issued: u64,
}

impl<D> FilterController<D>
where
    D: DomReader + DomWriter,
{
    /// Binds the controller to the page, pre-fills `query` from the location
    /// and runs the initial search as if the user had typed it.
    pub fn init(
        dom: D,
        renderer: CardRenderer,
        location_search: &str,
    ) -> ServiceResult<(Self, SearchRequest)> {
        require_elements(&dom, REQUIRED_ELEMENTS)?;
        if !dom.has_radio_group(ids::SORTING) {
            return Err(ServiceError::MissingElement(ids::SORTING.to_string()));
        }

        let elements = FilterElements::resolve(&dom);
        let mut controller = Self {
            dom,
            renderer,
            elements,
            last_issued: 0,
        };

        let location = LocationQuery::parse(location_search).unwrap_or_else(|err| {
            warn!("Ignoring unreadable location {location_search:?}: {err}");
            LocationQuery::default()
        });
        controller.dom.set_value(ids::QUERY, location.query())?;

        // `query` is always bound to `input`.
        let request = controller.run_search()?;
        Ok((controller, request))
    }

    pub fn dispatch(&mut self, event: &UiEvent) -> ServiceResult<Option<SearchRequest>> {
        match event {
            UiEvent::Input(target) => self.trigger(target, Trigger::Input),
            UiEvent::Change(target) => self.trigger(target, Trigger::Change),
            UiEvent::Click(ClickTarget::Element(id)) if id == ids::CLEAR_FILTERS => {
                self.clear_filters()
            }
            UiEvent::Click(ClickTarget::TagBadge(tag)) => self.select_tag(tag),
            UiEvent::Click(ClickTarget::PublicationTypeBadge(label)) => {
                self.select_publication_type(label)
            }
            UiEvent::Click(ClickTarget::Element(_)) => Ok(None),
        }
    }

    fn trigger(&mut self, target: &str, kind: Trigger) -> ServiceResult<Option<SearchRequest>> {
        if trigger_for(target) == Some(kind) {
            self.run_search().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Resets the result area and snapshots the form into a new request.
    pub fn run_search(&mut self) -> ServiceResult<SearchRequest> {
        self.dom.clear_children(ids::RESULTS)?;
        self.dom.set_display(ids::RESULTS_NOT_FOUND, Display::None)?;
        if self.elements.results_error {
            self.dom.set_display(ids::RESULTS_ERROR, Display::None)?;
        }

        let criteria = self.snapshot();
        self.last_issued += 1;
        debug!("Issuing search #{}: {criteria:?}", self.last_issued);

        Ok(SearchRequest {
            seq: self.last_issued,
            criteria,
        })
    }

    fn snapshot(&self) -> SearchCriteria {
        let token = self.dom.value(ids::CSRF_TOKEN);
        SearchCriteria::from_lookup(token, |field| match field {
            CriteriaField::Sorting => self.dom.checked_radio(field.key()),
            _ => self.dom.value(field.key()),
        })
    }

    /// Applies the response to request `seq`. Responses to anything but the
    /// latest issued request are dropped without touching the page.
    pub fn complete(
        &mut self,
        seq: u64,
        result: TransportResult<Vec<DatasetSummary>>,
    ) -> ServiceResult<SearchOutcome> {
        if seq != self.last_issued {
            debug!(
                "Dropping response to search #{seq}; latest is #{}",
                self.last_issued
            );
            return Ok(SearchOutcome::Stale);
        }

        let datasets = match result {
            Ok(datasets) => datasets,
            Err(err) => {
                error!("Search #{seq} failed: {err}");
                self.show_failure()?;
                return Ok(SearchOutcome::Failed);
            }
        };

        let cards = datasets
            .iter()
            .map(|dataset| self.renderer.render(dataset))
            .collect::<Result<Vec<_>, _>>()?;

        let count = cards.len();
        self.dom.set_text(ids::RESULTS_NUMBER, &results_label(count))?;
        self.dom.clear_children(ids::RESULTS)?;

        if count == 0 {
            self.dom.set_display(ids::RESULTS_NOT_FOUND, Display::Block)?;
            return Ok(SearchOutcome::Empty);
        }

        for card in &cards {
            self.dom.append_html(ids::RESULTS, card)?;
        }
        info!("Rendered {count} datasets for search #{seq}");

        Ok(SearchOutcome::Rendered(count))
    }

    fn show_failure(&mut self) -> ServiceResult<()> {
        self.dom.clear_children(ids::RESULTS)?;
        self.dom.set_text(ids::RESULTS_NUMBER, SEARCH_FAILED_LABEL)?;
        if self.elements.results_error {
            self.dom.set_text(ids::RESULTS_ERROR, SEARCH_FAILED_MESSAGE)?;
            self.dom.set_display(ids::RESULTS_ERROR, Display::Block)?;
        }
        Ok(())
    }

    /// Tag badge click: the tag becomes the free-text query.
    pub fn select_tag(&mut self, tag: &str) -> ServiceResult<Option<SearchRequest>> {
        self.dom.set_value(ids::QUERY, tag.trim())?;
        self.dispatch(&UiEvent::input(ids::QUERY))
    }

    /// Publication-type badge click: selects the option whose visible text
    /// matches the label. Without a match the selector keeps its value, but
    /// the change is still dispatched.
    pub fn select_publication_type(&mut self, label: &str) -> ServiceResult<Option<SearchRequest>> {
        let label = label.trim();
        let matched = self
            .dom
            .select_options(ids::PUBLICATION_TYPE)?
            .into_iter()
            .find(|option| option.text == label);
        match matched {
            Some(option) => self.dom.set_value(ids::PUBLICATION_TYPE, &option.value)?,
            None => debug!("No publication type option labelled {label:?}"),
        }
        self.dispatch(&UiEvent::change(ids::PUBLICATION_TYPE))
    }

    /// Resets every filter, then re-runs the search through `query`.
    pub fn clear_filters(&mut self) -> ServiceResult<Option<SearchRequest>> {
        for id in &self.elements.clearable {
            self.dom.set_value(id, "")?;
        }
        self.dom
            .set_value(ids::PUBLICATION_TYPE, DEFAULT_PUBLICATION_TYPE)?;
        self.dom.check_radio(ids::SORTING, DEFAULT_SORTING)?;
        self.dispatch(&UiEvent::input(ids::QUERY))
    }

    /// Sequence number of the most recently issued request.
    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Mutable page access for the host, e.g. to reflect typing before the
    /// matching event is dispatched.
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }
}
