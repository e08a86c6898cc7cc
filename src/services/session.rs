//! Pairs a filter controller with a transport.

use crate::dto::explore::{SearchOutcome, SearchRequest};
use crate::page::events::UiEvent;
use crate::page::{DomReader, DomWriter};
use crate::render::CardRenderer;
use crate::services::ServiceResult;
use crate::services::filters::FilterController;
use crate::transport::SearchTransport;

/// Sends every request the controller issues and feeds the response back.
/// Requests complete one at a time, so nothing here is ever stale.
pub struct ExploreSession<D, T> {
    controller: FilterController<D>,
    transport: T,
}

impl<D, T> ExploreSession<D, T>
where
    D: DomReader + DomWriter,
    T: SearchTransport,
{
    /// Initializes the controller and completes the initial search.
    pub fn start(
        dom: D,
        renderer: CardRenderer,
        transport: T,
        location_search: &str,
    ) -> ServiceResult<(Self, SearchOutcome)> {
        let (controller, request) = FilterController::init(dom, renderer, location_search)?;
        let mut session = Self {
            controller,
            transport,
        };
        let outcome = session.send(request)?;
        Ok((session, outcome))
    }

    /// Forwards a UI event; returns the outcome if it triggered a search.
    pub fn dispatch(&mut self, event: &UiEvent) -> ServiceResult<Option<SearchOutcome>> {
        match self.controller.dispatch(event)? {
            Some(request) => self.send(request).map(Some),
            None => Ok(None),
        }
    }

    fn send(&mut self, request: SearchRequest) -> ServiceResult<SearchOutcome> {
        let result = self.transport.search(&request);
        self.controller.complete(request.seq, result)
    }

    pub fn controller(&self) -> &FilterController<D> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FilterController<D> {
        &mut self.controller
    }

    pub fn dom(&self) -> &D {
        self.controller.dom()
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use mockall::Sequence;

    use super::*;
    use crate::domain::dataset::DatasetSummary;
    use crate::domain::types::DatasetId;
    use crate::page::memory::MemoryDom;
    use crate::page::{Display, ids};
    use crate::transport::TransportError;
    use crate::transport::mock::MockTransport;

    fn renderer() -> CardRenderer {
        CardRenderer::with_offset(FixedOffset::east_opt(0).unwrap()).unwrap()
    }

    fn dataset(id: i64) -> DatasetSummary {
        DatasetSummary {
            id: DatasetId::new(id),
            url: format!("/doi/{id}"),
            title: format!("Dataset {id}"),
            description: "d".to_string(),
            created_at: "2024-04-03T17:30:00Z".to_string(),
            publication_type: "Other".to_string(),
            total_size_in_human_format: "1 KB".to_string(),
            authors: Vec::new(),
            tags: vec!["dna".to_string()],
        }
    }

    #[test]
    fn start_sends_prefilled_query() {
        let mut transport = MockTransport::new();
        transport
            .expect_search()
            .withf(|request| request.seq == 1 && request.criteria.query == "genomics")
            .times(1)
            .returning(|_| Ok(vec![dataset(1), dataset(2)]));

        let (session, outcome) =
            ExploreSession::start(MemoryDom::explore_page(), renderer(), transport, "?query=genomics")
                .unwrap();

        assert_eq!(outcome, SearchOutcome::Rendered(2));
        assert_eq!(session.dom().children(ids::RESULTS).len(), 2);
        assert_eq!(
            session.dom().text(ids::RESULTS_NUMBER).as_deref(),
            Some("2 datasets found")
        );
        assert_eq!(session.dom().display(ids::RESULTS_NOT_FOUND), Some(Display::None));
    }

    #[test]
    fn tag_click_sends_exactly_one_request() {
        let mut seq = Sequence::new();
        let mut transport = MockTransport::new();
        transport
            .expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![dataset(1)]));
        transport
            .expect_search()
            .withf(|request| request.criteria.query == "dna")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Vec::new()));

        let (mut session, _) =
            ExploreSession::start(MemoryDom::explore_page(), renderer(), transport, "").unwrap();
        let outcome = session
            .dispatch(&UiEvent::badge_click("set-tag", "dna").unwrap())
            .unwrap();

        assert_eq!(outcome, Some(SearchOutcome::Empty));
        assert_eq!(session.dom().display(ids::RESULTS_NOT_FOUND), Some(Display::Block));
    }

    #[test]
    fn unbound_events_send_nothing() {
        let mut transport = MockTransport::new();
        transport
            .expect_search()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let (mut session, _) =
            ExploreSession::start(MemoryDom::explore_page(), renderer(), transport, "").unwrap();

        assert_eq!(session.dispatch(&UiEvent::input(ids::SORTING)).unwrap(), None);
        assert_eq!(session.dispatch(&UiEvent::click(ids::RESULTS)).unwrap(), None);
    }

    #[test]
    fn transport_failure_is_reported() {
        let mut transport = MockTransport::new();
        transport
            .expect_search()
            .returning(|_| Err(TransportError::Decode("expected array".to_string())));

        let (session, outcome) =
            ExploreSession::start(MemoryDom::explore_page(), renderer(), transport, "").unwrap();

        assert_eq!(outcome, SearchOutcome::Failed);
        assert_eq!(session.dom().display(ids::RESULTS_ERROR), Some(Display::Block));
        assert_eq!(session.dom().display(ids::RESULTS_NOT_FOUND), Some(Display::None));
    }
}
