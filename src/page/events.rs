//! UI events forwarded by the host document.

/// What was clicked. Badges inside rendered cards carry `data-action` and the
/// payload attribute instead of inline handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// A plain element, addressed by id.
    Element(String),
    /// `data-action="set-tag"` badge with its `data-tag` value.
    TagBadge(String),
    /// `data-action="set-publication-type"` badge with its label.
    PublicationTypeBadge(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// `input` on an element id.
    Input(String),
    /// `change` on an element id or radio group name.
    Change(String),
    Click(ClickTarget),
}

pub const ACTION_SET_TAG: &str = "set-tag";
pub const ACTION_SET_PUBLICATION_TYPE: &str = "set-publication-type";

impl UiEvent {
    pub fn input(target: impl Into<String>) -> Self {
        UiEvent::Input(target.into())
    }

    pub fn change(target: impl Into<String>) -> Self {
        UiEvent::Change(target.into())
    }

    pub fn click(id: impl Into<String>) -> Self {
        UiEvent::Click(ClickTarget::Element(id.into()))
    }

    /// Maps a delegated click on a card badge to an event. Unknown actions
    /// yield `None`.
    pub fn badge_click(action: &str, payload: &str) -> Option<Self> {
        match action {
            ACTION_SET_TAG => Some(UiEvent::Click(ClickTarget::TagBadge(payload.to_string()))),
            ACTION_SET_PUBLICATION_TYPE => Some(UiEvent::Click(
                ClickTarget::PublicationTypeBadge(payload.to_string()),
            )),
            _ => None,
        }
    }
}
