//! Live preview of the community visual identity URL.

use crate::page::events::UiEvent;
use crate::page::{Display, DomReader, DomWriter, ids};
use crate::services::{ServiceResult, require_elements};

pub const REQUIRED_ELEMENTS: &[&str] = &[
    ids::VISUAL_IDENTITY_INPUT,
    ids::VISUAL_IDENTITY_PREVIEW_CONTAINER,
    ids::VISUAL_IDENTITY_PREVIEW,
];

pub struct ProfileImagePreview<D> {
    dom: D,
}

impl<D> ProfileImagePreview<D>
where
    D: DomReader + DomWriter,
{
    /// Binds to the community form and reflects any pre-filled value.
    pub fn init(dom: D) -> ServiceResult<Self> {
        require_elements(&dom, REQUIRED_ELEMENTS)?;
        let mut preview = Self { dom };
        preview.update()?;
        Ok(preview)
    }

    /// Shows the image for a non-blank URL, hides the container otherwise.
    /// The URL itself is used untrimmed and unvalidated.
    pub fn update(&mut self) -> ServiceResult<()> {
        let value = self
            .dom
            .value(ids::VISUAL_IDENTITY_INPUT)
            .unwrap_or_default();

        if value.trim().is_empty() {
            self.dom
                .set_display(ids::VISUAL_IDENTITY_PREVIEW_CONTAINER, Display::None)?;
            self.dom.set_attribute(ids::VISUAL_IDENTITY_PREVIEW, "src", "")?;
        } else {
            self.dom
                .set_attribute(ids::VISUAL_IDENTITY_PREVIEW, "src", &value)?;
            self.dom
                .set_display(ids::VISUAL_IDENTITY_PREVIEW_CONTAINER, Display::Block)?;
        }
        Ok(())
    }

    /// Returns `true` when the event refreshed the preview.
    pub fn dispatch(&mut self, event: &UiEvent) -> ServiceResult<bool> {
        match event {
            UiEvent::Input(target) if target == ids::VISUAL_IDENTITY_INPUT => {
                self.update()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }
}
