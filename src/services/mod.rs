//! Controllers driving the explore page and the community form.

use thiserror::Error;

use crate::page::errors::PageError;
use crate::render::RenderError;

pub mod filters;
pub mod preview;
pub mod session;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Required element missing: {0}")]
    MissingElement(String),

    #[error("Page error: {0}")]
    Page(#[from] PageError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Fails with [`ServiceError::MissingElement`] on the first id the page lacks.
pub(crate) fn require_elements<D>(dom: &D, required: &[&str]) -> ServiceResult<()>
where
    D: crate::page::DomReader + ?Sized,
{
    match required.iter().find(|id| !dom.has_element(id)) {
        Some(id) => Err(ServiceError::MissingElement((*id).to_string())),
        None => Ok(()),
    }
}
