//! URL-encoded inputs: the page location and the driver's filter arguments.

use thiserror::Error;

use crate::page::errors::PageError;

pub mod filters;

#[derive(Debug, Error)]
/// Errors that can occur when decoding form-encoded input.
pub enum FormError {
    #[error("malformed query string: {0}")]
    Malformed(#[from] serde::de::value::Error),

    #[error("unknown publication type: {0}")]
    UnknownPublicationType(String),

    #[error("unknown sorting: {0}")]
    UnknownSorting(String),

    #[error(transparent)]
    Page(#[from] PageError),
}
