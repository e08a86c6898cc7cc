//! Headless UI controllers for the dataset exploration page and the community
//! profile image preview.
//!
//! The host (a browser binding or the bundled command-line driver) owns the
//! actual document and forwards UI events; the controllers read and write it
//! through the [`page::DomReader`] / [`page::DomWriter`] traits and hand search
//! requests to a [`transport::SearchTransport`].

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod page;
pub mod render;
pub mod services;
pub mod transport;

/// Endpoint receiving the serialized search criteria.
pub const EXPLORE_ENDPOINT: &str = "/explore";

/// Header carrying the CSRF token alongside the JSON payload.
pub const CSRF_HEADER: &str = "X-CSRFToken";
