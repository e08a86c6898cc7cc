//! DTOs that bridge the controllers with the transport and the templates.

pub mod explore;
