//! Domain values exchanged between the explore page and the search endpoint.

pub mod criteria;
pub mod dataset;
pub mod types;
