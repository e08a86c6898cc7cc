//! Small value objects shared by the domain types.

use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// Identifier of a dataset as assigned by the search endpoint.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DatasetId(i64);

impl DatasetId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw `i64` backing this identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for DatasetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DatasetId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<DatasetId> for i64 {
    fn from(value: DatasetId) -> Self {
        value.0
    }
}
