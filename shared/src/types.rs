//! Common types used across the platform

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an apiary, supplied by the caller on registration
/// (e.g. `API-001`). Uniqueness is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiaryId(String);

impl ApiaryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ApiaryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ApiaryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a store-owned ledger entry (urgent hive, material).
/// Assigned from a monotonic per-store counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One slice of the hive-status distribution, in chart order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}
