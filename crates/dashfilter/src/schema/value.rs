//! Filter value types.
//!
//! This module defines the runtime representation of a filter's current
//! selection, as stored in a [`crate::state::FilterState`].

use serde::{Deserialize, Serialize};

use super::FilterKind;

/// The current selection of one filter.
///
/// Serialized untagged, so a state file reads `"2024"` for single-select
/// filters and `["device-a"]` for multi-select ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// One option id.
    Single(String),

    /// Option ids in selection order.
    Multi(Vec<String>),
}

impl FilterValue {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterValue::Single(_) => FilterKind::Single,
            FilterValue::Multi(_) => FilterKind::Multi,
        }
    }

    /// Get the id if this is a Single value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            FilterValue::Single(id) => Some(id),
            _ => None,
        }
    }

    /// Get the ids if this is a Multi value.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            FilterValue::Multi(ids) => Some(ids),
            _ => None,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(id: &str) -> Self {
        FilterValue::Single(id.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(id: String) -> Self {
        FilterValue::Single(id)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(ids: Vec<String>) -> Self {
        FilterValue::Multi(ids)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(ids: Vec<&str>) -> Self {
        FilterValue::Multi(ids.into_iter().map(str::to_string).collect())
    }
}

/// Order-independent equality of two id lists (same multiset of ids).
pub fn same_selection(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left: Vec<&str> = a.iter().map(String::as_str).collect();
    let mut right: Vec<&str> = b.iter().map(String::as_str).collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
