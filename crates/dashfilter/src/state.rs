//! Filter state.
//!
//! A [`FilterState`] holds the current selection of every filter on a page,
//! keyed by the same keys as its [`crate::schema::FilterMetas`]. States are
//! values: every transition in this crate borrows a state and returns a new
//! one, leaving the input untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::FilterValue;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    /// Parse a state from JSON, e.g. `{"years": "2024", "devices": ["device-a"]}`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    /// A copy of this state with `key` set to `value`.
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let mut next = self.clone();
        next.values.insert(key.into(), value.into());
        next
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: FilterValue) {
        self.values.insert(key.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
