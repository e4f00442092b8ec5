//! Ordered filter schemas.
//!
//! A [`FilterMetas`] maps filter keys to their [`FilterMeta`]. Declaration order
//! is significant: it is the order in which chips and modal sections render, so
//! the collection is a list of entries rather than a hash map, and
//! deserialization keeps document order.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{validate_metas, FilterMeta};
use crate::error::Result;

/// Ordered mapping from filter key to filter definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterMetas {
    entries: Vec<(String, FilterMeta)>,
}

impl FilterMetas {
    /// Create an empty schema to be filled with [`FilterMetas::with`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter (builder pattern). Call [`FilterMetas::validated`] when done.
    pub fn with(mut self, key: impl Into<String>, meta: FilterMeta) -> Self {
        self.entries.push((key.into(), meta));
        self
    }

    /// Validate the schema, handing it back on success.
    pub fn validated(self) -> Result<Self> {
        validate_metas(&self)?;
        Ok(self)
    }

    /// Build a validated schema from `(key, meta)` pairs.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, FilterMeta)>,
        K: Into<String>,
    {
        let metas = Self {
            entries: entries
                .into_iter()
                .map(|(key, meta)| (key.into(), meta))
                .collect(),
        };
        metas.validated()
    }

    /// Parse and validate a JSON schema.
    pub fn from_json(text: &str) -> Result<Self> {
        let metas: FilterMetas = serde_json::from_str(text)?;
        metas.validated()
    }

    /// Parse and validate a TOML schema.
    pub fn from_toml(text: &str) -> Result<Self> {
        let metas: FilterMetas = toml::from_str(text)?;
        metas.validated()
    }

    /// Load a schema file, choosing the format by extension (`.toml`, else JSON).
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        tracing::debug!(path = %path.display(), toml = is_toml, "loading filter schema");
        if is_toml {
            Self::from_toml(&text)
        } else {
            Self::from_json(&text)
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterMeta> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, meta)| meta)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate `(key, meta)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterMeta)> {
        self.entries.iter().map(|(key, meta)| (key.as_str(), meta))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FilterMetas {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, meta) in &self.entries {
            map.serialize_entry(key, meta)?;
        }
        map.end()
    }
}

struct FilterMetasVisitor;

impl<'de> Visitor<'de> for FilterMetasVisitor {
    type Value = FilterMetas;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of filter keys to filter definitions")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<FilterMetas, A::Error> {
        let mut entries: Vec<(String, FilterMeta)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, meta)) = access.next_entry::<String, FilterMeta>()? {
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(serde::de::Error::custom(format!("duplicate filter key '{}'", key)));
            }
            entries.push((key, meta));
        }
        Ok(FilterMetas { entries })
    }
}

impl<'de> Deserialize<'de> for FilterMetas {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(FilterMetasVisitor)
    }
}
