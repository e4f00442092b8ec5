//! Filter specifications.
//!
//! This module defines the schema for a single filter dimension: what kind of
//! selection it holds, which options it offers, what its default is, and which
//! option id means "no filtering".

use serde::{Deserialize, Serialize};

use super::FilterValue;

/// The kind of selection a filter holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Exactly one option id (e.g., `years`)
    Single,

    /// A list of option ids (e.g., `devices`)
    Multi,
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterKind::Single => write!(f, "Single"),
            FilterKind::Multi => write!(f, "Multi"),
        }
    }
}

/// One selectable entry of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Stable id, unique within its filter. This is what gets stored in state.
    pub id: String,
    /// Display text.
    pub label: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Names the select-all option of a filter.
///
/// The `selected_all_id` must also appear among the filter's options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfig {
    pub selected_all_label: String,
    pub selected_all_id: String,
}

impl SelectionConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            selected_all_id: id.into(),
            selected_all_label: label.into(),
        }
    }
}

/// A single-select filter: holds one option id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleFilter {
    pub label: String,
    pub default_value: String,
    pub options: Vec<FilterOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_selection_config: Option<SelectionConfig>,
}

/// A multi-select filter: holds a list of option ids.
///
/// Multi filters always carry a select-all option; toggling falls back to it
/// whenever a selection would otherwise become empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiFilter {
    pub label: String,
    pub default_value: Vec<String>,
    pub options: Vec<FilterOption>,
    pub multiple_selection_config: SelectionConfig,
}

/// Static definition of one filter dimension.
///
/// The variant ties the type of the default to the kind of filter, so a
/// single-select filter cannot carry a list default and vice versa. In the
/// serialized form the variant is the `"type"` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilterMeta {
    Single(SingleFilter),
    Multi(MultiFilter),
}

impl FilterMeta {
    /// Start a single-select filter with the given label and default id.
    pub fn single(label: impl Into<String>, default_value: impl Into<String>) -> Self {
        FilterMeta::Single(SingleFilter {
            label: label.into(),
            default_value: default_value.into(),
            options: Vec::new(),
            single_selection_config: None,
        })
    }

    /// Start a multi-select filter with the given label and select-all option.
    ///
    /// The select-all option is added to the option list and becomes the
    /// default selection. Use [`FilterMeta::default_ids`] to override it.
    pub fn multi(
        label: impl Into<String>,
        all_id: impl Into<String>,
        all_label: impl Into<String>,
    ) -> Self {
        let config = SelectionConfig::new(all_id, all_label);
        FilterMeta::Multi(MultiFilter {
            label: label.into(),
            default_value: vec![config.selected_all_id.clone()],
            options: vec![FilterOption::new(
                config.selected_all_id.clone(),
                config.selected_all_label.clone(),
            )],
            multiple_selection_config: config,
        })
    }

    /// Add an option.
    pub fn option(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.options_mut().push(FilterOption::new(id, label));
        self
    }

    /// Add several options whose label equals their id (years, months...).
    pub fn plain_options<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = self.options_mut();
        for id in ids {
            let id = id.into();
            options.push(FilterOption::new(id.clone(), id));
        }
        self
    }

    /// Give a single-select filter a select-all option.
    ///
    /// The option is inserted first in the option list. No effect on Multi
    /// filters, which always have one.
    pub fn select_all(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        if let FilterMeta::Single(single) = &mut self {
            let config = SelectionConfig::new(id, label);
            single.options.insert(
                0,
                FilterOption::new(
                    config.selected_all_id.clone(),
                    config.selected_all_label.clone(),
                ),
            );
            single.single_selection_config = Some(config);
        }
        self
    }

    /// Override the default selection of a multi-select filter.
    pub fn default_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let FilterMeta::Multi(multi) = &mut self {
            multi.default_value = ids.into_iter().map(Into::into).collect();
        }
        self
    }

    fn options_mut(&mut self) -> &mut Vec<FilterOption> {
        match self {
            FilterMeta::Single(single) => &mut single.options,
            FilterMeta::Multi(multi) => &mut multi.options,
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterMeta::Single(_) => FilterKind::Single,
            FilterMeta::Multi(_) => FilterKind::Multi,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterMeta::Single(single) => &single.label,
            FilterMeta::Multi(multi) => &multi.label,
        }
    }

    pub fn options(&self) -> &[FilterOption] {
        match self {
            FilterMeta::Single(single) => &single.options,
            FilterMeta::Multi(multi) => &multi.options,
        }
    }

    pub fn selection_config(&self) -> Option<&SelectionConfig> {
        match self {
            FilterMeta::Single(single) => single.single_selection_config.as_ref(),
            FilterMeta::Multi(multi) => Some(&multi.multiple_selection_config),
        }
    }

    /// The select-all option id, if the filter has one.
    pub fn sentinel(&self) -> Option<&str> {
        self.selection_config()
            .map(|config| config.selected_all_id.as_str())
    }

    /// The default value as a fresh, independently owned [`FilterValue`].
    pub fn default_value(&self) -> FilterValue {
        match self {
            FilterMeta::Single(single) => FilterValue::Single(single.default_value.clone()),
            FilterMeta::Multi(multi) => FilterValue::Multi(multi.default_value.clone()),
        }
    }

    pub fn has_option(&self, id: &str) -> bool {
        self.options().iter().any(|option| option.id == id)
    }

    /// Look up the display label of an option id.
    pub fn option_label(&self, id: &str) -> Option<&str> {
        self.options()
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.label.as_str())
    }
}
