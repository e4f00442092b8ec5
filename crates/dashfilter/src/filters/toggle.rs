//! Selection transitions.
//!
//! Multi-select toggling keeps two rules:
//! - the select-all id never shares the list with concrete ids it produced
//! - a selection never becomes empty; it falls back to `[select-all id]`
//!
//! Ids that are not among the filter's options are ignored and the state is
//! returned unchanged.

use crate::schema::{FilterMeta, FilterValue, MultiFilter};
use crate::state::FilterState;

/// Toggle option `id` of the filter at `key`.
///
/// On a multi-select filter:
/// - toggling the select-all id selects "all" (`[sentinel]`)
/// - toggling a selected id removes it, falling back to `[sentinel]` when
///   nothing is left
/// - toggling an unselected id appends it and drops the sentinel
///
/// On a single-select filter this is [`select`].
pub fn toggle(state: &FilterState, key: &str, meta: &FilterMeta, id: &str) -> FilterState {
    let FilterMeta::Multi(multi) = meta else {
        return select(state, key, meta, id);
    };

    if !meta.has_option(id) {
        tracing::debug!(key, id, "ignoring toggle of unknown option");
        return state.clone();
    }

    let current = current_ids(state, key, multi);
    let next = toggle_ids(&current, id, sentinel_of(multi));
    tracing::debug!(key, id, ?current, ?next, "toggled filter option");

    let mut next_state = state.clone();
    next_state.insert(key, FilterValue::Multi(next));
    next_state
}

/// Select option `id` of the filter at `key`, replacing the current value.
///
/// Multi-select filters end up with only `id` selected.
pub fn select(state: &FilterState, key: &str, meta: &FilterMeta, id: &str) -> FilterState {
    if !meta.has_option(id) {
        tracing::debug!(key, id, "ignoring selection of unknown option");
        return state.clone();
    }

    let value = match meta {
        FilterMeta::Single(_) => FilterValue::Single(id.to_string()),
        FilterMeta::Multi(_) => FilterValue::Multi(vec![id.to_string()]),
    };
    let mut next = state.clone();
    next.insert(key, value);
    next
}

/// Put the filter at `key` into its select-all state.
///
/// Single-select filters without a select-all option are left unchanged.
pub fn select_all(state: &FilterState, key: &str, meta: &FilterMeta) -> FilterState {
    let Some(sentinel) = meta.sentinel() else {
        return state.clone();
    };

    let value = match meta {
        FilterMeta::Single(_) => FilterValue::Single(sentinel.to_string()),
        FilterMeta::Multi(_) => FilterValue::Multi(vec![sentinel.to_string()]),
    };
    let mut next = state.clone();
    next.insert(key, value);
    next
}

fn sentinel_of(multi: &MultiFilter) -> &str {
    &multi.multiple_selection_config.selected_all_id
}

/// The stored ids, or the default when the key is missing or holds a
/// single id. An empty list reads as "all".
fn current_ids(state: &FilterState, key: &str, multi: &MultiFilter) -> Vec<String> {
    let ids = match state.get(key) {
        Some(FilterValue::Multi(ids)) => ids.clone(),
        _ => multi.default_value.clone(),
    };
    if ids.is_empty() {
        vec![sentinel_of(multi).to_string()]
    } else {
        ids
    }
}

fn toggle_ids(current: &[String], id: &str, sentinel: &str) -> Vec<String> {
    if id == sentinel {
        return vec![sentinel.to_string()];
    }

    if current.iter().any(|selected| selected == id) {
        let remaining: Vec<String> = current
            .iter()
            .filter(|selected| selected.as_str() != id)
            .cloned()
            .collect();
        if remaining.is_empty() {
            return vec![sentinel.to_string()];
        }
        return remaining;
    }

    let mut next: Vec<String> = current
        .iter()
        .filter(|selected| selected.as_str() != sentinel)
        .cloned()
        .collect();
    next.push(id.to_string());
    next
}
