use crate::schema::{same_selection, FilterMeta, FilterMetas, FilterValue};
use crate::state::FilterState;

/// Whether the filter at `key` deviates from its default.
///
/// - Single: the stored id differs from the default id.
/// - Multi: the stored list is non-empty and is not the same set of ids as
///   the default (order does not matter). An empty list means "all".
///
/// A missing key is treated as the default. So is a stored value whose shape
/// does not match the filter kind, which is logged.
pub fn is_active(state: &FilterState, key: &str, meta: &FilterMeta) -> bool {
    let Some(value) = state.get(key) else {
        return false;
    };

    match (meta, value) {
        (FilterMeta::Single(single), FilterValue::Single(id)) => *id != single.default_value,
        (FilterMeta::Multi(multi), FilterValue::Multi(ids)) => {
            !ids.is_empty() && !same_selection(ids, &multi.default_value)
        }
        _ => {
            tracing::warn!(
                key,
                expected = %meta.kind(),
                found = %value.kind(),
                "filter value does not match its schema kind; treating as default"
            );
            false
        }
    }
}

/// True when no filter in `metas` is active.
pub fn is_default_filters(state: &FilterState, metas: &FilterMetas) -> bool {
    metas.iter().all(|(key, meta)| !is_active(state, key, meta))
}

/// Keys of the active filters, in schema order.
pub fn active_keys<'m>(state: &FilterState, metas: &'m FilterMetas) -> Vec<&'m str> {
    metas
        .iter()
        .filter(|(key, meta)| is_active(state, key, meta))
        .map(|(key, _)| key)
        .collect()
}

/// Number of active filters (the badge on the filter button).
pub fn active_count(state: &FilterState, metas: &FilterMetas) -> usize {
    metas
        .iter()
        .filter(|(key, meta)| is_active(state, key, meta))
        .count()
}
