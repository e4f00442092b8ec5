use super::default_state;
use crate::schema::{FilterMeta, FilterMetas};
use crate::state::FilterState;

/// Reset one filter to its default. This is what removing a chip does.
///
/// The result differs from `state` at most at `key`.
pub fn reset_filter(state: &FilterState, key: &str, meta: &FilterMeta) -> FilterState {
    tracing::debug!(key, "resetting filter to default");
    let mut next = state.clone();
    next.insert(key, meta.default_value());
    next
}

/// Reset every filter (the "clear filters" action).
pub fn reset_all(metas: &FilterMetas) -> FilterState {
    default_state(metas)
}
