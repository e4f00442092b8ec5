use crate::schema::FilterMetas;
use crate::state::FilterState;

/// Builds the initial state of a page: every filter at its declared default.
///
/// Values are cloned out of the schema, so the returned state shares nothing
/// with `metas` and two calls give equal but independent states.
pub fn default_state(metas: &FilterMetas) -> FilterState {
    let mut state = FilterState::default();
    for (key, meta) in metas.iter() {
        state.insert(key, meta.default_value());
    }
    state
}
