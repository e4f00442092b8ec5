//! # Filter Session
//!
//! A page with a filter modal keeps two states: the **applied** state that drives
//! its data and chips, and a **draft** the modal edits until the user hits
//! Apply. [`FilterSession`] is a thin facade that holds both next to the page's
//! schema and dispatches to [`crate::filters`].
//!
//! ## What the Session Does NOT Do
//!
//! - **Derivation logic**: That belongs in `filters/*.rs`
//! - **Query building**: Turning a state into request parameters is page code
//! - **Persistence**: A session lives as long as the page that owns it
//!
//! Every transition replaces the draft (or applied) state with a new value
//! computed from the old one.

use crate::error::{FilterError, Result};
use crate::filters::{self, Chip};
use crate::schema::{FilterMeta, FilterMetas};
use crate::state::FilterState;

#[derive(Debug, Clone)]
pub struct FilterSession<'a> {
    metas: &'a FilterMetas,
    applied: FilterState,
    draft: FilterState,
}

impl<'a> FilterSession<'a> {
    /// Start a session with both states at their defaults.
    pub fn new(metas: &'a FilterMetas) -> Self {
        let applied = filters::default_state(metas);
        Self {
            metas,
            draft: applied.clone(),
            applied,
        }
    }

    /// Resume a session from a previously applied state.
    pub fn with_applied(metas: &'a FilterMetas, applied: FilterState) -> Self {
        Self {
            metas,
            draft: applied.clone(),
            applied,
        }
    }

    pub fn metas(&self) -> &'a FilterMetas {
        self.metas
    }

    pub fn applied(&self) -> &FilterState {
        &self.applied
    }

    pub fn draft(&self) -> &FilterState {
        &self.draft
    }

    fn meta(&self, key: &str) -> Result<&'a FilterMeta> {
        self.metas
            .get(key)
            .ok_or_else(|| FilterError::UnknownFilter(key.to_string()))
    }

    /// Toggle an option in the draft.
    pub fn toggle(&mut self, key: &str, id: &str) -> Result<()> {
        let meta = self.meta(key)?;
        self.draft = filters::toggle(&self.draft, key, meta, id);
        Ok(())
    }

    /// Select an option in the draft, replacing the filter's value.
    pub fn select(&mut self, key: &str, id: &str) -> Result<()> {
        let meta = self.meta(key)?;
        self.draft = filters::select(&self.draft, key, meta, id);
        Ok(())
    }

    /// Put one draft filter into its select-all state.
    pub fn select_all(&mut self, key: &str) -> Result<()> {
        let meta = self.meta(key)?;
        self.draft = filters::select_all(&self.draft, key, meta);
        Ok(())
    }

    /// Reset one draft filter to its default.
    pub fn reset_draft_filter(&mut self, key: &str) -> Result<()> {
        let meta = self.meta(key)?;
        self.draft = filters::reset_filter(&self.draft, key, meta);
        Ok(())
    }

    /// Whether the draft differs from what is applied (enables Apply).
    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.applied
    }

    /// Commit the draft. Returns the newly applied state.
    pub fn apply(&mut self) -> &FilterState {
        tracing::debug!(
            active = filters::active_count(&self.draft, self.metas),
            "applying filter draft"
        );
        self.applied = self.draft.clone();
        &self.applied
    }

    /// Throw the draft away, back to the applied state.
    pub fn discard(&mut self) {
        self.draft = self.applied.clone();
    }

    /// Remove a chip: the filter is reset in the applied state and the draft.
    pub fn remove_chip(&mut self, key: &str) -> Result<()> {
        let meta = self.meta(key)?;
        self.applied = filters::reset_filter(&self.applied, key, meta);
        self.draft = filters::reset_filter(&self.draft, key, meta);
        Ok(())
    }

    /// Clear every filter, applied and draft.
    pub fn reset_all(&mut self) {
        self.applied = filters::reset_all(self.metas);
        self.draft = self.applied.clone();
    }

    /// Chips for the applied state.
    pub fn chips(&self) -> Vec<Chip> {
        filters::chips(&self.applied, self.metas)
    }

    /// Whether the applied state has no active filter.
    pub fn is_default(&self) -> bool {
        filters::is_default_filters(&self.applied, self.metas)
    }

    /// Number of active filters in the draft (the modal's counter).
    pub fn draft_active_count(&self) -> usize {
        filters::active_count(&self.draft, self.metas)
    }
}
