//! # Filter Derivation
//!
//! Pure functions over a schema and a state. Each function borrows its inputs
//! and returns a fresh value; nothing here mutates a state in place, performs
//! I/O, or keeps anything between calls.
//!
//! ## Operations
//!
//! - [`default_state`]: the initial state of a page
//! - [`is_active`], [`is_default_filters`], [`active_keys`], [`active_count`]:
//!   deviation from defaults
//! - [`chips`], [`chip_for`]: one removable chip per active filter
//! - [`reset_filter`], [`reset_all`]: back to defaults
//! - [`toggle`], [`select`], [`select_all`]: selection changes
//!
//! ## Testing Strategy
//!
//! This is where most of the crate's tests live. Each module tests its own
//! operation against small hand-built schemas; cross-operation properties
//! (reset never leaves a filter active, toggle pairs restore state) sit next
//! to the operation that establishes them.

mod active;
mod chips;
mod defaults;
mod reset;
mod toggle;

pub use active::{active_count, active_keys, is_active, is_default_filters};
pub use chips::{chip_for, chips, Chip, ChipValue};
pub use defaults::default_state;
pub use reset::{reset_all, reset_filter};
pub use toggle::{select, select_all, toggle};
