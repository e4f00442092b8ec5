//! # Dashfilter Architecture
//!
//! Dashfilter is the **filter engine** behind the metering dashboard's report,
//! summary and device-table pages. Pages describe their filters declaratively;
//! this crate derives everything the filter UI needs from that description.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (dashfilter-cli, page code)                        │
//! │  - Own a schema and a state, render chips and modals        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Thin facade: applied state + modal draft                 │
//! │  - Resolves filter keys, dispatches to filters/             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Derivation (filters/*.rs)                                  │
//! │  - Pure functions: (state, schema) -> new state / views     │
//! │  - No I/O, no mutation of inputs                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Schema and State (schema/, state.rs)                       │
//! │  - FilterMetas / FilterMeta: static, validated definitions  │
//! │  - FilterState / FilterValue: current selections            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: States Are Values
//!
//! A schema is built once and only ever borrowed. A state is owned by exactly
//! one page; every transition (`toggle`, `select`, `reset_filter`, ...) takes
//! `&FilterState` and returns a new `FilterState`. Nothing here writes to
//! stdout/stderr or touches the network; translating a state into request
//! parameters is the page's business.
//!
//! ## Module Overview
//!
//! - [`schema`]: Filter kinds, options, definitions, validation
//! - [`state`]: Current selections
//! - [`filters`]: Defaults, activeness, chips, reset, toggle
//! - [`session`]: Applied/draft facade for filter modals
//! - [`presets`]: Built-in schemas for the dashboard pages
//! - [`config`]: Chip formatting configuration
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod filters;
pub mod presets;
pub mod schema;
pub mod session;
pub mod state;

pub use error::{FilterError, Result};
pub use schema::{FilterKind, FilterMeta, FilterMetas, FilterOption, FilterValue};
pub use session::FilterSession;
pub use state::FilterState;
