//! # Filter Schema
//!
//! A page describes its filters declaratively: a [`FilterMetas`] lists every
//! filter dimension in render order, and each [`FilterMeta`] says what kind of
//! selection it holds, which options exist, what the default is and which option
//! id stands for "no restriction".
//!
//! ## Filter Kinds
//!
//! | Kind | Default | Stored value | Example |
//! |------|---------|--------------|---------|
//! | `Single` | one id | `FilterValue::Single` | `years` |
//! | `Multi` | list of ids | `FilterValue::Multi` | `devices` |
//!
//! The kind is the enum variant of [`FilterMeta`], so a default of the wrong
//! shape cannot be built in code and is rejected when a schema file is parsed.
//! Everything else (unique ids, sentinel present, defaults among the options)
//! is checked by [`validate_metas`].
//!
//! ## Usage
//!
//! ```
//! use dashfilter::schema::{FilterMeta, FilterMetas};
//!
//! let metas = FilterMetas::new()
//!     .with("years", FilterMeta::single("Year", "2025").plain_options(["2024", "2025"]))
//!     .with(
//!         "devices",
//!         FilterMeta::multi("Devices", "all", "All devices").option("device-a", "Meter A"),
//!     )
//!     .validated()
//!     .unwrap();
//!
//! assert_eq!(metas.keys().collect::<Vec<_>>(), vec!["years", "devices"]);
//! ```

mod metas;
mod spec;
mod validation;
mod value;

pub use metas::FilterMetas;
pub use spec::{FilterKind, FilterMeta, FilterOption, MultiFilter, SelectionConfig, SingleFilter};
pub use validation::{validate_meta, validate_metas};
pub use value::{same_selection, FilterValue};
