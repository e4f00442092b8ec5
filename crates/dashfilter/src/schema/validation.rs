//! Schema validation.
//!
//! A filter schema is valid when:
//! - it declares at least one filter
//! - filter keys are non-empty and unique
//! - option ids are unique within each filter
//! - the select-all id, when configured, is one of the filter's options
//! - every default id names a declared option
//! - multi-select defaults are non-empty and free of repeats

use std::collections::HashSet;

use super::{FilterMeta, FilterMetas};
use crate::error::{FilterError, Result};

/// Validates a whole schema, stopping at the first problem.
pub fn validate_metas(metas: &FilterMetas) -> Result<()> {
    if metas.is_empty() {
        return Err(FilterError::EmptySchema);
    }

    let mut seen = HashSet::new();
    for (key, meta) in metas.iter() {
        if !seen.insert(key) {
            return Err(FilterError::DuplicateKey(key.to_string()));
        }
        validate_meta(key, meta)?;
    }

    Ok(())
}

/// Validates one filter definition.
///
/// # Examples
/// ```
/// use dashfilter::schema::{validate_meta, FilterMeta};
///
/// let years = FilterMeta::single("Year", "2025").plain_options(["2024", "2025"]);
/// assert!(validate_meta("years", &years).is_ok());
///
/// let broken = FilterMeta::single("Year", "1999").plain_options(["2024", "2025"]);
/// assert!(validate_meta("years", &broken).is_err());
/// ```
pub fn validate_meta(key: &str, meta: &FilterMeta) -> Result<()> {
    if key.is_empty() {
        return Err(FilterError::EmptyKey);
    }

    let mut ids = HashSet::new();
    for option in meta.options() {
        if !ids.insert(option.id.as_str()) {
            return Err(FilterError::DuplicateOption {
                key: key.to_string(),
                option: option.id.clone(),
            });
        }
    }

    if let Some(sentinel) = meta.sentinel() {
        if !ids.contains(sentinel) {
            return Err(FilterError::MissingSentinel {
                key: key.to_string(),
                sentinel: sentinel.to_string(),
            });
        }
    }

    match meta {
        FilterMeta::Single(single) => {
            if !ids.contains(single.default_value.as_str()) {
                return Err(FilterError::UnknownDefault {
                    key: key.to_string(),
                    value: single.default_value.clone(),
                });
            }
        }
        FilterMeta::Multi(multi) => {
            if multi.default_value.is_empty() {
                return Err(FilterError::EmptyDefault(key.to_string()));
            }
            let mut defaults = HashSet::new();
            for id in &multi.default_value {
                if !ids.contains(id.as_str()) {
                    return Err(FilterError::UnknownDefault {
                        key: key.to_string(),
                        value: id.clone(),
                    });
                }
                if !defaults.insert(id.as_str()) {
                    return Err(FilterError::DuplicateDefault {
                        key: key.to_string(),
                        value: id.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}
