//! Built-in filter schemas for the dashboard pages.
//!
//! | Preset | Filters |
//! |--------|---------|
//! | `reports` | `years` (Single), `months` (Multi), `devices` (Multi) |
//! | `summaries` | `period` (Single), `devices` (Multi) |
//! | `device-table` | `status` (Single, with select-all), `types` (Multi) |
//!
//! Presets are built and validated on first use. A preset that fails
//! validation is a bug in this file, so that case panics.

use once_cell::sync::Lazy;

use crate::error::{FilterError, Result};
use crate::schema::{FilterMeta, FilterMetas};

pub const SENTINEL_ID: &str = "all";

const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

fn devices() -> FilterMeta {
    FilterMeta::multi("Devices", SENTINEL_ID, "All devices")
        .option("meter-01", "Main incomer")
        .option("meter-02", "Floor 1 sub-board")
        .option("meter-03", "Floor 2 sub-board")
        .option("meter-04", "HVAC plant")
}

static REPORTS: Lazy<FilterMetas> = Lazy::new(|| {
    let months = MONTHS.iter().fold(
        FilterMeta::multi("Months", SENTINEL_ID, "All months"),
        |meta, (id, label)| meta.option(*id, *label),
    );

    FilterMetas::new()
        .with(
            "years",
            FilterMeta::single("Year", "2025").plain_options(["2023", "2024", "2025"]),
        )
        .with("months", months)
        .with("devices", devices())
        .validated()
        .expect("built-in reports preset is valid")
});

static SUMMARIES: Lazy<FilterMetas> = Lazy::new(|| {
    FilterMetas::new()
        .with(
            "period",
            FilterMeta::single("Period", "monthly")
                .option("daily", "Daily")
                .option("weekly", "Weekly")
                .option("monthly", "Monthly"),
        )
        .with("devices", devices())
        .validated()
        .expect("built-in summaries preset is valid")
});

static DEVICE_TABLE: Lazy<FilterMetas> = Lazy::new(|| {
    FilterMetas::new()
        .with(
            "status",
            FilterMeta::single("Status", SENTINEL_ID)
                .option("online", "Online")
                .option("offline", "Offline")
                .select_all(SENTINEL_ID, "Any status"),
        )
        .with(
            "types",
            FilterMeta::multi("Meter type", SENTINEL_ID, "All types")
                .option("single-phase", "Single-phase")
                .option("three-phase", "Three-phase"),
        )
        .validated()
        .expect("built-in device-table preset is valid")
});

/// Names of all presets, in display order.
pub fn names() -> &'static [&'static str] {
    &["reports", "summaries", "device-table"]
}

/// Look up a preset by name.
pub fn get(name: &str) -> Result<&'static FilterMetas> {
    match name {
        "reports" => Ok(&*REPORTS),
        "summaries" => Ok(&*SUMMARIES),
        "device-table" => Ok(&*DEVICE_TABLE),
        _ => Err(FilterError::UnknownPreset(name.to_string())),
    }
}
