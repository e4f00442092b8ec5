use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::is_active;
use crate::config::DashfilterConfig;
use crate::schema::{FilterMeta, FilterMetas, FilterValue};
use crate::state::FilterState;

const ELLIPSIS: char = '…';

/// What a chip shows after the filter label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChipValue {
    /// Label of the selected option (or the raw id when no option matches).
    Text(String),
    /// Number of selected concrete ids of a multi-select filter.
    Count(usize),
}

/// A removable summary of one active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub key: String,
    pub label: String,
    pub value: ChipValue,
}

impl Chip {
    /// The value text, with counts run through the configured template and
    /// long text cut to the configured width.
    pub fn value_text(&self, config: &DashfilterConfig) -> String {
        let text = match &self.value {
            ChipValue::Text(text) => text.clone(),
            ChipValue::Count(count) => config.format_count(*count),
        };
        truncate_to_width(&text, config.chip_max_width)
    }

    /// `"<label>: <value>"`.
    pub fn display(&self, config: &DashfilterConfig) -> String {
        format!("{}: {}", self.label, self.value_text(config))
    }
}

/// Chip for the filter at `key`, or `None` when it is not active.
pub fn chip_for(state: &FilterState, key: &str, meta: &FilterMeta) -> Option<Chip> {
    if !is_active(state, key, meta) {
        return None;
    }

    let value = match state.get(key)? {
        FilterValue::Single(id) => {
            ChipValue::Text(meta.option_label(id).unwrap_or(id).to_string())
        }
        FilterValue::Multi(ids) => match meta.selection_config() {
            // only reachable when the default is a concrete selection
            Some(config) if ids.iter().all(|id| *id == config.selected_all_id) => {
                ChipValue::Text(config.selected_all_label.clone())
            }
            sentinel => {
                let sentinel = sentinel.map(|config| config.selected_all_id.as_str());
                let count = ids
                    .iter()
                    .filter(|id| Some(id.as_str()) != sentinel)
                    .count();
                ChipValue::Count(count)
            }
        },
    };

    Some(Chip {
        key: key.to_string(),
        label: meta.label().to_string(),
        value,
    })
}

/// Chips for every active filter, in schema order.
pub fn chips(state: &FilterState, metas: &FilterMetas) -> Vec<Chip> {
    metas
        .iter()
        .filter_map(|(key, meta)| chip_for(state, key, meta))
        .collect()
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 || text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{default_state, reset_filter, toggle};

    fn metas() -> FilterMetas {
        FilterMetas::new()
            .with("years", FilterMeta::single("Year", "2025").plain_options(["2024", "2025"]))
            .with(
                "status",
                FilterMeta::single("Status", "all")
                    .option("online", "Online")
                    .option("offline", "Offline")
                    .select_all("all", "Any status"),
            )
            .with(
                "devices",
                FilterMeta::multi("Devices", "all", "All devices")
                    .option("device-a", "Meter A")
                    .option("device-b", "Meter B"),
            )
            .validated()
            .unwrap()
    }

    #[test]
    fn no_chips_at_defaults() {
        let metas = metas();
        assert!(chips(&default_state(&metas), &metas).is_empty());
    }

    #[test]
    fn single_chip_uses_option_label() {
        let metas = metas();
        let state = default_state(&metas).with_value("status", "offline");
        let chips = chips(&state, &metas);

        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, "status");
        assert_eq!(chips[0].label, "Status");
        assert_eq!(chips[0].value, ChipValue::Text("Offline".into()));
    }

    #[test]
    fn single_chip_falls_back_to_raw_id() {
        let metas = metas();
        let state = default_state(&metas).with_value("years", "2019");
        let chip = chip_for(&state, "years", metas.get("years").unwrap()).unwrap();
        assert_eq!(chip.value, ChipValue::Text("2019".into()));
    }

    #[test]
    fn multi_chip_counts_ids() {
        let metas = metas();
        let state = default_state(&metas).with_value("devices", vec!["device-a", "device-b"]);
        let chip = chip_for(&state, "devices", metas.get("devices").unwrap()).unwrap();
        assert_eq!(chip.value, ChipValue::Count(2));
    }

    #[test]
    fn multi_chip_count_skips_sentinel() {
        let metas = metas();
        let state = default_state(&metas).with_value("devices", vec!["all", "device-b"]);
        let chip = chip_for(&state, "devices", metas.get("devices").unwrap()).unwrap();
        assert_eq!(chip.value, ChipValue::Count(1));
    }

    #[test]
    fn sentinel_only_chip_uses_select_all_label() {
        let meta = FilterMeta::multi("Devices", "all", "All devices")
            .option("device-a", "Meter A")
            .option("device-b", "Meter B")
            .default_ids(["device-a"]);
        let state = FilterState::default().with_value("devices", vec!["all"]);

        assert!(is_active(&state, "devices", &meta));
        let chip = chip_for(&state, "devices", &meta).unwrap();
        assert_eq!(chip.value, ChipValue::Text("All devices".into()));
        assert_eq!(chip.display(&DashfilterConfig::default()), "Devices: All devices");
    }

    #[test]
    fn chips_follow_schema_order() {
        let metas = metas();
        let state = default_state(&metas)
            .with_value("devices", vec!["device-a"])
            .with_value("years", "2024");
        let keys: Vec<_> = chips(&state, &metas).into_iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["years", "devices"]);
    }

    #[test]
    fn device_scenario() {
        let metas = metas();
        let meta = metas.get("devices").unwrap();
        let state = toggle(&default_state(&metas), "devices", meta, "device-a");

        assert_eq!(state.get("devices"), Some(&FilterValue::from(vec!["device-a"])));
        assert!(is_active(&state, "devices", meta));
        let chip = chip_for(&state, "devices", meta).unwrap();
        assert_eq!(chip.value, ChipValue::Count(1));
        assert_eq!(chip.display(&DashfilterConfig::default()), "Devices: 1 selected");

        let state = reset_filter(&state, "devices", meta);
        assert_eq!(state.get("devices"), Some(&FilterValue::from(vec!["all"])));
        assert!(!is_active(&state, "devices", meta));
        assert!(chip_for(&state, "devices", meta).is_none());
    }

    #[test]
    fn year_scenario() {
        let metas = metas();
        let meta = metas.get("years").unwrap();
        let state = default_state(&metas).with_value("years", "2024");

        assert!(is_active(&state, "years", meta));
        let chip = chip_for(&state, "years", meta).unwrap();
        assert_eq!(chip.value_text(&DashfilterConfig::default()), "2024");

        let state = reset_filter(&state, "years", meta);
        assert_eq!(state.get("years"), Some(&FilterValue::from("2025")));
        assert!(!is_active(&state, "years", meta));
    }

    #[test]
    fn display_uses_count_template() {
        let chip = Chip {
            key: "devices".into(),
            label: "Devices".into(),
            value: ChipValue::Count(4),
        };
        let config = DashfilterConfig {
            chip_count_template: "{count} meters".into(),
            ..Default::default()
        };
        assert_eq!(chip.display(&config), "Devices: 4 meters");
    }

    #[test]
    fn long_values_are_truncated() {
        let chip = Chip {
            key: "site".into(),
            label: "Site".into(),
            value: ChipValue::Text("Main distribution board north".into()),
        };
        let config = DashfilterConfig {
            chip_max_width: 10,
            ..Default::default()
        };
        let text = chip.value_text(&config);
        assert_eq!(text, "Main dist…");
        assert_eq!(text.width(), 10);
    }

    #[test]
    fn zero_width_disables_truncation() {
        let long = "x".repeat(100);
        assert_eq!(truncate_to_width(&long, 0), long);
    }

    #[test]
    fn truncation_counts_wide_characters() {
        // each CJK character is two columns wide
        let text = truncate_to_width("電力計測器一覧", 6);
        assert_eq!(text, "電力…");
        assert!(text.width() <= 6);
    }

    #[test]
    fn chip_serializes_flat_value() {
        let chip = Chip {
            key: "devices".into(),
            label: "Devices".into(),
            value: ChipValue::Count(2),
        };
        assert_eq!(
            serde_json::to_string(&chip).unwrap(),
            r#"{"key":"devices","label":"Devices","value":2}"#
        );
    }
}
