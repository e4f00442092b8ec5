//! Text rendering for terminal output.
//!
//! Every function here returns a `String`; printing happens in `commands.rs`.
//! Colors come from `console` styles, which switch themselves off when stdout
//! is not a terminal.

use dashfilter::config::DashfilterConfig;
use dashfilter::filters::Chip;
use dashfilter::FilterMetas;

use super::styles::{ACTIVE, CHIP_TEXT, CHIP_MARKER, DIM, KEY, KIND, SUCCESS};

const CHIP_MARKER_GLYPH: &str = "●";

pub fn render_chips(chips: &[Chip], config: &DashfilterConfig) -> String {
    if chips.is_empty() {
        return format!("{}\n", DIM.apply_to("No active filters."));
    }

    let mut out = String::new();
    for chip in chips {
        out.push_str(&format!(
            "{} {}\n",
            CHIP_MARKER.apply_to(CHIP_MARKER_GLYPH),
            CHIP_TEXT.apply_to(chip.display(config))
        ));
    }
    out
}

pub fn render_schema_summary(metas: &FilterMetas) -> String {
    let mut out = format!(
        "{}\n",
        SUCCESS.apply_to(format!("Schema is valid ({} filters)", metas.len()))
    );
    for (key, meta) in metas.iter() {
        out.push_str(&format!(
            "  {} {} {} {}\n",
            KEY.apply_to(key),
            KIND.apply_to(format!("[{}]", meta.kind())),
            meta.label(),
            DIM.apply_to(format!("({} options)", meta.options().len()))
        ));
    }
    out
}

pub fn render_status(metas: &FilterMetas, active: &[&str]) -> String {
    if active.is_empty() {
        return format!("{}\n", DIM.apply_to("All filters at defaults."));
    }

    let mut out = format!("{} active\n", active.len());
    for key in metas.keys() {
        let marker = if active.contains(&key) {
            ACTIVE.apply_to("active").to_string()
        } else {
            DIM.apply_to("default").to_string()
        };
        out.push_str(&format!("  {} {}\n", KEY.apply_to(key), marker));
    }
    out
}

pub fn render_presets(presets: &[(&str, &FilterMetas)]) -> String {
    let mut out = String::new();
    for (name, metas) in presets {
        let keys: Vec<&str> = metas.keys().collect();
        out.push_str(&format!(
            "{} {}\n",
            KEY.apply_to(name),
            DIM.apply_to(keys.join(", "))
        ));
    }
    out
}
