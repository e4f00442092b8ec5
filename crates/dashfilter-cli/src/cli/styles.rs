use console::Style;
use once_cell::sync::Lazy;

pub static CHIP_MARKER: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static CHIP_TEXT: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static KEY: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static KIND: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static DIM: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static ACTIVE: Lazy<Style> = Lazy::new(|| Style::new().magenta());
