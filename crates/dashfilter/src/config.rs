//! # Configuration
//!
//! Chip formatting is configured through [`confique`], which handles layered
//! loading from TOML files, environment variables and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `DASHFILTER_CHIP_COUNT_TEMPLATE`, `DASHFILTER_CHIP_MAX_WIDTH`.
//! 2. **Files**, in the order passed to [`load_config`] (the CLI passes
//!    `.dashfilter/dashfilter.toml` first, then the OS config directory).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `chip_count_template` | `{count} selected` | Text of a multi-select chip; `{count}` is replaced |
//! | `chip_max_width` | `24` | Display columns a chip value may take before it is cut with `…` (0 = no limit) |

use std::path::PathBuf;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

pub const DEFAULT_COUNT_TEMPLATE: &str = "{count} selected";
pub const DEFAULT_MAX_WIDTH: usize = 24;

/// Configuration for chip rendering, stored in `dashfilter.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DashfilterConfig {
    /// Template for multi-select chip values; `{count}` is the number of selected ids
    #[config(default = "{count} selected", env = "DASHFILTER_CHIP_COUNT_TEMPLATE")]
    pub chip_count_template: String,

    /// Maximum display width of a chip value (0 disables truncation)
    #[config(default = 24, env = "DASHFILTER_CHIP_MAX_WIDTH")]
    pub chip_max_width: usize,
}

impl Default for DashfilterConfig {
    fn default() -> Self {
        Self {
            chip_count_template: DEFAULT_COUNT_TEMPLATE.to_string(),
            chip_max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl DashfilterConfig {
    /// Render a selection count through the configured template.
    pub fn format_count(&self, count: usize) -> String {
        self.chip_count_template
            .replace("{count}", &count.to_string())
    }
}

/// Load configuration from the environment and the given files.
///
/// Earlier files take precedence over later ones; missing files are skipped.
pub fn load_config(files: &[PathBuf]) -> Result<DashfilterConfig> {
    let mut builder = DashfilterConfig::builder().env();
    for file in files {
        builder = builder.file(file);
    }
    builder
        .load()
        .map_err(|e| FilterError::Config(e.to_string()))
}
