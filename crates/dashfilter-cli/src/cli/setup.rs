use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dashfilter",
    bin_name = "dashfilter",
    version,
    disable_help_subcommand = true,
    after_help = "Schemas are JSON or TOML files, or a built-in preset written as preset:<name>.\nRun `dashfilter presets` to list the presets."
)]
#[command(about = "Inspect dashboard filter schemas and filter states", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Arguments shared by commands that read a schema and a state.
#[derive(clap::Args, Debug)]
pub struct StateArgs {
    /// Schema file (.json / .toml) or preset:<name>
    pub schema: String,

    /// JSON state file (defaults to the schema's default state)
    #[arg(long, short = 's')]
    pub state: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a schema
    #[command(display_order = 1)]
    Check {
        /// Schema file (.json / .toml) or preset:<name>
        schema: String,
    },

    /// Print the default state of a schema
    #[command(display_order = 2)]
    Defaults {
        /// Schema file (.json / .toml) or preset:<name>
        schema: String,
    },

    /// Show which filters are active
    #[command(display_order = 3)]
    Status {
        #[command(flatten)]
        args: StateArgs,
    },

    /// Print the chips for the active filters
    #[command(display_order = 4)]
    Chips {
        #[command(flatten)]
        args: StateArgs,
    },

    /// Toggle an option and print the new state
    #[command(display_order = 5)]
    Toggle {
        #[command(flatten)]
        args: StateArgs,

        /// Filter key
        key: String,

        /// Option id
        id: String,
    },

    /// Select an option (replacing the filter's value) and print the new state
    #[command(display_order = 6)]
    Select {
        #[command(flatten)]
        args: StateArgs,

        /// Filter key
        key: String,

        /// Option id
        id: String,
    },

    /// Reset one filter, or all of them, and print the new state
    #[command(display_order = 7)]
    Reset {
        #[command(flatten)]
        args: StateArgs,

        /// Filter key (omit to reset every filter)
        key: Option<String>,
    },

    /// List the built-in presets
    #[command(display_order = 8)]
    Presets,
}
