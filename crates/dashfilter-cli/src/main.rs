//! # Dashfilter CLI
//!
//! A thin command-line client for the `dashfilter` library: it loads a filter
//! schema (a JSON/TOML file or a built-in preset) and optionally a JSON state
//! file, runs one engine operation and prints the result.
//!
//! ## Workspace Structure
//!
//! - `crates/dashfilter/` — the UI-agnostic filter engine
//! - `crates/dashfilter-cli/` — this binary
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/dashfilter-cli/src/cli/)                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - schema/state/config loading + dispatch (commands.rs)     │
//! │  - styled text output (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/dashfilter)                                │
//! │  - FilterSession facade over pure filter functions          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each filter operation.
//! - **CLI parsing and rendering**: unit tests in `setup.rs` and `render.rs`.
//! - **End to end**: `tests/cli.rs` runs the binary with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
