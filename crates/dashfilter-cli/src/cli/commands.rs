//! # CLI Layer
//!
//! This module is **one client** of the dashfilter library. It is the only place
//! that reads files named on the command line, prints to stdout and decides exit
//! codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: `setup.rs` turns shell arguments into [`Commands`]
//! 2. **Context Setup**: resolve the schema (file or preset), the state and the config
//! 3. **Dispatch**: call the library (mostly through `FilterSession`)
//! 4. **Output**: styled text via `render.rs`, or JSON with `--json`
//!
//! Filter logic is never reimplemented here.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dashfilter::config::{load_config, DashfilterConfig};
use dashfilter::filters::{active_keys, chips, default_state, is_default_filters};
use dashfilter::{presets, FilterMetas, FilterSession, FilterState};
use directories::ProjectDirs;
use serde::Serialize;

use super::logging::init_logging;
use super::render::{render_chips, render_presets, render_schema_summary, render_status};
use super::setup::{Cli, Commands, StateArgs};

const PRESET_PREFIX: &str = "preset:";
const PROJECT_CONFIG: &str = ".dashfilter/dashfilter.toml";
const CONFIG_FILE: &str = "dashfilter.toml";

struct AppContext {
    config: DashfilterConfig,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let ctx = AppContext {
        config: load_config(&config_files())?,
        json: cli.json,
    };

    match cli.command {
        Commands::Check { schema } => handle_check(&ctx, &schema),
        Commands::Defaults { schema } => handle_defaults(&schema),
        Commands::Status { args } => handle_status(&ctx, &args),
        Commands::Chips { args } => handle_chips(&ctx, &args),
        Commands::Toggle { args, key, id } => {
            handle_transition(&args, |session| session.toggle(&key, &id))
        }
        Commands::Select { args, key, id } => {
            handle_transition(&args, |session| session.select(&key, &id))
        }
        Commands::Reset { args, key } => handle_transition(&args, |session| match &key {
            Some(key) => session.remove_chip(key),
            None => {
                session.reset_all();
                Ok(())
            }
        }),
        Commands::Presets => handle_presets(&ctx),
    }
}

/// Config files in priority order: project first, then the user config dir.
fn config_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(PROJECT_CONFIG)];
    if let Some(dirs) = ProjectDirs::from("", "", "dashfilter") {
        files.push(dirs.config_dir().join(CONFIG_FILE));
    }
    files
}

fn load_schema(spec: &str) -> Result<Cow<'static, FilterMetas>> {
    if let Some(name) = spec.strip_prefix(PRESET_PREFIX) {
        tracing::debug!(preset = name, "using built-in schema");
        return Ok(Cow::Borrowed(presets::get(name)?));
    }
    let metas = FilterMetas::load(Path::new(spec))
        .with_context(|| format!("failed to load schema '{}'", spec))?;
    Ok(Cow::Owned(metas))
}

fn load_state(metas: &FilterMetas, path: Option<&Path>) -> Result<FilterState> {
    let Some(path) = path else {
        return Ok(default_state(metas));
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read state '{}'", path.display()))?;
    let state = FilterState::from_json(&text)
        .with_context(|| format!("failed to parse state '{}'", path.display()))?;
    Ok(state)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_check(ctx: &AppContext, schema: &str) -> Result<()> {
    let metas = load_schema(schema)?;
    if ctx.json {
        #[derive(Serialize)]
        struct CheckReport<'a> {
            valid: bool,
            filters: Vec<&'a str>,
        }
        return print_json(&CheckReport {
            valid: true,
            filters: metas.keys().collect(),
        });
    }
    print!("{}", render_schema_summary(&metas));
    Ok(())
}

fn handle_defaults(schema: &str) -> Result<()> {
    let metas = load_schema(schema)?;
    print_json(&default_state(&metas))
}

fn handle_status(ctx: &AppContext, args: &StateArgs) -> Result<()> {
    let metas = load_schema(&args.schema)?;
    let state = load_state(&metas, args.state.as_deref())?;
    let active = active_keys(&state, &metas);

    if ctx.json {
        #[derive(Serialize)]
        struct StatusReport<'a> {
            is_default: bool,
            active: &'a [&'a str],
        }
        return print_json(&StatusReport {
            is_default: is_default_filters(&state, &metas),
            active: &active,
        });
    }
    print!("{}", render_status(&metas, &active));
    Ok(())
}

fn handle_chips(ctx: &AppContext, args: &StateArgs) -> Result<()> {
    let metas = load_schema(&args.schema)?;
    let state = load_state(&metas, args.state.as_deref())?;
    let chips = chips(&state, &metas);

    if ctx.json {
        return print_json(&chips);
    }
    print!("{}", render_chips(&chips, &ctx.config));
    Ok(())
}

/// Load schema and state, run one session transition, print the applied state.
fn handle_transition<F>(args: &StateArgs, transition: F) -> Result<()>
where
    F: FnOnce(&mut FilterSession<'_>) -> dashfilter::Result<()>,
{
    let metas = load_schema(&args.schema)?;
    let state = load_state(&metas, args.state.as_deref())?;

    let mut session = FilterSession::with_applied(&metas, state);
    transition(&mut session)?;
    print_json(session.apply())
}

fn handle_presets(ctx: &AppContext) -> Result<()> {
    let mut entries = Vec::new();
    for name in presets::names() {
        entries.push((*name, presets::get(name)?));
    }

    if ctx.json {
        let mut map = serde_json::Map::new();
        for (name, metas) in &entries {
            map.insert(name.to_string(), serde_json::to_value(metas)?);
        }
        return print_json(&map);
    }
    print!("{}", render_presets(&entries));
    Ok(())
}
