//! modgroup CLI - inspect derived module groupings
//!
//! Loads a module-set snapshot description from JSON, runs strategy
//! selection, and prints each module's group path and presentable name.
//! All logic lives in the library; this binary only wires it to the shell.

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use modgroup::core::{select_grouper, GroupingReport, SnapshotFile};
use std::path::PathBuf;

/// Inspect the display grouping derived for a module set.
///
/// The snapshot file describes the committed registry, an optional editing
/// overlay, and optional feature flags. See the library docs for the schema.
#[derive(Parser, Debug)]
#[command(name = "modgroup")]
#[command(version = modgroup::VERSION)]
#[command(about = "Inspect the display grouping derived for a module set")]
#[command(after_help = "EXAMPLES:
  # Print the grouping for a snapshot
  modgroup snapshot.json

  # Same snapshot, qualified-name grouping forced off
  modgroup snapshot.json --qualified-names false

  # Ignore the editing overlay and show the committed state
  modgroup snapshot.json --committed

  # Machine-readable report
  modgroup snapshot.json --format json
")]
struct Cli {
    /// Snapshot description file (JSON)
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    format: FormatArg,

    /// Override the qualified-names feature flag from the snapshot file
    #[arg(long = "qualified-names", value_name = "BOOL")]
    qualified_names: Option<bool>,

    /// Ignore the overlay and group the committed state
    #[arg(long = "committed")]
    committed: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut file = SnapshotFile::load(&cli.snapshot)
        .with_context(|| format!("failed to load {}", cli.snapshot.display()))?;
    if cli.committed {
        file.overlay = None;
    }

    let mut flags = file.flags.unwrap_or_default();
    if let Some(qualified) = cli.qualified_names {
        flags.qualified_module_names = qualified;
    }

    let grouper = select_grouper(file.snapshot(), &flags);
    let report = GroupingReport::build(grouper.as_ref());

    match cli.format {
        FormatArg::Text => print!("{}", report.to_text()),
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
