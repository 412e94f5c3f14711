//! chart-cli - compare two chart revisions from the command line
//!
//! Runs one comparison and prints the affected tracks with their rendered
//! change images, or a JSON array with `--json`.

use anyhow::Result;
use chart_compare::{run_comparison, CompareParams};
use chart_diff::ChartProfile;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chart-cli")]
#[command(about = "Compare two note chart revisions and render change images")]
#[command(version)]
struct Cli {
    /// Previous chart revision
    old: PathBuf,

    /// New chart revision
    new: PathBuf,

    /// Identifier mixed into artifact filenames
    #[arg(short, long, default_value = "local")]
    session: String,

    /// Output directory for change images
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// Track-naming convention of the charts
    #[arg(short, long, value_enum, default_value_t = ProfileArg::Primary)]
    profile: ProfileArg,

    /// Clustering window in ticks
    #[arg(long, default_value_t = 10)]
    window: u64,

    /// Shift-suppression radius in ticks
    #[arg(long, default_value_t = 10)]
    threshold: u64,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    Primary,
    Alternate,
}

impl From<ProfileArg> for ChartProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Primary => ChartProfile::Primary,
            ProfileArg::Alternate => ChartProfile::Alternate,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let old = std::fs::read(&cli.old)?;
    let new = std::fs::read(&cli.new)?;
    info!(
        old = %cli.old.display(),
        new = %cli.new.display(),
        session = %cli.session,
        "comparing chart revisions"
    );

    let params = CompareParams {
        window: cli.window,
        threshold: cli.threshold,
    };
    let changes = run_comparison(
        &old,
        &new,
        &cli.session,
        &cli.out,
        cli.profile.into(),
        &params,
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
    } else if changes.is_empty() {
        println!("no significant changes");
    } else {
        for change in &changes {
            println!("{}: {}", change.track, change.image.display());
        }
    }

    Ok(())
}
