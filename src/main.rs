//! refdiff CLI - Compare an image against `reference-dmg.png`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use refdiff::{Comparator, Config};

const USAGE: &str = "Usage: refdiff <candidate-image>";

/// Compare an image pixel by pixel against the reference image in the
/// current directory.
#[derive(Parser, Debug)]
#[command(name = "refdiff")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Candidate image path. Taken literally, even when it starts with `-`.
    #[arg(value_name = "CANDIDATE", allow_hyphen_values = true)]
    candidate: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    // Logs go to stderr, stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "refdiff=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let comparator = Comparator::new(Config::default()).context("Invalid configuration")?;

    let stdout = io::stdout();
    comparator
        .compare_images(&args.candidate, &mut stdout.lock())
        .with_context(|| format!("Failed to compare {}", args.candidate.display()))?;

    Ok(())
}
