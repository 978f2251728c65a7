//! FHIR Match CLI
//!
//! Command-line interface for comparing two FHIR StructureDefinitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fhir_match_core::render::{render_review_details, render_summary};
use fhir_match_core::reviewers::{AggregateReviewer, Reviewer};
use fhir_match_core::{logging_facility, Result};

mod loader;

#[derive(Debug, Parser)]
#[command(name = "fhir-match", version)]
#[command(about = "Semantic compatibility review for FHIR profiles", long_about = None)]
struct Cli {
    /// The file path to the first resource for comparison
    #[arg(short = 'a', long, value_name = "FILE")]
    resource_a: PathBuf,

    /// The file path to the second resource for comparison
    #[arg(short = 'b', long, value_name = "FILE")]
    resource_b: PathBuf,

    /// The level of log messages
    #[arg(short = 'l', long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init_with_level(cli.log_level.as_str());

    if let Err(e) = run(&cli) {
        tracing::error!("FHIR Match encountered the following unexpected error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    tracing::info!("Arguments:");
    tracing::info!("  --resource-a {}", cli.resource_a.display());
    tracing::info!("  --resource-b {}", cli.resource_b.display());

    let a = loader::load_profile(&cli.resource_a)?;
    let b = loader::load_profile(&cli.resource_b)?;

    let reviewer = AggregateReviewer::structure_definition();
    let review = reviewer.review(&a, &b);

    for line in render_review_details(&review) {
        tracing::info!("{line}");
    }

    tracing::warn!(
        "NOTE: FHIR Match is ridiculously young and naive. Do not trust it. \
         Even if it smiles nicely at you."
    );

    println!("{}", render_summary(&review));
    Ok(())
}
