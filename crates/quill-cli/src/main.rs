//! Quill CLI
//!
//! Command-line access to the snapshot diff and lexical diversity analyses.

use clap::{Parser, Subcommand};
use quill_core::logging_facility::{self, Profile};
use quill_core::{ExError, QuillConfig};
use quill_core_types::RequestContext;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(about = "Quill - snapshot diff and vocabulary analysis for manuscripts", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging profile (development, production, test); overrides the config file
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two snapshots line by line
    Diff(commands::diff::DiffArgs),
    /// Score the vocabulary richness of a text
    Diversity(commands::diversity::DiversityArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<QuillConfig, ExError> {
    match path {
        Some(path) => {
            QuillConfig::load(path).map_err(|e| ExError::from(e).with_op("load_config"))
        }
        None => Ok(QuillConfig::default()),
    }
}

fn run(cli: Cli, ctx: &RequestContext) -> Result<(), ExError> {
    let config = load_config(cli.config.as_ref())?;
    logging_facility::init(cli.log_profile.unwrap_or(config.logging.profile));

    match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, ctx),
        Commands::Diversity(args) => commands::diversity::execute(args, &config, ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    let ctx = RequestContext::new();

    if let Err(e) = run(cli, &ctx) {
        eprintln!("Error: {}", e.with_request_id(ctx.request_id.clone()));
        std::process::exit(1);
    }
}
