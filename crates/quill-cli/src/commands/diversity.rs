//! Diversity command
//!
//! Usage: quill diversity <FILE> [--format text|json] [--min-tokens <N>]

use clap::Args;
use quill_core::diff::report::decode_text;
use quill_core::diversity::{analyze, DiversityAnalysis};
use quill_core::{log_op_end, log_op_error, log_op_start, DiversityConfig, ExError, QuillConfig};
use quill_core_types::RequestContext;
use std::path::PathBuf;
use std::time::Instant;

use super::{read_input, to_json, write_output, OutputFormat};

#[derive(Debug, Args)]
pub struct DiversityArgs {
    /// Text or HTML file to score
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Minimum token count to score; overrides the config file
    #[arg(long)]
    pub min_tokens: Option<usize>,
}

/// Execute diversity command
pub fn execute(
    args: DiversityArgs,
    config: &QuillConfig,
    ctx: &RequestContext,
) -> Result<(), ExError> {
    let start = Instant::now();
    log_op_start!("cli_diversity", request_id = %ctx.request_id);

    match run(&args, config) {
        Ok(()) => {
            log_op_end!(
                "cli_diversity",
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            Ok(())
        }
        Err(e) => {
            log_op_error!(
                "cli_diversity",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            Err(e)
        }
    }
}

fn run(args: &DiversityArgs, config: &QuillConfig) -> Result<(), ExError> {
    let mut thresholds = config.diversity.clone();
    if let Some(min_tokens) = args.min_tokens {
        thresholds.min_tokens = min_tokens;
    }
    thresholds
        .validate()
        .map_err(|e| ExError::from(e).with_op("diversity"))?;

    let bytes = read_input(&args.file)?;
    let text = decode_text(&args.file.display().to_string(), &bytes).map_err(ExError::from)?;
    let analysis = analyze(text, &thresholds);

    let rendered = match args.format {
        OutputFormat::Text => render_text(&analysis, &thresholds),
        OutputFormat::Json => to_json(&analysis)?,
    };

    write_output(None, &rendered)
}

fn render_text(analysis: &DiversityAnalysis, thresholds: &DiversityConfig) -> String {
    let mut out = format!(
        "Tokens: {} ({} unique)\n",
        analysis.total_tokens, analysis.unique_tokens
    );
    if analysis.total_tokens < thresholds.min_tokens {
        out.push_str(&format!(
            "Score: {:.2}\nRating: {} (fewer than {} tokens, not scored)\n",
            analysis.result.score, analysis.result.rating, thresholds.min_tokens
        ));
    } else {
        out.push_str(&format!(
            "Score: {:.2}\nRating: {}\n",
            analysis.result.score, analysis.result.rating
        ));
    }
    out
}
