//! Diff command
//!
//! Usage: quill diff <OLD> <NEW> [--format text|json|side-by-side] [--strip-markup]

use clap::{Args, ValueEnum};
use quill_core::diff::report::decode_text;
use quill_core::diff::{
    compare_snapshot_bytes, compare_snapshots, render_human_summary, side_by_side,
    DiffLineType, SideBySideRow, SideCell, SnapshotDiff,
};
use quill_core::diversity::strip_markup;
use quill_core::{log_op_end, log_op_error, log_op_start, ExError};
use quill_core_types::RequestContext;
use std::path::PathBuf;
use std::time::Instant;

use super::{read_input, to_json, write_output};

/// Width of each text column in side-by-side output
const COLUMN_WIDTH: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffFormat {
    /// Markdown summary with a unified listing
    Text,
    /// The full report as JSON
    Json,
    /// Two columns, old on the left and new on the right
    SideBySide,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Older snapshot
    pub old: PathBuf,

    /// Newer snapshot
    pub new: PathBuf,

    #[arg(long, value_enum, default_value_t = DiffFormat::Text)]
    pub format: DiffFormat,

    /// Remove `<...>` tags from both snapshots before comparing
    #[arg(long)]
    pub strip_markup: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute diff command
pub fn execute(args: DiffArgs, ctx: &RequestContext) -> Result<(), ExError> {
    let start = Instant::now();
    log_op_start!("cli_diff", request_id = %ctx.request_id);

    match run(&args) {
        Ok(()) => {
            log_op_end!(
                "cli_diff",
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            Ok(())
        }
        Err(e) => {
            log_op_error!(
                "cli_diff",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            Err(e)
        }
    }
}

fn run(args: &DiffArgs) -> Result<(), ExError> {
    let old_bytes = read_input(&args.old)?;
    let new_bytes = read_input(&args.new)?;

    let report = if args.strip_markup {
        let old_text = decode_text("old", &old_bytes).map_err(ExError::from)?;
        let new_text = decode_text("new", &new_bytes).map_err(ExError::from)?;
        compare_snapshots(&strip_markup(old_text), &strip_markup(new_text))
    } else {
        compare_snapshot_bytes(&old_bytes, &new_bytes)?
    };

    let rendered = match args.format {
        DiffFormat::Text => render_human_summary(&report),
        DiffFormat::Json => to_json(&report)?,
        DiffFormat::SideBySide => render_columns(&report),
    };

    write_output(args.output.as_deref(), &rendered)
}

/// Render the report as a fixed-width two-column table
fn render_columns(report: &SnapshotDiff) -> String {
    let mut out = String::new();
    for row in side_by_side(&report.lines) {
        out.push_str(&format_row(&row));
        out.push('\n');
    }
    out
}

fn format_row(row: &SideBySideRow) -> String {
    let gutter = match (&row.left, &row.right) {
        (Some(l), Some(r)) if l.line_type == DiffLineType::Common && r.line_type == DiffLineType::Common => ' ',
        (Some(_), Some(_)) => '|',
        (Some(_), None) => '<',
        (None, Some(_)) => '>',
        (None, None) => ' ',
    };
    format!(
        "{} {} {}",
        format_cell(row.left.as_ref()),
        gutter,
        format_cell(row.right.as_ref()).trim_end()
    )
}

fn format_cell(cell: Option<&SideCell>) -> String {
    match cell {
        Some(cell) => {
            let text: String = cell.value.chars().take(COLUMN_WIDTH).collect();
            format!("{:>4} {:<width$}", cell.line_number, text, width = COLUMN_WIDTH)
        }
        None => format!("{:>4} {:<width$}", "", "", width = COLUMN_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_columns_marks_changes() {
        let report = compare_snapshots("a\nb\nc", "a\nx");
        let rendered = render_columns(&report);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("   1 a"));
        assert!(lines[1].contains(" | "));
        assert!(lines[1].ends_with("2 x"));
        assert!(lines[2].contains(" < "));
    }

    #[test]
    fn test_long_lines_are_truncated_to_column_width() {
        let long = "x".repeat(COLUMN_WIDTH + 10);
        let report = compare_snapshots(&long, &long);
        let rendered = render_columns(&report);
        let expected_cell = "x".repeat(COLUMN_WIDTH);
        assert!(rendered.contains(&expected_cell));
        assert!(!rendered.contains(&"x".repeat(COLUMN_WIDTH + 1)));
    }
}
