//! Snapshot diff engine.
//!
//! Aligns two texts line by line and reports which lines are common, added
//! or removed.
//!
//! ## Entry points
//!
//! ```
//! use quill_core::diff::{compare_snapshots, diff, render_human_summary};
//!
//! let lines = diff("a\nb", "a\nc");
//! let report = compare_snapshots("a\nb", "a\nc");
//! let summary = render_human_summary(&report);
//! assert_eq!(report.lines, lines);
//! assert!(summary.contains("Changed"));
//! ```
//!
//! ## Guarantees
//!
//! - **Lossless**: the non-added lines of a result are exactly the old
//!   text's lines, the non-removed lines exactly the new text's.
//! - **Determinism**: identical inputs produce identical output.
//! - **Total**: no input makes `diff` fail or panic.

pub mod engine;
pub mod human_summary;
pub mod model;
pub mod report;
pub mod side_by_side;

pub use engine::{diff, split_lines};
pub use human_summary::render_human_summary;
pub use model::{
    DiffClassification, DiffIdentity, DiffLine, DiffLineType, DiffResult, DiffStats, SnapshotDiff,
};
pub use report::{compare_snapshot_bytes, compare_snapshots, content_digest};
pub use side_by_side::{side_by_side, SideBySideRow, SideCell};
