//! Quill Core - text analysis kernel of the Quill writing assistant
//!
//! This crate provides the two side-effect-free analyses behind the
//! assistant's snapshot viewer and style hints:
//! - Line-level LCS diff of two snapshots, with reports, side-by-side
//!   pairing and a Markdown summary
//! - Lexical diversity (Guiraud index) with a Low / Medium / High rating
//!
//! plus the ambient facilities shared by every Quill binary: structured
//! errors, structured logging and TOML configuration.

pub mod config;
pub mod diff;
pub mod diversity;
pub mod errors;
pub mod logging_facility;

// Used by the exported logging macros
pub use quill_core_types as core_types;

// Re-export commonly used types
pub use config::{DiversityConfig, QuillConfig};
pub use diff::{compare_snapshots, diff, DiffLine, DiffLineType, DiffResult, SnapshotDiff};
pub use diversity::{diversity, DiversityRating, DiversityResult};
pub use errors::{ExError, ExErrorKind, QuillError, Result};
