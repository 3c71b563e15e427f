//! Snapshot comparison reports.
//!
//! Wraps the line diff with content digests, line counts and a
//! classification so a viewer (or a reviewer reading JSON) can tell at a
//! glance whether two snapshots differ at all.

#![allow(clippy::result_large_err)]

use crate::diff::engine::{diff, split_lines};
use crate::diff::model::{DiffClassification, DiffIdentity, SnapshotDiff};
use crate::errors::{ExError, ExErrorKind, QuillError};
use crate::{log_op_end, log_op_start};
use sha2::{Digest as _, Sha256};
use std::time::Instant;

/// Current schema version of [`SnapshotDiff`].
pub const DIFF_SCHEMA_VERSION: u32 = 1;

/// SHA-256 hex digest of a text's UTF-8 bytes.
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare two snapshot texts and build a full report.
///
/// Never fails. Byte-identical inputs are classified `Identical`; anything
/// else is `Changed`.
pub fn compare_snapshots(old_text: &str, new_text: &str) -> SnapshotDiff {
    let start = Instant::now();
    let old_line_count = split_lines(old_text).len();
    let new_line_count = split_lines(new_text).len();
    log_op_start!(
        "compare_snapshots",
        old_lines = old_line_count,
        new_lines = new_line_count
    );

    let identity = DiffIdentity {
        old_digest: content_digest(old_text),
        old_line_count,
        new_digest: content_digest(new_text),
        new_line_count,
    };

    let classification = if old_text == new_text {
        DiffClassification::Identical
    } else {
        DiffClassification::Changed
    };

    let lines = diff(old_text, new_text);
    let stats = lines.stats();

    log_op_end!(
        "compare_snapshots",
        duration_ms = start.elapsed().as_millis() as u64,
        added = stats.added,
        removed = stats.removed
    );

    SnapshotDiff {
        diff_schema_version: DIFF_SCHEMA_VERSION,
        identity,
        classification,
        stats,
        lines,
    }
}

/// Decode one side of a comparison as UTF-8.
///
/// # Errors
///
/// `InvalidUtf8` naming the side (`which`) and the decode failure.
pub fn decode_text<'a>(which: &str, bytes: &'a [u8]) -> Result<&'a str, QuillError> {
    std::str::from_utf8(bytes).map_err(|e| QuillError::InvalidUtf8 {
        which: which.to_string(),
        reason: e.to_string(),
    })
}

/// Compare two snapshots supplied as raw bytes.
///
/// Decodes both sides, builds the report and checks that it survives a JSON
/// round-trip unchanged, so the report handed to a viewer is exactly the one
/// computed.
///
/// # Errors
///
/// - `InvalidEncoding`: either side is not valid UTF-8
/// - `DeterminismViolation`: the report failed its round-trip check
pub fn compare_snapshot_bytes(old_bytes: &[u8], new_bytes: &[u8]) -> Result<SnapshotDiff, ExError> {
    let old_text = decode_text("old", old_bytes)
        .map_err(|e| ExError::from(e).with_op("compare_snapshot_bytes"))?;
    let new_text = decode_text("new", new_bytes)
        .map_err(|e| ExError::from(e).with_op("compare_snapshot_bytes"))?;

    let report = compare_snapshots(old_text, new_text);

    let serialized = serde_json::to_string(&report).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_snapshot_bytes")
            .with_message(format!("failed to serialize report: {}", e))
    })?;
    let reparsed: SnapshotDiff = serde_json::from_str(&serialized).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_snapshot_bytes")
            .with_message(format!("failed to re-parse report: {}", e))
    })?;
    if reparsed != report {
        return Err(ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_snapshot_bytes")
            .with_message("report round-trip produced a different struct"));
    }

    Ok(report)
}
