//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.

use serde::{Deserialize, Serialize};

/// How a line takes part in the alignment of two texts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineType {
    /// Present in both texts
    Common,
    /// Present only in the new text
    Added,
    /// Present only in the old text
    Removed,
}

/// One aligned line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffLine {
    pub value: String,
    #[serde(rename = "type")]
    pub line_type: DiffLineType,
}

impl DiffLine {
    pub fn common(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            line_type: DiffLineType::Common,
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            line_type: DiffLineType::Added,
        }
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            line_type: DiffLineType::Removed,
        }
    }

    /// True if the line belongs to the old text (common or removed)
    pub fn in_old(&self) -> bool {
        self.line_type != DiffLineType::Added
    }

    /// True if the line belongs to the new text (common or added)
    pub fn in_new(&self) -> bool {
        self.line_type != DiffLineType::Removed
    }
}

/// Ordered line alignment of two texts, top to bottom.
///
/// Serializes as a bare JSON array of [`DiffLine`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
}

impl DiffResult {
    pub fn new(lines: Vec<DiffLine>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffLine> {
        self.lines.iter()
    }

    /// The old text's lines, recovered from the alignment
    pub fn old_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.in_old())
            .map(|l| l.value.as_str())
            .collect()
    }

    /// The new text's lines, recovered from the alignment
    pub fn new_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.in_new())
            .map(|l| l.value.as_str())
            .collect()
    }

    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for line in &self.lines {
            match line.line_type {
                DiffLineType::Common => stats.common += 1,
                DiffLineType::Added => stats.added += 1,
                DiffLineType::Removed => stats.removed += 1,
            }
        }
        stats
    }

    /// True if every line is common
    pub fn is_unchanged(&self) -> bool {
        self.lines
            .iter()
            .all(|l| l.line_type == DiffLineType::Common)
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffLine;
    type IntoIter = std::slice::Iter<'a, DiffLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Line counts per alignment type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffStats {
    pub common: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    /// True if anything was added or removed
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

/// The top-level report for a comparison of two snapshots.
///
/// `diff_schema_version` is always 1 for this implementation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotDiff {
    /// Schema version of this report (always 1)
    pub diff_schema_version: u32,
    /// Digests and sizes of both sides
    pub identity: DiffIdentity,
    /// High-level classification of the comparison
    pub classification: DiffClassification,
    /// Line counts per alignment type
    pub stats: DiffStats,
    /// The alignment itself
    pub lines: DiffResult,
}

/// Content identity of both texts being compared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffIdentity {
    /// SHA-256 hex digest of the old text
    pub old_digest: String,
    /// Line count of the old text
    pub old_line_count: usize,
    /// SHA-256 hex digest of the new text
    pub new_digest: String,
    /// Line count of the new text
    pub new_line_count: usize,
}

/// High-level classification of a comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiffClassification {
    /// Both texts are byte-identical
    Identical,
    /// At least one line was added or removed
    Changed,
}
