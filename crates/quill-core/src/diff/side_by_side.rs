//! Two-column pairing of a line diff.
//!
//! A side-by-side viewer shows the old text on the left and the new text on
//! the right. Common lines sit on both sides of one row; a block of removed
//! lines followed by a block of added lines is zipped row by row, and the
//! shorter block is padded with empty cells.

use crate::diff::model::{DiffLine, DiffLineType, DiffResult};
use serde::{Deserialize, Serialize};

/// One side of a row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SideCell {
    /// 1-based line number within its own text
    pub line_number: usize,
    pub value: String,
    #[serde(rename = "type")]
    pub line_type: DiffLineType,
}

/// One displayed row; `None` marks an empty cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SideBySideRow {
    pub left: Option<SideCell>,
    pub right: Option<SideCell>,
}

/// Pair the alignment into display rows.
pub fn side_by_side(result: &DiffResult) -> Vec<SideBySideRow> {
    let mut rows = Vec::with_capacity(result.len());
    let mut old_no = 0usize;
    let mut new_no = 0usize;
    let mut removed: Vec<SideCell> = Vec::new();
    let mut added: Vec<SideCell> = Vec::new();

    for line in result {
        match line.line_type {
            DiffLineType::Common => {
                flush_block(&mut rows, &mut removed, &mut added);
                old_no += 1;
                new_no += 1;
                rows.push(SideBySideRow {
                    left: Some(cell(old_no, line)),
                    right: Some(cell(new_no, line)),
                });
            }
            DiffLineType::Removed => {
                // a removal after additions starts a new block
                if !added.is_empty() {
                    flush_block(&mut rows, &mut removed, &mut added);
                }
                old_no += 1;
                removed.push(cell(old_no, line));
            }
            DiffLineType::Added => {
                new_no += 1;
                added.push(cell(new_no, line));
            }
        }
    }
    flush_block(&mut rows, &mut removed, &mut added);

    rows
}

fn cell(line_number: usize, line: &DiffLine) -> SideCell {
    SideCell {
        line_number,
        value: line.value.clone(),
        line_type: line.line_type,
    }
}

fn flush_block(
    rows: &mut Vec<SideBySideRow>,
    removed: &mut Vec<SideCell>,
    added: &mut Vec<SideCell>,
) {
    let height = removed.len().max(added.len());
    let mut left = removed.drain(..);
    let mut right = added.drain(..);
    for _ in 0..height {
        rows.push(SideBySideRow {
            left: left.next(),
            right: right.next(),
        });
    }
}
