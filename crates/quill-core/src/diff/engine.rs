//! Line diff computation engine.
//!
//! [`diff`] aligns two texts line by line using a longest-common-subsequence
//! table. The alignment is LCS-optimal, so the number of common lines is the
//! maximum possible, and it never fails: every pair of strings, empty ones
//! included, has a well-defined result.

use crate::diff::model::{DiffLine, DiffResult};

/// Split text into lines on `'\n'`.
///
/// Empty lines are kept, including the trailing one produced by text that
/// ends in a newline. The empty string is a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Suffix LCS lengths, `(n + 1) x (m + 1)`, stored row-major in one buffer.
///
/// `get(i, j)` is the LCS length of `old[i..]` and `new[j..]`; row `n` and
/// column `m` are zero.
struct LcsTable {
    cells: Vec<u32>,
    width: usize,
}

impl LcsTable {
    fn build(old: &[&str], new: &[&str]) -> Self {
        let width = new.len() + 1;
        let mut cells = vec![0u32; (old.len() + 1) * width];

        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                cells[i * width + j] = if old[i] == new[j] {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        Self { cells, width }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Compute the line alignment of `old_text` against `new_text`.
///
/// Walks the LCS table from the top-left corner. On a mismatch where
/// dropping the old line keeps at least as long a common subsequence as
/// dropping the new one, the old line is emitted as removed first; adjacent
/// edits therefore always read removed-then-added.
///
/// ```
/// use quill_core::diff::{diff, DiffLine};
///
/// let result = diff("a\nb\nc", "a\nx\nc");
/// assert_eq!(
///     result.lines,
///     vec![
///         DiffLine::common("a"),
///         DiffLine::removed("b"),
///         DiffLine::added("x"),
///         DiffLine::common("c"),
///     ]
/// );
/// ```
pub fn diff(old_text: &str, new_text: &str) -> DiffResult {
    let old = split_lines(old_text);
    let new = split_lines(new_text);
    let table = LcsTable::build(&old, &new);

    let mut lines = Vec::with_capacity(old.len().max(new.len()));
    let (mut i, mut j) = (0, 0);

    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            lines.push(DiffLine::common(old[i]));
            i += 1;
            j += 1;
        } else if table.get(i + 1, j) >= table.get(i, j + 1) {
            lines.push(DiffLine::removed(old[i]));
            i += 1;
        } else {
            lines.push(DiffLine::added(new[j]));
            j += 1;
        }
    }

    lines.extend(old[i..].iter().map(|l| DiffLine::removed(*l)));
    lines.extend(new[j..].iter().map(|l| DiffLine::added(*l)));

    tracing::trace!(
        old_lines = old.len(),
        new_lines = new.len(),
        lcs_len = table.get(0, 0),
        "line diff computed"
    );

    DiffResult::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::DiffLineType;

    fn types(result: &DiffResult) -> Vec<DiffLineType> {
        result.iter().map(|l| l.line_type).collect()
    }

    #[test]
    fn test_split_lines_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn test_lcs_table_corner_is_lcs_length() {
        let old = ["a", "b", "c", "d"];
        let new = ["b", "d", "e"];
        let table = LcsTable::build(&old, &new);
        assert_eq!(table.get(0, 0), 2);
        assert_eq!(table.get(old.len(), 0), 0);
        assert_eq!(table.get(0, new.len()), 0);
    }

    #[test]
    fn test_replacement_in_middle() {
        let result = diff("a\nb\nc", "a\nx\nc");
        assert_eq!(
            result.lines,
            vec![
                DiffLine::common("a"),
                DiffLine::removed("b"),
                DiffLine::added("x"),
                DiffLine::common("c"),
            ]
        );
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(diff("", "").lines, vec![DiffLine::common("")]);
    }

    #[test]
    fn test_empty_against_text() {
        let result = diff("", "one\ntwo");
        assert_eq!(
            result.lines,
            vec![
                DiffLine::removed(""),
                DiffLine::added("one"),
                DiffLine::added("two"),
            ]
        );
    }

    #[test]
    fn test_disjoint_texts_are_removed_then_added() {
        let result = diff("a\nb", "x\ny");
        assert_eq!(
            types(&result),
            vec![
                DiffLineType::Removed,
                DiffLineType::Removed,
                DiffLineType::Added,
                DiffLineType::Added,
            ]
        );
        assert_eq!(result.old_lines(), vec!["a", "b"]);
        assert_eq!(result.new_lines(), vec!["x", "y"]);
    }

    #[test]
    fn test_tie_break_prefers_removed() {
        // Two equally long alignments exist; the old "x" is dropped first.
        let result = diff("x\ny", "y\nx");
        assert_eq!(
            result.lines,
            vec![
                DiffLine::removed("x"),
                DiffLine::common("y"),
                DiffLine::added("x"),
            ]
        );
    }

    #[test]
    fn test_appended_trailing_newline() {
        let result = diff("a", "a\n");
        assert_eq!(
            result.lines,
            vec![DiffLine::common("a"), DiffLine::added("")]
        );
    }

    #[test]
    fn test_insertion_keeps_surrounding_lines_common() {
        let result = diff("one\nthree", "one\ntwo\nthree");
        assert_eq!(
            result.lines,
            vec![
                DiffLine::common("one"),
                DiffLine::added("two"),
                DiffLine::common("three"),
            ]
        );
    }

    #[test]
    fn test_identical_texts_are_all_common() {
        let text = "It was a dark night.\n\nThe rain fell.\n";
        let result = diff(text, text);
        assert!(result.is_unchanged());
        assert_eq!(result.len(), split_lines(text).len());
    }
}
