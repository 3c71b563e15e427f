//! Human-readable summary renderer for snapshot diffs.

use crate::diff::model::{DiffClassification, DiffLineType, SnapshotDiff};

/// Render a Markdown summary of a [`SnapshotDiff`].
///
/// Intended for terminals and review notes. Informational only; the
/// structured report stays the source of truth.
pub fn render_human_summary(diff: &SnapshotDiff) -> String {
    let mut out = String::new();

    out.push_str("## Snapshot Diff\n\n");

    let class_label = match diff.classification {
        DiffClassification::Identical => "Identical",
        DiffClassification::Changed => "Changed",
    };
    out.push_str(&format!("**Classification**: {class_label}\n\n"));

    out.push_str("### Identity\n\n");
    out.push_str(&format!(
        "| | Digest | Lines |\n\
         |---|---|---|\n\
         | Old | `{}` | {} |\n\
         | New | `{}` | {} |\n\n",
        short(&diff.identity.old_digest),
        diff.identity.old_line_count,
        short(&diff.identity.new_digest),
        diff.identity.new_line_count,
    ));

    if diff.classification == DiffClassification::Identical {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str("### Statistics\n\n");
    out.push_str(&format!(
        "- **Unchanged**: {}\n- **Added**: {}\n- **Removed**: {}\n\n",
        diff.stats.common, diff.stats.added, diff.stats.removed
    ));

    out.push_str("### Lines\n\n```diff\n");
    for line in &diff.lines {
        let marker = match line.line_type {
            DiffLineType::Common => "  ",
            DiffLineType::Added => "+ ",
            DiffLineType::Removed => "- ",
        };
        out.push_str(marker);
        out.push_str(&line.value);
        out.push('\n');
    }
    out.push_str("```\n");

    out
}

/// First 12 characters of a digest.
fn short(digest: &str) -> &str {
    let end = digest
        .char_indices()
        .nth(12)
        .map(|(i, _)| i)
        .unwrap_or(digest.len());
    &digest[..end]
}
