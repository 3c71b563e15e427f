//! Diff engine scenarios and properties.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::join_lines;
use proptest::prelude::*;
use quill_core::diff::{diff, split_lines, DiffLine, DiffLineType, DiffResult};

fn count(result: &DiffResult, line_type: DiffLineType) -> usize {
    result.iter().filter(|l| l.line_type == line_type).count()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_single_line_replacement() {
    assert_eq!(
        diff("a\nb\nc", "a\nx\nc").lines,
        vec![
            DiffLine::common("a"),
            DiffLine::removed("b"),
            DiffLine::added("x"),
            DiffLine::common("c"),
        ]
    );
}

#[test]
fn test_empty_strings_are_one_common_empty_line() {
    assert_eq!(diff("", "").lines, vec![DiffLine::common("")]);
}

#[test]
fn test_chapter_revision() {
    let old = join_lines(&[
        "Chapter One",
        "",
        "Mira opened the door.",
        "The hall was dark.",
        "She waited.",
    ]);
    let new = join_lines(&[
        "Chapter One",
        "",
        "Mira opened the heavy door.",
        "The hall was dark.",
        "Somewhere, a clock ticked.",
        "She waited.",
    ]);

    let result = diff(&old, &new);

    assert_eq!(
        result.lines,
        vec![
            DiffLine::common("Chapter One"),
            DiffLine::common(""),
            DiffLine::removed("Mira opened the door."),
            DiffLine::added("Mira opened the heavy door."),
            DiffLine::common("The hall was dark."),
            DiffLine::added("Somewhere, a clock ticked."),
            DiffLine::common("She waited."),
        ]
    );
}

#[test]
fn test_trailing_newline_is_a_line() {
    let result = diff("a\nb\n", "a\nb");
    assert_eq!(
        result.lines,
        vec![
            DiffLine::common("a"),
            DiffLine::common("b"),
            DiffLine::removed(""),
        ]
    );
}

#[test]
fn test_carriage_returns_are_part_of_the_line() {
    let result = diff("a\r\nb", "a\nb");
    assert_eq!(
        result.lines,
        vec![
            DiffLine::removed("a\r"),
            DiffLine::added("a"),
            DiffLine::common("b"),
        ]
    );
}

#[test]
fn test_no_common_lines_is_not_an_error() {
    let result = diff("alpha\nbeta", "gamma");
    assert_eq!(count(&result, DiffLineType::Common), 0);
    assert_eq!(
        result.lines,
        vec![
            DiffLine::removed("alpha"),
            DiffLine::removed("beta"),
            DiffLine::added("gamma"),
        ]
    );
}

#[test]
fn test_repeated_lines_align_optimally() {
    // LCS is "a b a" (3 lines), not just 2
    let result = diff("a\nb\na\nc", "b\na\nb\na");
    assert_eq!(count(&result, DiffLineType::Common), 3);
}

#[test]
fn test_concurrent_calls_do_not_interfere() {
    let inputs: Vec<(String, String)> = (0..8)
        .map(|n| {
            let old: Vec<String> = (0..40).map(|i| format!("line {}", i)).collect();
            let new: Vec<String> = (0..40)
                .filter(|i| i % (n + 2) != 0)
                .map(|i| format!("line {}", i))
                .collect();
            (old.join("\n"), new.join("\n"))
        })
        .collect();

    let sequential: Vec<DiffResult> = inputs.iter().map(|(a, b)| diff(a, b)).collect();

    let parallel: Vec<DiffResult> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(a, b)| s.spawn(move || diff(a, b)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

/// Short texts over a tiny alphabet so that common lines are frequent.
fn small_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "", "d e"]), 0..12)
        .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn prop_reconstructs_both_inputs(old in small_text(), new in small_text()) {
        let result = diff(&old, &new);
        prop_assert_eq!(result.old_lines(), split_lines(&old));
        prop_assert_eq!(result.new_lines(), split_lines(&new));
    }

    #[test]
    fn prop_identical_inputs_are_all_common(text in small_text()) {
        let result = diff(&text, &text);
        prop_assert!(result.is_unchanged());
        let values: Vec<&str> = result.iter().map(|l| l.value.as_str()).collect();
        prop_assert_eq!(values, split_lines(&text));
    }

    #[test]
    fn prop_swapping_inputs_mirrors_counts(a in small_text(), b in small_text()) {
        let forward = diff(&a, &b).stats();
        let backward = diff(&b, &a).stats();
        prop_assert_eq!(forward.common, backward.common);
        prop_assert_eq!(forward.added, backward.removed);
        prop_assert_eq!(forward.removed, backward.added);
    }

    #[test]
    fn prop_length_is_common_plus_edits(old in small_text(), new in small_text()) {
        let result = diff(&old, &new);
        let stats = result.stats();
        prop_assert_eq!(stats.common + stats.removed, split_lines(&old).len());
        prop_assert_eq!(stats.common + stats.added, split_lines(&new).len());
        prop_assert_eq!(result.len(), stats.common + stats.added + stats.removed);
    }

    #[test]
    fn prop_arbitrary_text_never_panics(old in ".{0,64}", new in ".{0,64}") {
        let result = diff(&old, &new);
        prop_assert_eq!(result.old_lines(), split_lines(&old));
    }
}
