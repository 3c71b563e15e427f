/// Build a text of `total` whitespace-separated tokens drawn round-robin
/// from `unique` distinct words.
///
/// Every word is used at least once when `unique <= total`.
#[allow(dead_code)]
pub fn word_sample(total: usize, unique: usize) -> String {
    assert!(unique >= 1 && unique <= total, "need 1 <= unique <= total");
    (0..total)
        .map(|i| format!("word{}", i % unique))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join lines with `'\n'` the way the diff engine splits them.
#[allow(dead_code)]
pub fn join_lines(lines: &[&str]) -> String {
    lines.join("\n")
}
