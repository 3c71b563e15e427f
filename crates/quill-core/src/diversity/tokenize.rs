//! Markup stripping and word tokenization.

use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Replace every `<...>` tag with a single space.
///
/// The space keeps words on either side of a tag apart
/// (`"end</p><p>start"` is two words, not one).
pub fn strip_markup(text: &str) -> String {
    tag_pattern().replace_all(text, " ").into_owned()
}

/// Lower-cased Unicode word tokens of `text`, markup removed.
///
/// A token is a maximal run of Unicode word characters (letters, marks,
/// digits, connector punctuation).
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = strip_markup(text).to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
