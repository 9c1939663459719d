//! Sentence lookup and blank substitution for a single keyword.

use regex::{NoExpand, Regex, RegexBuilder};

/// Marker that replaces the answer in the question text.
pub const BLANK: &str = "____";

/// Case-insensitive whole-word matcher for `word`.
fn word_pattern(word: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Find the first sentence containing `word` as a whole word.
///
/// Falls back to the first sentence when none matches, and to an empty
/// string when there are no sentences.
pub fn find_sentence_containing<'a>(sentences: &'a [String], word: &str) -> &'a str {
    let found = word_pattern(word)
        .and_then(|pattern| sentences.iter().find(|s| pattern.is_match(s)));

    found
        .or_else(|| sentences.first())
        .map_or("", String::as_str)
}

/// Replace the first whole-word occurrence of `answer` with [`BLANK`].
///
/// Returns `None` if the sentence does not contain the answer.
pub fn make_cloze(sentence: &str, answer: &str) -> Option<String> {
    let pattern = word_pattern(answer)?;
    if !pattern.is_match(sentence) {
        return None;
    }
    Some(pattern.replacen(sentence, 1, NoExpand(BLANK)).into_owned())
}
