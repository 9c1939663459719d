//! Sentence and word segmentation for cloze generation.
//!
//! Sentences end at `.`, `!` or `?` followed by whitespace. Words are
//! alphabetic runs (hyphens allowed after the first letter) of at least
//! four characters; everything else is dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence regex"));

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z\-]{3,}").expect("valid word regex"));

/// Split text into trimmed, non-empty sentences in order of appearance.
///
/// The boundary heuristic is naive: "e.g. this" or "3. 14" split too.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Keep the terminator, drop the whitespace run after it
        push_trimmed(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, part: &str) {
    let part = part.trim();
    if !part.is_empty() {
        sentences.push(part.to_string());
    }
}

/// Extract word tokens with their original casing.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Lowercase a token for counting and matching.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}
