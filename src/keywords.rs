//! Keyword ranking by salience.
//!
//! Salience is plain term frequency with word length as the tie-break:
//!   rank(w) = (count(w) desc, len(w) desc, first appearance asc)
//!
//! Frequent long words tend to be domain terms, which make better blanks
//! than short generic ones.

use indexmap::IndexMap;

use crate::stopwords;
use crate::tokenizer;

/// A candidate keyword with its occurrence count in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// Normalized (lowercase) form
    pub word: String,
    /// Number of occurrences in the text
    pub count: usize,
}

impl Keyword {
    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }
}

/// Count non-stopword tokens and return them sorted by salience.
pub fn keyword_stats(text: &str) -> Vec<Keyword> {
    // Term → count, in order of first appearance
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for token in tokenizer::tokenize(text) {
        let word = tokenizer::normalize(&token);
        if stopwords::is_stopword(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut keywords: Vec<Keyword> = counts
        .into_iter()
        .map(|(word, count)| Keyword { word, count })
        .collect();

    // Stable sort keeps first-appearance order among full ties
    keywords.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.char_len().cmp(&a.char_len()))
    });
    keywords
}

/// Return normalized keywords, each once, most salient first.
pub fn rank_keywords(text: &str) -> Vec<String> {
    keyword_stats(text).into_iter().map(|k| k.word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_ranks_first() {
        let text = "Enzymes speed reactions. Enzymes are proteins. Catalysts help.";
        let ranked = rank_keywords(text);
        assert_eq!(ranked[0], "enzymes");
    }

    #[test]
    fn test_length_breaks_frequency_ties() {
        let ranked = rank_keywords("quick animals clever lazy");
        assert_eq!(ranked, vec!["animals", "clever", "quick", "lazy"]);
    }

    #[test]
    fn test_full_ties_keep_appearance_order() {
        let ranked = rank_keywords("brown jumps quick foxes");
        assert_eq!(ranked, vec!["brown", "jumps", "quick", "foxes"]);
    }

    #[test]
    fn test_case_folded_counts() {
        let stats = keyword_stats("Rust rust RUST cargo");
        assert_eq!(
            stats,
            vec![
                Keyword { word: "rust".to_string(), count: 3 },
                Keyword { word: "cargo".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_stopwords_filtered() {
        let ranked = rank_keywords("There would have been nothing there without them.");
        assert_eq!(ranked, vec!["nothing"]);
    }

    #[test]
    fn test_no_candidates() {
        assert!(rank_keywords("").is_empty());
        assert!(rank_keywords("The cat and the dog sat on a mat.").is_empty());
        assert!(rank_keywords("12345 !!! ...").is_empty());
    }

    #[test]
    fn test_each_keyword_once() {
        let ranked = rank_keywords("Water water WATER. Steam steam. Water.");
        assert_eq!(ranked, vec!["water", "steam"]);
    }
}
