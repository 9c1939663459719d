use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English function words and auxiliaries that never become keywords.
///
/// Short entries are kept so the list reads as a plain English stoplist,
/// even though the tokenizer already drops words under four letters.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "that", "with", "have", "this", "from", "your", "you",
    "into", "about", "there", "their", "were", "which", "will", "would", "could",
    "over", "been", "than", "then", "them", "they", "what", "when", "where",
    "how", "why", "here", "also", "such", "some", "more", "most", "much", "many",
    "like", "just", "onto", "upon", "each", "other", "only", "very",
    "these", "those", "because", "between", "within", "without", "under", "above",
    "across", "after", "before", "while", "during", "against", "among", "per",
    "can", "may", "might", "should", "must", "shall", "is", "am", "are", "was",
    "be", "being", "of", "in", "on", "at", "to", "by", "as", "an", "a",
    "it", "its", "we", "our", "us", "he", "she", "him", "her", "his", "hers",
    "do", "does", "did", "done", "not", "no", "nor", "or", "if", "so", "but",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Check if a word is a stopword (case-insensitive).
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word.to_lowercase().as_str())
}
