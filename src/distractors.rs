//! Distractor selection and option shuffling.
//!
//! Wrong answers come from the same keyword pool as the answers. Words
//! whose length is close to the correct answer are preferred so that the
//! blank's width gives nothing away. A larger window than needed is
//! gathered and shuffled before truncation so the seed has some effect on
//! which distractors appear.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::tokenizer;

/// How many candidates to gather per distractor before shuffling.
const OVERSAMPLE: usize = 3;

/// Select up to `k` distractors for `correct` from the ranked keyword pool.
///
/// Returns fewer than `k` words when the pool runs short.
pub fn select_distractors<R: Rng + ?Sized>(
    pool: &[String],
    correct: &str,
    k: usize,
    rng: &mut R,
) -> Vec<String> {
    if k == 0 {
        return vec![];
    }

    let correct = tokenizer::normalize(correct);
    let correct_len = correct.chars().count();

    let mut candidates: Vec<&String> = pool.iter().filter(|w| **w != correct).collect();
    // Stable: equal distances keep their salience order
    candidates.sort_by_key(|w| w.chars().count().abs_diff(correct_len));

    let window = (k * OVERSAMPLE).max(k);
    let mut unique: Vec<String> = Vec::with_capacity(window);
    for word in candidates {
        let word = tokenizer::normalize(word);
        if word == correct || unique.contains(&word) {
            continue;
        }
        unique.push(word);
        if unique.len() >= window {
            break;
        }
    }

    unique.shuffle(rng);
    unique.truncate(k);
    unique
}

/// Combine the answer with its distractors and shuffle them.
///
/// Returns the options and the index of the correct answer within them.
pub fn build_options<R: Rng + ?Sized>(
    correct: &str,
    distractors: Vec<String>,
    rng: &mut R,
) -> (Vec<String>, usize) {
    let correct = tokenizer::normalize(correct);

    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct.clone());
    options.extend(distractors);
    options.shuffle(rng);

    // The answer was pushed above, so it is always found
    let answer_index = options.iter().position(|o| *o == correct).unwrap_or(0);
    (options, answer_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_excludes_correct_answer() {
        let pool = pool(&["animals", "clever", "quick", "brown"]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let picked = select_distractors(&pool, "animals", 3, &mut rng);
        assert_eq!(picked.len(), 3);
        assert!(!picked.contains(&"animals".to_string()));
    }

    #[test]
    fn test_prefers_close_lengths() {
        // With k=1 the window is 3: the three closest lengths to "animals" (7)
        let pool = pool(&["animals", "cat", "clever", "quick", "brown", "photosynthesis"]);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let picked = select_distractors(&pool, "animals", 1, &mut rng);
            assert_eq!(picked.len(), 1);
            assert!(
                ["clever", "quick", "brown"].contains(&picked[0].as_str()),
                "unexpected distractor {}",
                picked[0]
            );
        }
    }

    #[test]
    fn test_deduplicates_case_variants() {
        let pool = pool(&["Water", "water", "WATER", "steam"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut picked = select_distractors(&pool, "steam", 3, &mut rng);
        picked.sort();
        assert_eq!(picked, vec!["water"]);
    }

    #[test]
    fn test_short_pool() {
        let pool = pool(&["alpha", "beta"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let picked = select_distractors(&pool, "alpha", 3, &mut rng);
        assert_eq!(picked, vec!["beta"]);
    }

    #[test]
    fn test_zero_requested() {
        let pool = pool(&["alpha", "beta"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(select_distractors(&pool, "alpha", 0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_picks() {
        let pool = pool(&[
            "mitochondria", "ribosome", "nucleus", "membrane", "cytoplasm", "vacuole",
            "chloroplast", "lysosome",
        ]);
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            select_distractors(&pool, "nucleus", 3, &mut a),
            select_distractors(&pool, "nucleus", 3, &mut b)
        );
    }

    #[test]
    fn test_build_options_tracks_answer() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (options, index) =
                build_options("Animals", pool(&["clever", "quick", "brown"]), &mut rng);
            assert_eq!(options.len(), 4);
            assert_eq!(options[index], "animals");
        }
    }

    #[test]
    fn test_build_options_without_distractors() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (options, index) = build_options("solo", vec![], &mut rng);
        assert_eq!(options, vec!["solo"]);
        assert_eq!(index, 0);
    }
}
