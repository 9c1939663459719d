use std::collections::HashSet;

use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cloze;
use crate::distractors;
use crate::keywords;
use crate::tokenizer;

/// Minimum number of options per question: the answer plus one distractor.
pub const MIN_CHOICES: usize = 2;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    /// Source sentence with the answer replaced by `____`
    pub question: String,
    /// Lowercase options, answer included
    pub options: Vec<String>,
    /// Index of the correct answer in `options`
    pub answer_index: usize,
}

impl Mcq {
    /// The correct option, if `answer_index` is in range.
    pub fn answer(&self) -> Option<&str> {
        self.options.get(self.answer_index).map(String::as_str)
    }
}

/// Parameters for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub num_questions: usize,
    pub num_choices: usize,
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            num_questions: 5,
            num_choices: 4,
            seed: 42,
        }
    }
}

/// Generates cloze questions from prose.
///
/// Pipeline: Split sentences → Rank keywords → Pick sentence per keyword →
/// Blank it out → Select distractors → Shuffle options.
///
/// The same text and options always give the same questions.
pub fn generate(text: &str, options: &GenerateOptions) -> Vec<Mcq> {
    if text.trim().is_empty() || options.num_questions == 0 {
        return vec![];
    }

    let num_choices = options.num_choices.max(MIN_CHOICES);
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);

    let sentences = tokenizer::split_sentences(text);
    let keywords = keywords::rank_keywords(text);
    debug!(
        "Found {} sentences and {} keyword candidates",
        sentences.len(),
        keywords.len()
    );
    if keywords.is_empty() {
        return vec![];
    }

    // Pick the top keywords, at most one question per (sentence, keyword)
    let mut selected: Vec<(String, &str)> = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for keyword in &keywords {
        let sentence = cloze::find_sentence_containing(&sentences, keyword);
        if !seen.insert((sentence, keyword.as_str())) {
            trace!("Skipping '{}': sentence already used for it", keyword);
            continue;
        }
        let Some(question) = cloze::make_cloze(sentence, keyword) else {
            trace!("Skipping '{}': no whole-word occurrence to blank", keyword);
            continue;
        };
        selected.push((question, keyword.as_str()));
        if selected.len() >= options.num_questions {
            break;
        }
    }
    debug!("Selected {} keywords for questions", selected.len());

    selected
        .into_iter()
        .map(|(question, answer)| {
            let picked =
                distractors::select_distractors(&keywords, answer, num_choices - 1, &mut rng);
            let (options, answer_index) = distractors::build_options(answer, picked, &mut rng);
            Mcq {
                question,
                options,
                answer_index,
            }
        })
        .collect()
}

/// Convenience wrapper around [`generate`] taking the parameters directly.
pub fn generate_mcqs(text: &str, num_questions: usize, num_choices: usize, seed: u64) -> Vec<Mcq> {
    generate(
        text,
        &GenerateOptions {
            num_questions,
            num_choices,
            seed,
        },
    )
}
