//! Keyword-cloze multiple-choice question generator.
//!
//! Picks salient words from a block of prose, blanks each one out of a
//! sentence that contains it, and offers other salient words from the same
//! text as distractors. Generation is deterministic for a given seed.

pub mod cloze;
pub mod distractors;
pub mod generator;
pub mod input;
pub mod keywords;
pub mod render;
pub mod stopwords;
pub mod tokenizer;

pub use generator::{generate, generate_mcqs, GenerateOptions, Mcq};
