//! Output formatting for generated questions.

use anyhow::{Context, Result};
use std::fmt::Write;

use crate::generator::Mcq;

/// Label for an option index: 0 → 'A', 1 → 'B', ...
///
/// Past 'Z' the labels keep counting up through code points ('[', '\\', ...).
/// Indices that land on no valid `char` are labelled '?'.
pub fn option_label(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_add(u32::from('A')))
        .and_then(char::from_u32)
        .unwrap_or('?')
}

/// Serialize questions as a pretty-printed JSON array.
pub fn render_json(mcqs: &[Mcq]) -> Result<String> {
    serde_json::to_string_pretty(mcqs).context("Failed to serialize questions")
}

/// Render questions as numbered, lettered plain text.
pub fn render_text(mcqs: &[Mcq]) -> String {
    let mut out = String::new();

    for (i, mcq) in mcqs.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = writeln!(out, "Q{}. {}", i + 1, mcq.question);
        for (j, option) in mcq.options.iter().enumerate() {
            let _ = writeln!(out, "  {}) {}", option_label(j), option);
        }
        let _ = writeln!(out, "  Answer: {}", option_label(mcq.answer_index));
        out.push('\n');
    }

    out
}
