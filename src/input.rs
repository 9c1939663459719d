use anyhow::{Context, Result};
use log::info;
use std::io::Read;
use std::path::Path;

/// Resolves the source text for generation.
///
/// A non-empty inline `text` wins, then `input_file`, then standard input.
pub fn read_input(text: Option<&str>, input_file: Option<&Path>) -> Result<String> {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        info!("Using inline text ({} characters)", text.len());
        return Ok(text.to_string());
    }

    if let Some(path) = input_file {
        info!("Reading input from: {}", path.display());
        return read_file(path);
    }

    info!("Reading input from stdin");
    read_stdin()
}

/// Reads a text or PDF file.
///
/// Files with a `.pdf` extension go through PDF text extraction; anything
/// else is read as UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    if is_pdf(path) {
        return extract_pdf_text(path);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Reads all of standard input as UTF-8.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Extracts all text content from a PDF file.
///
/// Returns the text with lines trimmed and blank lines removed.
fn extract_pdf_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let text = pdf_extract::extract_text_from_mem(&bytes)
        .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))?;

    let cleaned = normalize_lines(&text);
    if cleaned.is_empty() {
        anyhow::bail!(
            "No text could be extracted from the PDF. It may be image-based or encrypted: {}",
            path.display()
        );
    }

    Ok(cleaned)
}

/// Collapse extracted text: trim each line and drop the empty ones.
fn normalize_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join("\n")
}
