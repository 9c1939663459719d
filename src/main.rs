use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mcqgen::{input, render, GenerateOptions};

/// mcqgen: generate multiple-choice questions from text using keyword cloze.
///
/// Picks salient words, blanks them out of the sentence they appear in,
/// and offers other words from the same text as wrong answers.
/// Runs fully offline. The same seed always gives the same questions.
#[derive(Parser)]
#[command(name = "mcqgen")]
#[command(version = "0.1.0")]
#[command(about = "Generate MCQs from input text using simple keyword cloze", long_about = None)]
struct Cli {
    /// Inline text to generate questions from
    #[arg(long)]
    text: Option<String>,

    /// Path to a text or PDF file (stdin is read when neither is given)
    #[arg(long, value_name = "FILE_PATH")]
    input_file: Option<PathBuf>,

    /// Number of questions
    #[arg(long, env = "MCQGEN_NUM", default_value_t = 5)]
    num: usize,

    /// Number of choices per question (at least 2)
    #[arg(long, env = "MCQGEN_CHOICES", default_value_t = 4)]
    choices: usize,

    /// Random seed
    #[arg(long, env = "MCQGEN_SEED", default_value_t = 42)]
    seed: u64,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let text = input::read_input(cli.text.as_deref(), cli.input_file.as_deref())?;

    let options = GenerateOptions {
        num_questions: cli.num,
        num_choices: cli.choices,
        seed: cli.seed,
    };
    let mcqs = mcqgen::generate(&text, &options);
    log::info!("Generated {} questions", mcqs.len());

    if cli.json {
        println!("{}", render::render_json(&mcqs)?);
    } else {
        print!("{}", render::render_text(&mcqs));
    }

    Ok(())
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
