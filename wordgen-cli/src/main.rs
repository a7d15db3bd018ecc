use std::io::{self, BufWriter, Write};

use clap::Parser;

use wordgen_core::model::generation_input::{DEFAULT_LANGUAGE, GenerationInput};
use wordgen_core::model::registry::ProfileRegistry;
use wordgen_core::{Difficulty, Generator};

/// Generate pronounceable pseudo-words.
///
/// Invalid `count` or `length` values fall back to their defaults.
#[derive(Parser, Debug)]
#[command(name = "wordgen", version, about)]
struct Args {
    /// Number of words to generate (default 10)
    #[arg(allow_negative_numbers = true)]
    count: Option<String>,

    /// Maximum word length (default 6)
    #[arg(allow_negative_numbers = true)]
    length: Option<String>,

    /// Write the words to this file instead of stdout
    output: Option<String>,

    /// "easy" for the easy table, anything else for the standard one
    mode: Option<String>,

    /// Language code or name, unknown languages use Portuguese
    #[arg(short, long, env = "WORDGEN_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible output
    #[arg(long, env = "WORDGEN_SEED")]
    seed: Option<u64>,

    /// Directory of extra .toml language profiles
    #[arg(long, env = "WORDGEN_PROFILES")]
    profiles: Option<String>,
}

impl Args {
    fn generation_input(&self) -> GenerationInput {
        let mut input = GenerationInput::default();
        if let Some(count) = &self.count {
            if !input.apply_count(count) {
                log::warn!("invalid count '{count}', using {}", input.count);
            }
        }
        if let Some(length) = &self.length {
            if !input.apply_max_length(length) {
                log::warn!("invalid length '{length}', using {}", input.max_length());
            }
        }
        input.language = self.language.clone();
        input.difficulty = self.mode.as_deref().map(Difficulty::from_mode).unwrap_or_default();
        input.seed = self.seed;
        input
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let input = args.generation_input();

    let mut registry = ProfileRegistry::builtin();
    if let Some(dir) = &args.profiles {
        registry.load_dir(dir)?;
    }

    let mut generator = Generator::from_input(&registry, &input);
    log::info!(
        "generating {} words of at most {} letters ({}, {})",
        input.count,
        input.max_length(),
        generator.language_name(),
        generator.difficulty()
    );
    let words = generator.generate_words(input.count, input.max_length())?;

    match &args.output {
        Some(path) => {
            if generator.save_to_file(&words, path) {
                println!("Successfully wrote {} words to {}", words.len(), path);
            } else {
                eprintln!("Error writing to file: {path}");
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for word in &words {
                writeln!(out, "{word}")?;
            }
            out.flush()?;
        }
    }

    Ok(())
}
