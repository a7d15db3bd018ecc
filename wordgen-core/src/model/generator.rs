use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::io;
use super::generation_input::GenerationInput;
use super::language::{Difficulty, LanguageProfile};
use super::random::{RandomSource, RngSource, ThreadSource};
use super::registry::ProfileRegistry;
use super::table::TransitionTable;
use super::word_generator::WordGenerator;

/// High-level entry point: a language, a difficulty and a random source.
///
/// # Responsibilities
/// - Resolve the language profile (unknown languages fall back to Portuguese)
/// - Generate single words or batches from the selected table
/// - Save batches to disk, reporting failure as `false`
pub struct Generator {
	profile: Arc<dyn LanguageProfile>,
	difficulty: Difficulty,
	words: WordGenerator,
	source: Box<dyn RandomSource + Send>,
}

impl Generator {
	/// Creates a generator for a built-in language.
	///
	/// `language` is a code (`"pt"`, `"es"`) or a name (`"spanish"`), in any
	/// case. An unrecognized language silently selects Portuguese.
	pub fn new(language: &str, difficulty: Difficulty) -> Self {
		Self::with_registry(&ProfileRegistry::builtin(), language, difficulty)
	}

	/// Creates a generator resolving `language` against `registry`.
	pub fn with_registry(registry: &ProfileRegistry, language: &str, difficulty: Difficulty) -> Self {
		let profile = registry.resolve(language);
		let words = WordGenerator::new(profile.table(difficulty));
		Self {
			profile,
			difficulty,
			words,
			source: Box::new(ThreadSource),
		}
	}

	/// Creates a generator from a whole `GenerationInput`.
	pub fn from_input(registry: &ProfileRegistry, input: &GenerationInput) -> Self {
		let generator = Self::with_registry(registry, &input.language, input.difficulty);
		match input.seed {
			Some(seed) => generator.with_seed(seed),
			None => generator,
		}
	}

	/// Standard table for `language`.
	pub fn standard(language: &str) -> Self {
		Self::new(language, Difficulty::Standard)
	}

	/// Easy table for `language`.
	pub fn easy_mode(language: &str) -> Self {
		Self::new(language, Difficulty::Easy)
	}

	/// Replaces the random source (ex. a scripted `SequenceSource`).
	pub fn with_source<S: RandomSource + Send + 'static>(mut self, source: S) -> Self {
		self.source = Box::new(source);
		self
	}

	/// Uses a seeded generator: same seed, same words.
	pub fn with_seed(self, seed: u64) -> Self {
		self.with_source(RngSource::seeded(seed))
	}

	pub fn language_code(&self) -> &str {
		self.profile.language_code()
	}

	pub fn language_name(&self) -> &str {
		self.profile.language_name()
	}

	pub fn difficulty(&self) -> Difficulty {
		self.difficulty
	}

	/// Returns the table in use.
	pub fn table(&self) -> &Arc<TransitionTable> {
		self.words.table()
	}

	/// Generates a single word of at most `max_length` letters.
	pub fn generate_word(&mut self, max_length: usize) -> Result<String> {
		self.words.generate_word_with(max_length, &mut self.source)
	}

	/// Generates `count` words of at most `max_length` letters each.
	pub fn generate_words(&mut self, count: usize, max_length: usize) -> Result<Vec<String>> {
		self.words.generate_words_with(count, max_length, &mut self.source)
	}

	/// Generates `count` words on all CPUs.
	///
	/// Worker threads use their own thread-local generators, so the
	/// configured source (and seed) is not used.
	pub fn generate_words_parallel(&self, count: usize, max_length: usize) -> Result<Vec<String>> {
		self.words.generate_words_parallel(count, max_length)
	}

	/// Saves words to `filepath`, one per line, with a trailing line terminator.
	///
	/// Returns false (and logs the cause) if the file cannot be written.
	pub fn save_to_file<S: AsRef<str>, P: AsRef<Path>>(&self, words: &[S], filepath: P) -> bool {
		let filepath = filepath.as_ref();
		match io::write_lines(filepath, words) {
			Ok(()) => {
				log::debug!("saved {} words to {}", words.len(), filepath.display());
				true
			}
			Err(e) => {
				log::error!("cannot write {}: {e}", filepath.display());
				false
			}
		}
	}
}

impl Default for Generator {
	fn default() -> Self {
		Self::standard(super::generation_input::DEFAULT_LANGUAGE)
	}
}

impl std::fmt::Debug for Generator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Generator")
			.field("language", &self.profile.language_code())
			.field("difficulty", &self.difficulty)
			.finish_non_exhaustive()
	}
}
