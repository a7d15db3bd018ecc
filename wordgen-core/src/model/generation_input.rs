use super::language::Difficulty;

/// Default number of words per batch.
pub const DEFAULT_COUNT: usize = 10;

/// Default maximum word length.
pub const DEFAULT_MAX_LENGTH: usize = 6;

/// Default language, also used for unknown languages.
pub const DEFAULT_LANGUAGE: &str = "portuguese";

/// Input parameters for a batch of generated words.
///
/// # Responsibilities
/// - Track what to generate (`count`, `max_length`)
/// - Track which table to use (`language`, `difficulty`)
/// - Track an optional seed for reproducible batches
///
/// # Invariants
/// - `max_length` is always >= 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput {
	/// Number of words to generate.
	pub count: usize,

	/// Maximum length of each word, in letters.
	max_length: usize,

	/// Language code or name, resolved case-insensitively.
	pub language: String,

	pub difficulty: Difficulty,

	/// Seed for a reproducible run, `None` uses the thread-local generator.
	pub seed: Option<u64>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			count: DEFAULT_COUNT,
			max_length: DEFAULT_MAX_LENGTH,
			language: DEFAULT_LANGUAGE.to_owned(),
			difficulty: Difficulty::Standard,
			seed: None,
		}
	}
}

impl GenerationInput {
	/// Returns the maximum word length.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Sets the maximum word length.
	///
	/// # Errors
	/// Returns an error if `max_length` is 0.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<(), String> {
		if max_length == 0 {
			return Err("Maximum length must be at least 1".to_owned());
		}
		self.max_length = max_length;
		Ok(())
	}

	/// Sets the count from user text.
	///
	/// Anything that is not a positive integer keeps the current value.
	/// Returns true if the value was applied.
	pub fn apply_count(&mut self, text: &str) -> bool {
		match parse_positive(text) {
			Some(count) => {
				self.count = count;
				true
			}
			None => false,
		}
	}

	/// Sets the maximum length from user text, same rules as `apply_count`.
	pub fn apply_max_length(&mut self, text: &str) -> bool {
		match parse_positive(text) {
			Some(max_length) => self.set_max_length(max_length).is_ok(),
			None => false,
		}
	}
}

/// Parses a strictly positive integer, ignoring surrounding whitespace.
pub fn parse_positive(text: &str) -> Option<usize> {
	text.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
