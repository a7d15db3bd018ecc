use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordGenError};
use crate::io::{cache_path, is_newer, read_to_string};
use super::table::TransitionTable;

/// Which of a language's two tables to walk.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
	/// Full letter set and long, compound endings.
	#[default]
	Standard,
	/// Reduced alphabet, consonants followed by plain vowels, short endings.
	Easy,
}

impl Difficulty {
	/// Parses a mode string.
	///
	/// `"easy"` (any case) selects `Easy`, anything else is `Standard`.
	pub fn from_mode(mode: &str) -> Self {
		if mode.trim().eq_ignore_ascii_case("easy") {
			Difficulty::Easy
		} else {
			Difficulty::Standard
		}
	}
}

impl FromStr for Difficulty {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(Self::from_mode(s))
	}
}

impl fmt::Display for Difficulty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Difficulty::Standard => f.write_str("standard"),
			Difficulty::Easy => f.write_str("easy"),
		}
	}
}

/// A language the generator can imitate.
///
/// Each profile owns two fixed tables: `standard` and `easy_mode`. Adding a
/// language means adding a new implementor; consuming code only sees this
/// trait.
pub trait LanguageProfile: Send + Sync + fmt::Debug {
	/// Short code (ex. `"pt"`).
	fn language_code(&self) -> &str;

	/// Display name (ex. `"Portuguese"`).
	fn language_name(&self) -> &str;

	fn standard(&self) -> Arc<TransitionTable>;

	fn easy_mode(&self) -> Arc<TransitionTable>;

	/// Returns the table for a difficulty.
	fn table(&self, difficulty: Difficulty) -> Arc<TransitionTable> {
		match difficulty {
			Difficulty::Standard => self.standard(),
			Difficulty::Easy => self.easy_mode(),
		}
	}

	/// True if `query` names this profile by code or name, ignoring case.
	fn matches(&self, query: &str) -> bool {
		let query = query.trim();
		query.eq_ignore_ascii_case(self.language_code())
			|| query.to_lowercase() == self.language_name().to_lowercase()
	}
}

/// A profile loaded at runtime from a TOML description.
///
/// ```toml
/// code = "it"
/// name = "Italian"
///
/// [standard]
/// endings = ["are", "ino", "etta"]
/// non_initial = []
/// [standard.edges]
/// a = ["b", "c", "l"]
///
/// [easy]
/// endings = ["a", "o"]
/// [easy.edges]
/// a = ["b", "l"]
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CustomProfile {
	code: String,
	name: String,
	standard: Arc<TransitionTable>,
	easy: Arc<TransitionTable>,
}

impl CustomProfile {
	/// Creates a profile from two tables.
	///
	/// # Errors
	/// Returns `InvalidProfile` if the code is blank or either table cannot
	/// start a word.
	pub fn new(code: &str, name: &str, standard: TransitionTable, easy: TransitionTable) -> Result<Self> {
		let profile = Self {
			code: code.to_owned(),
			name: name.to_owned(),
			standard: Arc::new(standard),
			easy: Arc::new(easy),
		}
		.trimmed();
		profile.validate(code)?;
		Ok(profile)
	}

	/// Loads a profile from a TOML file.
	///
	/// - If a binary cache (`.bin` next to the source) exists and is newer
	///   than the source, it is used directly.
	/// - Otherwise the TOML is parsed, validated and the cache is rewritten.
	///
	/// Failing to write the cache is logged and ignored.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let filepath = filepath.as_ref();
		let binary_data_path = cache_path(filepath)?;

		if is_newer(&binary_data_path, filepath) {
			let bytes = std::fs::read(&binary_data_path)?;
			match postcard::from_bytes::<CustomProfile>(&bytes) {
				Ok(profile) => {
					let profile = profile.trimmed();
					log::debug!("loaded profile '{}' from {}", profile.code, binary_data_path.display());
					profile.validate(&filepath.display().to_string())?;
					return Ok(profile);
				}
				Err(e) => log::warn!("ignoring unreadable cache {}: {e}", binary_data_path.display()),
			}
		}

		let profile = toml::from_str::<CustomProfile>(&read_to_string(filepath)?)?.trimmed();
		profile.validate(&filepath.display().to_string())?;
		log::debug!("parsed profile '{}' from {}", profile.code, filepath.display());

		match postcard::to_stdvec(&profile) {
			Ok(bytes) => {
				if let Err(e) = std::fs::write(&binary_data_path, bytes) {
					log::warn!("cannot write cache {}: {e}", binary_data_path.display());
				}
			}
			Err(e) => log::warn!("cannot encode cache for {}: {e}", filepath.display()),
		}

		Ok(profile)
	}

	/// Strips surrounding whitespace from the code and the name.
	fn trimmed(mut self) -> Self {
		self.code = self.code.trim().to_owned();
		self.name = self.name.trim().to_owned();
		self
	}

	fn validate(&self, origin: &str) -> Result<()> {
		let invalid = |reason: &str| WordGenError::InvalidProfile {
			path: origin.to_owned(),
			reason: reason.to_owned(),
		};

		if self.code.is_empty() {
			return Err(invalid("language code is empty"));
		}
		if self.standard.starting_letters().is_empty() {
			return Err(invalid("standard table has no starting letters"));
		}
		if self.easy.starting_letters().is_empty() {
			return Err(invalid("easy table has no starting letters"));
		}
		if self.standard.endings().iter().chain(self.easy.endings()).any(|e| e.is_empty()) {
			return Err(invalid("endings cannot be empty strings"));
		}
		Ok(())
	}
}

impl LanguageProfile for CustomProfile {
	fn language_code(&self) -> &str {
		&self.code
	}

	fn language_name(&self) -> &str {
		&self.name
	}

	fn standard(&self) -> Arc<TransitionTable> {
		Arc::clone(&self.standard)
	}

	fn easy_mode(&self) -> Arc<TransitionTable> {
		Arc::clone(&self.easy)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn difficulty_from_mode() {
		assert_eq!(Difficulty::from_mode("easy"), Difficulty::Easy);
		assert_eq!(Difficulty::from_mode("EaSy"), Difficulty::Easy);
		assert_eq!(Difficulty::from_mode("hard"), Difficulty::Standard);
		assert_eq!(Difficulty::from_mode(""), Difficulty::Standard);
		assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
	}

	#[test]
	fn custom_profile_rejects_unstartable_table() {
		let standard = TransitionTable::from_rows(&[("a", "b")], &["o"]);
		let easy = TransitionTable::default();
		let result = CustomProfile::new("it", "Italian", standard, easy);
		assert!(matches!(result, Err(WordGenError::InvalidProfile { .. })));
	}

	#[test]
	fn custom_profile_matches_code_and_name() {
		let table = TransitionTable::from_rows(&[("a", "b")], &["o"]);
		let profile = CustomProfile::new("it", "Italian", table.clone(), table).unwrap();
		assert!(profile.matches("IT"));
		assert!(profile.matches("italian"));
		assert!(!profile.matches("ita"));
		assert_eq!(profile.table(Difficulty::Easy), profile.easy_mode());
	}

	#[test]
	fn custom_profile_parses_from_toml() {
		let source = r#"
			code = "it"
			name = "Italian"

			[standard]
			endings = ["are", "ino"]
			[standard.edges]
			a = ["b", "c"]
			b = ["a"]

			[easy]
			endings = ["a"]
			non_initial = ["b"]
			[easy.edges]
			a = ["b"]
			b = ["a"]
		"#;
		let profile: CustomProfile = toml::from_str(source).unwrap();
		assert_eq!(profile.language_code(), "it");
		assert_eq!(profile.standard().next_letters('a'), Some(&['b', 'c'][..]));
		assert_eq!(profile.easy_mode().starting_letters(), vec!['a']);
		assert_eq!(profile.easy_mode().endings(), &["a".to_owned()]);
	}
}
