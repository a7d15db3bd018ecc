use std::io;

/// Errors raised by table construction, profile loading and word generation.
///
/// An unrecognized language is deliberately absent: lookups fall back to the
/// default profile instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum WordGenError {
	/// The table has no letter that may start a word.
	#[error("transition table has no starting letters")]
	NoStartingLetters,

	/// A word cannot be shorter than one letter.
	#[error("maximum word length must be at least 1, got {0}")]
	InvalidLength(usize),

	/// A profile with the same language code is already registered.
	#[error("profile '{0}' is already registered")]
	DuplicateProfile(String),

	/// A profile file parsed but failed validation.
	#[error("invalid profile {path}: {reason}")]
	InvalidProfile { path: String, reason: String },

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error("failed to parse profile: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("profile cache error: {0}")]
	Postcard(#[from] postcard::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WordGenError>;
