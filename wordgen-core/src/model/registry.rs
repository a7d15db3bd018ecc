use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, WordGenError};
use crate::io;
use super::language::{CustomProfile, LanguageProfile};
use super::languages::{Portuguese, Spanish};

/// Set of language profiles addressable by code or name.
///
/// # Responsibilities
/// - Hold the built-in profiles and any registered at runtime
/// - Resolve a user supplied language, case-insensitively
/// - Fall back to the default profile (Portuguese) for unknown languages
///
/// # Invariants
/// - Language codes are unique (case-insensitive)
/// - The default profile is always present
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
	profiles: Vec<Arc<dyn LanguageProfile>>,
	default: Arc<dyn LanguageProfile>,
}

impl ProfileRegistry {
	/// Creates a registry holding the built-in languages.
	pub fn builtin() -> Self {
		let default: Arc<dyn LanguageProfile> = Arc::new(Portuguese);
		Self {
			profiles: vec![Arc::clone(&default), Arc::new(Spanish)],
			default,
		}
	}

	/// Registers a new profile.
	///
	/// # Errors
	/// Returns `DuplicateProfile` if a profile with the same code exists.
	pub fn register(&mut self, profile: Arc<dyn LanguageProfile>) -> Result<()> {
		let code = profile.language_code();
		if self.contains_code(code) {
			return Err(WordGenError::DuplicateProfile(code.to_owned()));
		}
		log::debug!("registered language '{}' ({})", code, profile.language_name());
		self.profiles.push(profile);
		Ok(())
	}

	/// Loads and registers every `.toml` profile in a directory.
	///
	/// # Parameters
	/// - `dirpath`: Directory containing profile files.
	///   `"."` and `"./"` resolve to the working directory.
	///
	/// # Errors
	/// - The path is not a directory.
	/// - A profile fails to load or duplicates a registered code.
	///   The registry is left untouched in that case.
	///
	/// # Notes
	/// Only files directly in the directory are loaded (subdirectories are
	/// ignored). Returns the number of profiles registered.
	pub fn load_dir<P: AsRef<Path>>(&mut self, dirpath: P) -> Result<usize> {
		let folder = io::profile_dir(dirpath.as_ref());
		if !folder.is_dir() {
			return Err(WordGenError::Io(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				format!("Expected a directory, got: {}", folder.display()),
			)));
		}

		// Nothing is registered unless every file loads and every code is new
		let mut loaded: Vec<Arc<dyn LanguageProfile>> = Vec::new();
		for file in io::profile_files(&folder)? {
			let profile = CustomProfile::load(&file)?;
			let code = profile.language_code();
			if self.contains_code(code) || loaded.iter().any(|p| p.language_code().eq_ignore_ascii_case(code)) {
				return Err(WordGenError::DuplicateProfile(code.to_owned()));
			}
			loaded.push(Arc::new(profile));
		}

		let count = loaded.len();
		for profile in loaded {
			log::debug!("registered language '{}' ({})", profile.language_code(), profile.language_name());
			self.profiles.push(profile);
		}
		Ok(count)
	}

	fn contains_code(&self, code: &str) -> bool {
		self.profiles.iter().any(|p| p.language_code().eq_ignore_ascii_case(code))
	}

	/// Finds a profile by code or name, ignoring case.
	pub fn find(&self, query: &str) -> Option<Arc<dyn LanguageProfile>> {
		self.profiles.iter().find(|p| p.matches(query)).cloned()
	}

	/// Finds a profile, or returns the default one.
	///
	/// An unknown language is not an error: generation silently uses the
	/// default profile.
	pub fn resolve(&self, query: &str) -> Arc<dyn LanguageProfile> {
		self.find(query).unwrap_or_else(|| {
			log::debug!(
				"unknown language '{}', falling back to {}",
				query,
				self.default.language_name()
			);
			Arc::clone(&self.default)
		})
	}

	/// Returns the fallback profile.
	pub fn default_profile(&self) -> Arc<dyn LanguageProfile> {
		Arc::clone(&self.default)
	}

	/// Returns the profiles in registration order.
	pub fn profiles(&self) -> &[Arc<dyn LanguageProfile>] {
		&self.profiles
	}

	/// Returns the language codes in registration order.
	pub fn codes(&self) -> Vec<String> {
		self.profiles.iter().map(|p| p.language_code().to_owned()).collect()
	}
}

impl Default for ProfileRegistry {
	fn default() -> Self {
		Self::builtin()
	}
}
