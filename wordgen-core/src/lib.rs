//! Pronounceable pseudo-word generation library.
//!
//! Words are produced by a random walk over a first-order letter transition
//! table, optionally finished with a common ending of the target language.
//! This crate provides:
//! - Hand-authored Portuguese and Spanish tables, each in a standard and an
//!   easy flavor
//! - Custom languages loaded from TOML files
//! - Injectable randomness for reproducible output
//! - Helpers to save generated words as plain text

/// Tables, profiles and generation logic.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (file loading, path helpers, word list output).
pub mod io;

pub use error::{Result, WordGenError};
pub use model::generator::Generator;
pub use model::language::{Difficulty, LanguageProfile};
pub use model::table::TransitionTable;
