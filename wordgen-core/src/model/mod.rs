//! Top-level module for the pseudo-word generation system.
//!
//! This module provides:
//! - Letter transition tables (`TransitionTable`)
//! - Language profiles and their registry (`LanguageProfile`, `ProfileRegistry`)
//! - The random walk itself (`WordGenerator`)
//! - Generation parameters (`GenerationInput`)
//! - A high-level generation interface (`Generator`)

/// High-level interface bound to a language, a difficulty and a random source.
///
/// Resolves the language, generates words and saves them to disk.
pub mod generator;

/// Random walk over a single transition table.
///
/// Handles the core walk, ending substitution and batch generation.
pub mod word_generator;

/// Immutable letter → successors mapping plus common endings.
pub mod table;

/// "Pick one of N" abstraction over the entropy source.
pub mod random;

/// The `LanguageProfile` trait, difficulties and file-backed profiles.
pub mod language;

/// Built-in Portuguese and Spanish profiles.
pub mod languages;

/// Lookup of profiles by code or name, with the default fallback.
pub mod registry;

/// Batch generation parameters and their defaults.
pub mod generation_input;
