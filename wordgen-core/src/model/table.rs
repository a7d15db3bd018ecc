use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A first-order transition table over letters.
///
/// A `TransitionTable` maps each letter to the letters that may follow it and
/// carries a list of common word endings. Conceptually, this is a Markov chain
/// where every outgoing edge of a letter has the same weight.
///
/// ## Responsibilities:
/// - Expose the letters a word may start with
/// - Expose the successors of a letter (or `None` to end the chain)
/// - Expose the endings that can be glued onto a generated core
///
/// ## Invariants
/// - Immutable once built; shared between generators through `Arc`
/// - Keys iterate in sorted order, so a fixed sequence of random picks always
///   walks the same path
/// - A successor does not need to be a key itself (the walk stops there)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
	/// Outgoing transitions indexed by the current letter.
	/// Example: { 'q' => ['u'], 'b' => ['a', 'e', 'r'] }
	edges: BTreeMap<char, Vec<char>>,

	/// Common word endings, may be empty.
	#[serde(default)]
	endings: Vec<String>,

	/// Letters that never start a word (ex. 'ç' in Portuguese).
	#[serde(default)]
	non_initial: BTreeSet<char>,
}

impl TransitionTable {
	/// Creates a table from its edges and endings.
	///
	/// An empty `edges` is accepted here; generating from such a table fails
	/// with `WordGenError::NoStartingLetters`.
	pub fn new<E, S>(edges: E, endings: &[S]) -> Self
	where
		E: IntoIterator<Item = (char, Vec<char>)>,
		S: AsRef<str>,
	{
		Self {
			edges: edges.into_iter().collect(),
			endings: endings.iter().map(|e| e.as_ref().to_owned()).collect(),
			non_initial: BTreeSet::new(),
		}
	}

	/// Builds a table from string rows, one successor per character.
	///
	/// `("a", "bcd")` means `'a'` may be followed by `'b'`, `'c'` or `'d'`.
	/// Rows whose key is not exactly one character are ignored.
	pub fn from_rows<S: AsRef<str>>(rows: &[(&str, &str)], endings: &[S]) -> Self {
		let edges = rows.iter().filter_map(|(key, next)| {
			let mut chars = key.chars();
			match (chars.next(), chars.next()) {
				(Some(letter), None) => Some((letter, next.chars().collect())),
				_ => None,
			}
		});
		Self::new(edges, endings)
	}

	/// Marks letters that must never be picked as the first letter.
	pub fn with_non_initial<I: IntoIterator<Item = char>>(mut self, letters: I) -> Self {
		self.non_initial.extend(letters);
		self
	}

	/// Returns the letters a word may start with.
	///
	/// These are the keys of the table minus the non-initial letters.
	/// An empty result is a configuration problem, not a normal outcome.
	pub fn starting_letters(&self) -> Vec<char> {
		self.edges
			.keys()
			.filter(|letter| !self.non_initial.contains(letter))
			.copied()
			.collect()
	}

	/// Returns the letters allowed after `letter`.
	///
	/// `None` is not an error: it means the chain ends at this letter.
	pub fn next_letters(&self, letter: char) -> Option<&[char]> {
		self.edges.get(&letter).map(Vec::as_slice)
	}

	/// Returns the common endings.
	pub fn endings(&self) -> &[String] {
		&self.endings
	}

	/// Returns the letters that never start a word.
	pub fn non_initial(&self) -> &BTreeSet<char> {
		&self.non_initial
	}

	/// Returns every letter a walk can emit: keys and successors.
	pub fn letters(&self) -> BTreeSet<char> {
		self.edges
			.iter()
			.flat_map(|(key, next)| std::iter::once(*key).chain(next.iter().copied()))
			.collect()
	}

	/// Returns true if the table has no edges at all.
	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}
}
