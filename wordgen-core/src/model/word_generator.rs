use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::error::{Result, WordGenError};
use super::random::{RandomSource, ThreadSource};
use super::table::TransitionTable;

/// Synthesizes words from a single `TransitionTable`.
///
/// A word is produced by a uniform random walk over the table, then either a
/// common ending is glued on or the walk continues up to the maximum length.
///
/// # Invariants
/// - Every generated word has between 1 and `max_length` characters
/// - Lengths are counted in `char`s, truncation never splits a letter
/// - The table is never modified
#[derive(Debug, Clone)]
pub struct WordGenerator {
	table: Arc<TransitionTable>,
}

impl WordGenerator {
	pub fn new(table: Arc<TransitionTable>) -> Self {
		Self { table }
	}

	/// Returns the table this generator walks.
	pub fn table(&self) -> &Arc<TransitionTable> {
		&self.table
	}

	/// Generates one word using the thread-local random source.
	pub fn generate_word(&self, max_length: usize) -> Result<String> {
		self.generate_word_with(max_length, &mut ThreadSource)
	}

	/// Generates one word, drawing every choice from `source`.
	///
	/// # Behavior
	/// - Picks a starting letter (never a non-initial one).
	/// - Walks until the core holds `max_length - 2` letters, leaving room
	///   for an ending.
	/// - On a coin flip, appends an ending (trimming the core so that it fits);
	///   otherwise keeps walking up to `max_length`.
	/// - The walk stops early when a letter has no successors, so the word
	///   may be shorter than `max_length`.
	///
	/// # Errors
	/// - `InvalidLength` if `max_length` is 0.
	/// - `NoStartingLetters` if the table cannot start a word.
	pub fn generate_word_with<S: RandomSource>(&self, max_length: usize, source: &mut S) -> Result<String> {
		if max_length == 0 {
			return Err(WordGenError::InvalidLength(max_length));
		}

		let starts = self.table.starting_letters();
		let mut current = *source.choose(&starts).ok_or(WordGenError::NoStartingLetters)?;
		let mut word: Vec<char> = vec![current];

		// Core: leave room for a two letter ending
		let mut i = 1;
		while i + 2 < max_length {
			match self.step(current, source) {
				Some(next) => {
					word.push(next);
					current = next;
				}
				None => break,
			}
			i += 1;
		}

		let endings = self.table.endings();
		if max_length >= 3 && !endings.is_empty() && source.pick(2) == 1 {
			if let Some(ending) = source.choose(endings) {
				let ending_len = ending.chars().count();
				if word.len() + ending_len > max_length {
					word.truncate(max_length.saturating_sub(ending_len));
				}
				word.extend(ending.chars());
			}
		} else {
			// Same walk, carried on to the full length
			while word.len() < max_length {
				match self.step(current, source) {
					Some(next) => {
						word.push(next);
						current = next;
					}
					None => break,
				}
			}
		}

		word.truncate(max_length);
		Ok(word.into_iter().collect())
	}

	/// One step of the chain. `None` when `current` has no successors.
	fn step<S: RandomSource>(&self, current: char, source: &mut S) -> Option<char> {
		let next = self.table.next_letters(current)?;
		source.choose(next).copied()
	}

	/// Generates `count` independent words, in call order.
	pub fn generate_words(&self, count: usize, max_length: usize) -> Result<Vec<String>> {
		self.generate_words_with(count, max_length, &mut ThreadSource)
	}

	/// Generates `count` independent words from an explicit source.
	pub fn generate_words_with<S: RandomSource>(
		&self,
		count: usize,
		max_length: usize,
		source: &mut S,
	) -> Result<Vec<String>> {
		(0..count)
			.map(|_| self.generate_word_with(max_length, source))
			.collect()
	}

	/// Generates `count` words across all available CPUs.
	///
	/// # Behavior
	/// - Splits `count` into chunks (based on CPU cores).
	/// - Each worker thread walks with its own thread-local source.
	/// - Chunks are reassembled in their original order.
	///
	/// # Errors
	/// Returns the first error reported by a worker, or
	/// `NoStartingLetters`/`InvalidLength` before any thread is spawned.
	pub fn generate_words_parallel(&self, count: usize, max_length: usize) -> Result<Vec<String>> {
		if max_length == 0 {
			return Err(WordGenError::InvalidLength(max_length));
		}
		if self.table.starting_letters().is_empty() {
			return Err(WordGenError::NoStartingLetters);
		}
		if count == 0 {
			return Ok(Vec::new());
		}

		let workers = num_cpus::get().max(1);
		let chunk_size = count.div_ceil(workers);

		let (tx, rx) = mpsc::channel();
		let mut remaining = count;
		let mut chunks = 0;
		while remaining > 0 {
			let size = chunk_size.min(remaining);
			remaining -= size;

			let tx = tx.clone();
			let generator = self.clone();
			let index = chunks;
			thread::spawn(move || {
				let words = generator.generate_words(size, max_length);
				// The receiver outlives every worker
				let _ = tx.send((index, words));
			});
			chunks += 1;
		}
		drop(tx);

		let mut parts: Vec<(usize, Vec<String>)> = Vec::with_capacity(chunks);
		for (index, words) in rx.iter() {
			parts.push((index, words?));
		}
		parts.sort_by_key(|(index, _)| *index);

		Ok(parts.into_iter().flat_map(|(_, words)| words).collect())
	}
}
