//! Property tests for the word length and alphabet contracts.

use std::sync::Arc;

use proptest::prelude::*;

use wordgen_core::model::languages::{Portuguese, Spanish};
use wordgen_core::model::random::{RngSource, SequenceSource};
use wordgen_core::model::word_generator::WordGenerator;
use wordgen_core::{Difficulty, LanguageProfile, TransitionTable};

fn builtin_tables() -> Vec<Arc<TransitionTable>> {
	vec![Portuguese.standard(), Portuguese.easy_mode(), Spanish.standard(), Spanish.easy_mode()]
}

/// Small random tables over a-e, possibly with dead ends and endings.
fn arb_table() -> impl Strategy<Value = TransitionTable> {
	let letters = prop::sample::select(vec!['a', 'b', 'c', 'd', 'e']);
	let edges = prop::collection::btree_map(letters.clone(), prop::collection::vec(letters, 0..4), 1..5);
	let endings = prop::collection::vec("[a-z]{1,6}", 0..4);
	(edges, endings).prop_map(|(edges, endings)| TransitionTable::new(edges, &endings))
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(256))]

	#[test]
	fn builtin_words_fit_max_length(seed in any::<u64>(), max_length in 1usize..24, table in 0usize..4) {
		let generator = WordGenerator::new(builtin_tables()[table].clone());
		let word = generator.generate_word_with(max_length, &mut RngSource::seeded(seed)).unwrap();
		let len = word.chars().count();
		prop_assert!(len >= 1 && len <= max_length, "{word:?} has {len} letters for max {max_length}");
	}

	#[test]
	fn arbitrary_tables_never_overflow(table in arb_table(), seed in any::<u64>(), max_length in 1usize..16) {
		let generator = WordGenerator::new(Arc::new(table));
		let word = generator.generate_word_with(max_length, &mut RngSource::seeded(seed)).unwrap();
		let len = word.chars().count();
		prop_assert!(len >= 1 && len <= max_length);
	}

	#[test]
	fn batches_have_exact_count(count in 0usize..40, max_length in 1usize..12, seed in any::<u64>()) {
		let generator = WordGenerator::new(Portuguese.standard());
		let words = generator.generate_words_with(count, max_length, &mut RngSource::seeded(seed)).unwrap();
		prop_assert_eq!(words.len(), count);
		for word in &words {
			prop_assert!((1..=max_length).contains(&word.chars().count()));
		}
	}

	#[test]
	fn scripted_entropy_is_deterministic(script in prop::collection::vec(any::<usize>(), 1..32), max_length in 1usize..12) {
		let generator = WordGenerator::new(Spanish.standard());
		let first = generator.generate_word_with(max_length, &mut SequenceSource::new(script.clone())).unwrap();
		let second = generator.generate_word_with(max_length, &mut SequenceSource::new(script)).unwrap();
		prop_assert_eq!(first, second);
	}

	#[test]
	fn easy_words_stay_in_easy_alphabet(seed in any::<u64>(), max_length in 1usize..16, spanish in any::<bool>()) {
		let table = if spanish { Spanish.table(Difficulty::Easy) } else { Portuguese.table(Difficulty::Easy) };
		let mut alphabet = table.letters();
		alphabet.extend(table.endings().iter().flat_map(|e| e.chars()));

		let generator = WordGenerator::new(table);
		let word = generator.generate_word_with(max_length, &mut RngSource::seeded(seed)).unwrap();
		for letter in word.chars() {
			prop_assert!(alphabet.contains(&letter), "{letter:?} is not in the easy table");
		}
	}
}

#[test]
fn ping_pong_scenario() {
	let table = TransitionTable::from_rows(&[("a", "b"), ("b", "a")], &[] as &[&str]);
	let generator = WordGenerator::new(Arc::new(table));
	let word = generator.generate_word_with(4, &mut SequenceSource::zeros()).unwrap();
	assert_eq!(word, "abab");
}

#[test]
fn five_words_of_seven() {
	let generator = WordGenerator::new(Portuguese.standard());
	let words = generator.generate_words(5, 7).unwrap();
	assert_eq!(words.len(), 5);
	for word in words {
		let len = word.chars().count();
		assert!((1..=7).contains(&len), "{word:?}");
	}
}

#[test]
fn builtin_tables_have_no_dead_ends() {
	// Walks never stop early, only a one letter ending leaves a word short
	for table in builtin_tables() {
		for letter in table.letters() {
			assert!(table.next_letters(letter).is_some_and(|next| !next.is_empty()), "{letter:?} is a dead end");
		}
		let generator = WordGenerator::new(table);
		for word in generator.generate_words(50, 8).unwrap() {
			assert!((7..=8).contains(&word.chars().count()), "{word:?}");
		}
	}
}
