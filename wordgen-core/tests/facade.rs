//! Tests for the `Generator` entry point.

use std::fs;

use wordgen_core::io::LINE_ENDING;
use wordgen_core::model::random::SequenceSource;
use wordgen_core::{Difficulty, Generator, LanguageProfile};
use wordgen_core::model::languages::Spanish;

#[test]
fn standard_generator_defaults_to_portuguese() {
	let mut generator = Generator::default();
	let word = generator.generate_word(6).unwrap();
	assert!((1..=6).contains(&word.chars().count()));
	assert_eq!(generator.language_code(), "pt");
}

#[test]
fn easy_mode_generator() {
	let mut generator = Generator::easy_mode("portuguese");
	let word = generator.generate_word(6).unwrap();
	assert!((1..=6).contains(&word.chars().count()));
	assert_eq!(generator.difficulty(), Difficulty::Easy);
}

#[test]
fn language_codes_and_names() {
	for (query, code) in [("pt", "pt"), ("es", "es"), ("Spanish", "es"), ("PORTUGUESE", "pt"), ("xx", "pt")] {
		assert_eq!(Generator::standard(query).language_code(), code, "{query}");
	}
}

#[test]
fn unknown_language_matches_portuguese_under_same_entropy() {
	let script = vec![7, 2, 9, 4, 1, 1, 8, 3, 0, 5, 6];
	let mut unknown = Generator::standard("xx").with_source(SequenceSource::new(script.clone()));
	let mut portuguese = Generator::standard("portuguese").with_source(SequenceSource::new(script));
	for _ in 0..10 {
		assert_eq!(unknown.generate_word(6).unwrap(), portuguese.generate_word(6).unwrap());
	}
}

#[test]
fn spanish_generator_uses_spanish_table() {
	let generator = Generator::standard("spanish");
	assert_eq!(generator.table(), &Spanish.standard());
}

#[test]
fn same_seed_same_words() {
	let mut a = Generator::new("es", Difficulty::Easy).with_seed(2024);
	let mut b = Generator::new("es", Difficulty::Easy).with_seed(2024);
	assert_eq!(a.generate_words(20, 7).unwrap(), b.generate_words(20, 7).unwrap());
}

#[test]
fn save_to_file_writes_one_word_per_line() {
	let mut generator = Generator::default();
	let words = generator.generate_words(5, 6).unwrap();
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("generated_words_test.txt");

	assert!(generator.save_to_file(&words, &path));

	let expected: String = words.iter().map(|w| format!("{w}{LINE_ENDING}")).collect();
	assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn save_to_unwritable_path_returns_false() {
	let generator = Generator::default();
	let dir = tempfile::tempdir().unwrap();
	// A directory cannot be opened as a file
	assert!(!generator.save_to_file(&["palavra"], dir.path()));
}

#[test]
fn parallel_batch_has_requested_size() {
	let generator = Generator::standard("es");
	let words = generator.generate_words_parallel(250, 9).unwrap();
	assert_eq!(words.len(), 250);
	assert!(words.iter().all(|w| (1..=9).contains(&w.chars().count())));
}

#[test]
fn zero_length_is_an_error() {
	let mut generator = Generator::default();
	assert!(generator.generate_word(0).is_err());
	assert!(generator.generate_words(0, 6).unwrap().is_empty());
}
