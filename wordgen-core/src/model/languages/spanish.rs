use std::sync::{Arc, LazyLock};

use crate::model::language::LanguageProfile;
use crate::model::table::TransitionTable;

static STANDARD: LazyLock<Arc<TransitionTable>> = LazyLock::new(|| {
	let rows = [
		// Vowels
		("a", "bcdlmnprstvyiou"),
		("e", "bcdlmnprstvxziaou"),
		("i", "acdlmnrstvo"),
		("o", "bcdlmnprstvau"),
		("u", "acdlmnrstio"),
		// Consonants, doubled 'l' and 'r' give ll and rr
		("b", "aeiorl"),
		("c", "aehioru"),
		("d", "aeior"),
		("f", "aeiloru"),
		("g", "aeiour"),
		("h", "aeiou"),
		("j", "aeiou"),
		("l", "aeioul"),
		("m", "aeiou"),
		("n", "aeiou"),
		("p", "aeiorl"),
		("q", "u"),
		("r", "aeiour"),
		("s", "aeiout"),
		("t", "aeiour"),
		("v", "aeiou"),
		("x", "aeiou"),
		("y", "aeiou"),
		("z", "aeiou"),
		("ñ", "aeiou"),
	];
	let endings = [
		"a", "o", "e", "ar", "er", "ir", "or", "al", "el", "il", "ol", "es", "as", "os", "is", "ión", "dad", "tad",
		"mente",
	];
	Arc::new(TransitionTable::from_rows(&rows, &endings))
});

static EASY: LazyLock<Arc<TransitionTable>> = LazyLock::new(|| {
	let rows = [
		("a", "bcdlmnprst"),
		("e", "bcdlmnprst"),
		("i", "acdlmnrst"),
		("o", "bcdlmnprst"),
		("u", "acdlmnrst"),
		("b", "aeio"),
		("c", "aeio"),
		("d", "aeio"),
		("f", "aeio"),
		("g", "aeio"),
		("h", "aeio"),
		("j", "aeio"),
		("l", "aeio"),
		("m", "aeio"),
		("n", "aeio"),
		("p", "aeio"),
		("r", "aeio"),
		("s", "aeio"),
		("t", "aeio"),
		("v", "aeio"),
	];
	let endings = ["a", "o", "e", "ar", "er", "or", "al", "el", "as", "os"];
	Arc::new(TransitionTable::from_rows(&rows, &endings))
});

/// Spanish-like words: 'ñ', 'll', 'rr', endings such as "-ión" and "-mente".
#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish;

impl LanguageProfile for Spanish {
	fn language_code(&self) -> &str {
		"es"
	}

	fn language_name(&self) -> &str {
		"Spanish"
	}

	fn standard(&self) -> Arc<TransitionTable> {
		Arc::clone(&STANDARD)
	}

	fn easy_mode(&self) -> Arc<TransitionTable> {
		Arc::clone(&EASY)
	}
}
