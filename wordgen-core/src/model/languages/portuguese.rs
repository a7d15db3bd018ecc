use std::sync::{Arc, LazyLock};

use crate::model::language::LanguageProfile;
use crate::model::table::TransitionTable;

static STANDARD: LazyLock<Arc<TransitionTable>> = LazyLock::new(|| {
	let rows = [
		// Vowels
		("a", "bcdlmnprstvziouç"),
		("e", "bcdlmnprstvziaouç"),
		("i", "acdlmnrstvzoç"),
		("o", "bcdlmnprstvzauç"),
		("u", "acdlmnrstzioç"),
		// Consonants, 'h' after 'c', 'l', 'n' builds the digraphs ch, lh, nh
		("b", "aeiorl"),
		("c", "aehioru"),
		("d", "aeior"),
		("f", "aeiloru"),
		("g", "aeiour"),
		("h", "aeiou"),
		("j", "aeiou"),
		("l", "aeiouh"),
		("m", "aeiou"),
		("n", "aeiouh"),
		("p", "aeiorl"),
		("q", "u"),
		("r", "aeiou"),
		("s", "aeiout"),
		("t", "aeiour"),
		("v", "aeiou"),
		("x", "aeiou"),
		("z", "aeiou"),
		("ç", "aeiou"),
	];
	let endings = [
		"a", "o", "e", "ar", "er", "ir", "or", "al", "el", "il", "ol", "es", "as", "os", "is", "em", "am", "ção",
		"ções",
	];
	Arc::new(TransitionTable::from_rows(&rows, &endings).with_non_initial(['ç']))
});

static EASY: LazyLock<Arc<TransitionTable>> = LazyLock::new(|| {
	let rows = [
		("a", "bcdlmnprstv"),
		("e", "bcdlmnprstv"),
		("i", "acdlmnrstv"),
		("o", "bcdlmnprstv"),
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
	let endings = ["a", "o", "e", "ar", "er", "or", "al", "el", "as", "os", "em"];
	Arc::new(TransitionTable::from_rows(&rows, &endings).with_non_initial(['ç']))
});

/// Portuguese-like words: digraphs ch/lh/nh, 'ç', endings such as "-ção".
#[derive(Debug, Clone, Copy, Default)]
pub struct Portuguese;

impl LanguageProfile for Portuguese {
	fn language_code(&self) -> &str {
		"pt"
	}

	fn language_name(&self) -> &str {
		"Portuguese"
	}

	fn standard(&self) -> Arc<TransitionTable> {
		Arc::clone(&STANDARD)
	}

	fn easy_mode(&self) -> Arc<TransitionTable> {
		Arc::clone(&EASY)
	}
}
