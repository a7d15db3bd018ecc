use wordgen_core::model::registry::ProfileRegistry;
use wordgen_core::model::random::SequenceSource;
use wordgen_core::{Difficulty, Generator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Portuguese is the default language, standard mode is the default difficulty
    let mut generator = Generator::default();
    println!("=== {} Words ===", generator.language_name());
    println!("Single word: {}", generator.generate_word(6)?);
    for word in generator.generate_words(3, 7)? {
        println!("- {}", word);
    }

    // Languages can be selected by name or by code, in any case
    let mut spanish = Generator::standard("Spanish");
    println!("\n=== {} Words ===", spanish.language_name());
    for word in spanish.generate_words(3, 7)? {
        println!("- {}", word);
    }

    // Easy mode uses a reduced alphabet and shorter endings
    println!("\n=== Easy Mode Comparison ===");
    for language in ["pt", "es"] {
        let mut easy = Generator::new(language, Difficulty::Easy);
        println!("{} (easy mode):", easy.language_name());
        for word in easy.generate_words(3, 6)? {
            println!("- {}", word);
        }
    }

    // An unknown language is not an error, it falls back to Portuguese
    let fallback = Generator::standard("klingon");
    println!("\n'klingon' resolves to: {}", fallback.language_name());

    // The same seed always gives the same words
    let mut a = Generator::standard("es").with_seed(42);
    let mut b = Generator::standard("es").with_seed(42);
    let first = a.generate_words(3, 8)?;
    let second = b.generate_words(3, 8)?;
    println!("\nSeeded run: {:?} (repeatable: {})", first, first == second);

    // A scripted source takes the first option at every step
    let mut scripted = Generator::standard("pt").with_source(SequenceSource::zeros());
    println!("Scripted word: {}", scripted.generate_word(8)?);

    // Extra languages can be registered from a directory of .toml profiles
    let mut registry = ProfileRegistry::builtin();
    match registry.load_dir("./profiles") {
        Ok(n) => println!("\nLoaded {} custom profiles, languages: {:?}", n, registry.codes()),
        Err(_) => println!("\nNo ./profiles directory, languages: {:?}", registry.codes()),
    }

    // Big batches can be spread over all CPUs
    let many = Generator::standard("pt").generate_words_parallel(1000, 6)?;
    println!("Generated {} words in parallel", many.len());

    // Save a batch to a file, one word per line
    let words = generator.generate_words(100, 6)?;
    if generator.save_to_file(&words, "output.txt") {
        println!("Successfully saved {} words to output.txt", words.len());
    } else {
        println!("Could not write output.txt");
    }

    Ok(())
}
