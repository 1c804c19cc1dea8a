// src/generators/password.rs
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{PasswordConfig, StrengthRating};

/// Generate a password for `config` using the thread-local generator.
pub fn generate(config: &PasswordConfig) -> String {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generate a password for `config` drawing from `rng`.
///
/// One character is taken from every selected class, the rest of the length
/// is filled from the combined pool, and the result is shuffled. A request
/// shorter than the number of selected classes still yields one character per
/// class, so the output can be longer than `config.length`. With no class
/// selected the result is empty.
pub fn generate_with_rng<R: Rng + ?Sized>(config: &PasswordConfig, rng: &mut R) -> String {
    let classes = config.selected_classes();

    let pool: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.chars().bytes())
        .collect();

    if pool.is_empty() {
        log::debug!("No character class selected, returning empty password");
        return String::new();
    }

    let mut password: Vec<u8> = Vec::with_capacity(config.length.max(classes.len()));

    // Required characters
    for class in &classes {
        let set = class.chars().as_bytes();
        password.push(set[rng.gen_range(0..set.len())]);
    }

    let fill_count = config.length.saturating_sub(classes.len());
    for _ in 0..fill_count {
        password.push(pool[rng.gen_range(0..pool.len())]);
    }

    password.shuffle(rng);

    log::debug!(
        "Generated password: requested length {}, {} classes, pool of {}, output length {}",
        config.length,
        classes.len(),
        pool.len(),
        password.len()
    );

    password.into_iter().map(char::from).collect()
}

pub struct PasswordGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Use a caller-supplied generator, e.g. a seeded one for reproducible output.
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, options: &PasswordConfig) -> String {
        generate_with_rng(options, &mut self.rng)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthRating {
        super::score(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config(
        length: usize,
        upper: bool,
        lower: bool,
        numbers: bool,
        symbols: bool,
    ) -> PasswordConfig {
        PasswordConfig {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn test_generate_requested_length() {
        for length in [4, 6, 16, 32, 100] {
            let password = generate(&config(length, true, true, true, true));
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn test_generate_no_classes_is_empty() {
        assert_eq!(generate(&config(16, false, false, false, false)), "");
        assert_eq!(generate(&config(0, false, false, false, false)), "");
    }

    #[test]
    fn test_generate_covers_every_selected_class() {
        let options = config(6, true, true, true, true);
        for _ in 0..200 {
            let password = generate(&options);
            for class in CharacterClass::ALL {
                assert!(
                    password.chars().any(|c| class.contains(c)),
                    "{} missing from {}",
                    class,
                    password
                );
            }
        }
    }

    #[test]
    fn test_generate_uses_only_selected_classes() {
        let options = config(32, false, true, false, true);
        for _ in 0..50 {
            let password = generate(&options);
            assert!(password.chars().all(|c| {
                CharacterClass::Lowercase.contains(c) || CharacterClass::Symbols.contains(c)
            }));
        }
    }

    #[test]
    fn test_generate_length_equal_to_class_count() {
        let password = generate(&config(4, true, true, true, true));
        assert_eq!(password.len(), 4);
        for class in CharacterClass::ALL {
            assert_eq!(password.chars().filter(|c| class.contains(*c)).count(), 1);
        }
    }

    #[test]
    fn test_generate_short_length_overruns_to_class_count() {
        assert_eq!(generate(&config(2, true, true, true, true)).len(), 4);
        assert_eq!(generate(&config(0, true, false, true, false)).len(), 2);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let options = PasswordConfig::default();
        let mut first = PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(42));
        let mut second = PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first.generate_password(&options), second.generate_password(&options));
    }

    #[test]
    fn test_shuffle_moves_required_characters() {
        // One letter and one digit per password; both orders must show up
        let options = config(2, true, false, true, false);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut digit_first = false;
        let mut letter_first = false;
        for _ in 0..100 {
            let password = generate_with_rng(&options, &mut rng);
            let first = password.chars().next().unwrap();
            if first.is_ascii_digit() {
                digit_first = true;
            } else {
                letter_first = true;
            }
        }
        assert!(digit_first && letter_first);
    }
}
