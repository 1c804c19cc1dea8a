// src/core/session.rs
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::core::config::ConfigError;
use crate::generators::{score, PasswordGenerator};
use crate::models::{CharacterClass, PasswordConfig, StrengthRating};

/// Caller-owned generator state. Every change to the options produces a
/// fresh password and rating.
pub struct GeneratorSession<R: Rng = ThreadRng> {
    generator: PasswordGenerator<R>,
    options: PasswordConfig,
    min_length: usize,
    max_length: usize,
    password: String,
    strength: StrengthRating,
}

impl GeneratorSession<ThreadRng> {
    pub fn new(
        options: PasswordConfig,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, ConfigError> {
        Self::with_generator(PasswordGenerator::new(), options, min_length, max_length)
    }
}

impl<R: Rng> GeneratorSession<R> {
    /// Fails when `min_length` is greater than `max_length`.
    pub fn with_generator(
        generator: PasswordGenerator<R>,
        options: PasswordConfig,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, ConfigError> {
        if min_length > max_length {
            return Err(ConfigError::InvalidBounds {
                min: min_length,
                max: max_length,
            });
        }

        let mut session = GeneratorSession {
            generator,
            options,
            min_length,
            max_length,
            password: String::new(),
            strength: StrengthRating::Weak,
        };
        session.regenerate();
        Ok(session)
    }

    pub fn regenerate(&mut self) {
        self.password = self.generator.generate_password(&self.options);
        self.strength = score(&self.password);
        log::debug!(
            "Session regenerated: length {}, strength {}",
            self.password.len(),
            self.strength
        );
    }

    /// Set the target length, pulled into the session bounds.
    pub fn set_length(&mut self, length: usize) {
        let clamped = length.clamp(self.min_length, self.max_length);
        if clamped != length {
            log::info!(
                "Requested length {} outside {}..={}, using {}",
                length,
                self.min_length,
                self.max_length,
                clamped
            );
        }
        self.options.length = clamped;
        self.regenerate();
    }

    /// Flip a character class. Refuses to deselect the last selected class
    /// and returns `false` in that case, leaving the session untouched.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let mut next = self.options;
        next.set_included(class, !next.includes(class));

        if next.selected_classes().is_empty() {
            log::debug!("Refusing to deselect {}, it is the last selected class", class);
            return false;
        }

        self.options = next;
        self.regenerate();
        true
    }

    pub fn options(&self) -> &PasswordConfig {
        &self.options
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> StrengthRating {
        self.strength
    }

    pub fn length_bounds(&self) -> (usize, usize) {
        (self.min_length, self.max_length)
    }
}
