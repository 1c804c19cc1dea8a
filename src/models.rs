// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBER_CHARS: &str = "0123456789";
const SYMBOL_CHARS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// One of the four fixed character sets a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes, in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Numbers => NUMBER_CHARS,
            CharacterClass::Symbols => SYMBOL_CHARS,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }

    /// Short sample shown next to the toggle in the interactive menu
    pub fn sample(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABC",
            CharacterClass::Lowercase => "abc",
            CharacterClass::Numbers => "123",
            CharacterClass::Symbols => "#@&",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Password length must be between {min} and {max} characters (got {length})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("At least one character type must be included")]
    NoCharacterClass,
}

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordConfig {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_included(&mut self, class: CharacterClass, included: bool) {
        match class {
            CharacterClass::Uppercase => self.include_uppercase = included,
            CharacterClass::Lowercase => self.include_lowercase = included,
            CharacterClass::Numbers => self.include_numbers = included,
            CharacterClass::Symbols => self.include_symbols = included,
        }
    }

    /// Selected classes in fixed pool order.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    /// Checks the bounds a front end is expected to enforce before calling
    /// the generator. The generator itself accepts any configuration.
    pub fn validate(&self, min_length: usize, max_length: usize) -> Result<(), OptionsError> {
        if self.length < min_length || self.length > max_length {
            return Err(OptionsError::LengthOutOfRange {
                length: self.length,
                min: min_length,
                max: max_length,
            });
        }

        if self.selected_classes().is_empty() {
            return Err(OptionsError::NoCharacterClass);
        }

        Ok(())
    }
}

/// Ordinal strength of a password, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthRating {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthRating::Weak => "weak",
            StrengthRating::Medium => "medium",
            StrengthRating::Strong => "strong",
            StrengthRating::VeryStrong => "very-strong",
        }
    }

    /// Display label used by the strength meter
    pub fn label(&self) -> &'static str {
        match self {
            StrengthRating::Weak => "WEAK",
            StrengthRating::Medium => "OKAY",
            StrengthRating::Strong => "GOOD",
            StrengthRating::VeryStrong => "EPIC",
        }
    }

    /// Number of filled meter segments, 1 through 4.
    pub fn level(&self) -> u8 {
        match self {
            StrengthRating::Weak => 1,
            StrengthRating::Medium => 2,
            StrengthRating::Strong => 3,
            StrengthRating::VeryStrong => 4,
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub rating: StrengthRating,
    /// Number of satisfied predicates (0-6)
    pub points: u8,
    pub feedback: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_is_exact() {
        assert_eq!(CharacterClass::Symbols.chars(), "!@#$%^&*()_+~`|}{[]:;?><,./-=");
        assert_eq!(CharacterClass::Symbols.chars().len(), 29);
    }

    #[test]
    fn test_classes_are_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a != b {
                    assert!(!a.chars().chars().any(|c| b.contains(c)), "{} overlaps {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_selected_classes_keep_pool_order() {
        let config = PasswordConfig {
            length: 10,
            include_uppercase: false,
            include_lowercase: true,
            include_numbers: false,
            include_symbols: true,
        };
        assert_eq!(
            config.selected_classes(),
            vec![CharacterClass::Lowercase, CharacterClass::Symbols]
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_length() {
        let config = PasswordConfig { length: 5, ..PasswordConfig::default() };
        assert_eq!(
            config.validate(6, 32),
            Err(OptionsError::LengthOutOfRange { length: 5, min: 6, max: 32 })
        );

        let config = PasswordConfig { length: 33, ..PasswordConfig::default() };
        assert!(config.validate(6, 32).is_err());

        assert!(PasswordConfig::default().validate(6, 32).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_selection() {
        let mut config = PasswordConfig::default();
        for class in CharacterClass::ALL {
            config.set_included(class, false);
        }
        assert_eq!(config.validate(6, 32), Err(OptionsError::NoCharacterClass));
    }

    #[test]
    fn test_rating_order_and_serialization() {
        assert!(StrengthRating::Weak < StrengthRating::Medium);
        assert!(StrengthRating::Medium < StrengthRating::Strong);
        assert!(StrengthRating::Strong < StrengthRating::VeryStrong);

        let json = serde_json::to_string(&StrengthRating::VeryStrong).unwrap();
        assert_eq!(json, "\"very-strong\"");
        assert_eq!(StrengthRating::VeryStrong.to_string(), "very-strong");
    }
}
