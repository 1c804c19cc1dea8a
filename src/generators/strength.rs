// src/generators/strength.rs
use crate::models::{StrengthRating, StrengthReport};

struct Checks {
    length: usize,
    has_uppercase: bool,
    has_lowercase: bool,
    has_digit: bool,
    has_symbol: bool,
}

impl Checks {
    fn of(password: &str) -> Self {
        Checks {
            length: password.chars().count(),
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    fn points(&self) -> u8 {
        [
            self.length > 8,
            self.length > 12,
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
            self.has_symbol,
        ]
        .into_iter()
        .filter(|passed| *passed)
        .count() as u8
    }
}

fn rating_for(points: u8) -> StrengthRating {
    match points {
        0..=2 => StrengthRating::Weak,
        3..=4 => StrengthRating::Medium,
        5 => StrengthRating::Strong,
        _ => StrengthRating::VeryStrong,
    }
}

/// Number of strength predicates `password` satisfies (0-6).
pub fn points(password: &str) -> u8 {
    Checks::of(password).points()
}

/// Rate a password. Depends on the string alone.
pub fn score(password: &str) -> StrengthRating {
    rating_for(points(password))
}

/// Rate a password and list what would raise its score.
pub fn analyze(password: &str) -> StrengthReport {
    let checks = Checks::of(password);
    let points = checks.points();

    let mut feedback = Vec::new();
    if checks.length <= 8 {
        feedback.push("Increase password length to more than 8 characters".to_string());
    } else if checks.length <= 12 {
        feedback.push("Increase password length to more than 12 characters".to_string());
    }
    if !checks.has_uppercase {
        feedback.push("Add uppercase letters for better security".to_string());
    }
    if !checks.has_lowercase {
        feedback.push("Add lowercase letters for better security".to_string());
    }
    if !checks.has_digit {
        feedback.push("Add numbers for better security".to_string());
    }
    if !checks.has_symbol {
        feedback.push("Add symbols for better security".to_string());
    }

    StrengthReport {
        rating: rating_for(points),
        points,
        feedback,
    }
}
