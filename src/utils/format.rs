// src/utils/format.rs
use console::{style, Color};

use crate::models::StrengthRating;

pub fn strength_color(rating: StrengthRating) -> Color {
    match rating {
        StrengthRating::Weak => Color::Red,
        StrengthRating::Medium => Color::Yellow,
        StrengthRating::Strong => Color::Blue,
        StrengthRating::VeryStrong => Color::Green,
    }
}

/// Four-segment meter with as many filled segments as the rating's level.
pub fn strength_meter(rating: StrengthRating) -> String {
    (1..=4u8)
        .map(|segment| {
            if segment <= rating.level() {
                style("████").fg(strength_color(rating)).to_string()
            } else {
                style("····").dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Strength line shown under a generated password
pub fn format_strength(rating: StrengthRating) -> String {
    format!(
        "Strength: {} {}",
        strength_meter(rating),
        style(rating.label()).fg(strength_color(rating)).bold()
    )
}

// Mark a toggle as on or off
pub fn format_toggle(enabled: bool) -> &'static str {
    if enabled {
        "[x]"
    } else {
        "[ ]"
    }
}
