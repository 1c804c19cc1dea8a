// src/generators/mod.rs
mod password;
mod strength;

pub use password::{generate, generate_with_rng, PasswordGenerator};
pub use strength::{analyze, points, score};
