//! Random password generation with a coarse strength rating.
//!
//! The core is two functions: [`generate`] builds a password from a
//! [`PasswordConfig`], and [`score`] rates any password string. Everything
//! else in the crate is a caller of those two.

pub mod cli;
pub mod core;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::core::session::GeneratorSession;
pub use crate::generators::{
    analyze, generate, generate_with_rng, points, score, PasswordGenerator,
};
pub use crate::models::{CharacterClass, PasswordConfig, StrengthRating, StrengthReport};
