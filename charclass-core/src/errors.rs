//! errors.rs - Custom error types for the charclass-core library.
//!
//! Malformed input is never an error here: filters fall back to a defined value
//! and matchers answer `false`. What remains are failures of the pattern engine
//! itself and bad configuration.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All possible error types in the `charclass-core` library.
///
/// The enum is `#[non_exhaustive]` so new variants can be added without
/// breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CharClassError {
    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Unknown character class '{0}'")]
    UnknownClass(String),

    #[error("Invalid engine configuration: {0}")]
    Config(#[from] anyhow::Error),
}
