// charclass-core/src/lib.rs
//! # charclass Core Library
//!
//! `charclass-core` filters and validates text by character class. It builds on
//! the `regex` crate and is Unicode-aware throughout.
//!
//! It offers two families of operations:
//!
//! * **Filters** strip everything outside a class (`alpha`, `alphadash`,
//!   `alphanumeric`, `digits`, `numeric`). For UUIDs and IP addresses they also
//!   regroup the surviving characters into the canonical layout (`uuid`, `ipv4`,
//!   `ip`, `ipv6`).
//! * **Matchers** report whether an entire subject belongs to a class
//!   (`is_alpha`, ..., `is_uuid`, `is_ipv4`, `is_ip`, `is_ipv6`).
//!
//! ## Modules
//!
//! * `catalog`: the named fragments and structured patterns, and the `CharClass` enum.
//! * `patterns`: the replace/match pattern builders and the compiled-pattern cache.
//! * `engines`: the filter and match engines, including capture-and-glue.
//! * `engine`: the `Engine` facade binding every operation to one `EngineOptions`.
//! * `config`: `EngineOptions` and custom classes, loadable from YAML.
//! * `errors`: the `CharClassError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use charclass_core::{alpha, ipv4, is_ipv6, is_numeric, uuid};
//!
//! fn main() -> Result<(), charclass_core::CharClassError> {
//!     assert_eq!(alpha("AbČdë 12345", "")?, "AbČdë");
//!     assert_eq!(ipv4("ip address: 19216811")?, "192.168.1.1");
//!     assert_eq!(
//!         uuid("4405  26d4-04bd43c4-9ac5 - 55e15c  835d0d ")?,
//!         "440526d4-04bd-43c4-9ac5-55e15c835d0d"
//!     );
//!     assert!(is_numeric("-11.3456", false)?);
//!     assert!(!is_ipv6("192.168.1.1")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Malformed input is never an error. Filters return a defined fallback and
//! matchers return `false`. A `CharClassError` means the pattern engine itself
//! failed (for example a custom fragment over the size limit) or the
//! configuration was invalid.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod catalog;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod patterns;

use once_cell::sync::Lazy;

pub use catalog::CharClass;
pub use config::{CustomClass, EngineOptions, DEFAULT_SIZE_LIMIT, MAX_FRAGMENT_LENGTH};
pub use engine::{ClassRef, Engine};
pub use engines::matcher::MatchOutcome;
pub use errors::CharClassError;
pub use patterns::builder::{
    build_match_pattern, build_replace_pattern, Framing, MatchPattern, PatternFlags, ReplacePattern,
};

/// The process-wide engine with default options, used by the free functions below.
static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::new);

/// Strips everything but letters and marks.
pub fn alpha(subject: &str, replacement: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.alpha(subject, replacement)
}

/// Strips everything but letters, marks, numbers, `.`, `_` and `-`.
pub fn alphadash(subject: &str, replacement: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.alphadash(subject, replacement)
}

/// Strips everything but letters, marks and numbers.
pub fn alphanumeric(subject: &str, replacement: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.alphanumeric(subject, replacement)
}

/// Strips everything but ASCII digits.
pub fn digits(subject: &str, replacement: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.digits(subject, replacement)
}

/// Strips everything but the characters of a signed decimal.
pub fn numeric(subject: &str, replacement: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.numeric(subject, replacement)
}

pub fn uuid(subject: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.uuid(subject)
}

pub fn ipv4(subject: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.ipv4(subject)
}

/// Alias for [`ipv4`].
pub fn ip(subject: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.ip(subject)
}

pub fn ipv6(subject: &str) -> Result<String, CharClassError> {
    DEFAULT_ENGINE.ipv6(subject)
}

pub fn is_alpha(subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_alpha(subject, allow_whitespace)
}

pub fn is_alphadash(subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_alphadash(subject, allow_whitespace)
}

pub fn is_alphanumeric(subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_alphanumeric(subject, allow_whitespace)
}

pub fn is_digits(subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_digits(subject, allow_whitespace)
}

pub fn is_numeric(subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_numeric(subject, allow_whitespace)
}

pub fn is_uuid(subject: &str) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_uuid(subject)
}

pub fn is_ipv4(subject: &str) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_ipv4(subject)
}

/// Alias for [`is_ipv4`].
pub fn is_ip(subject: &str) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_ip(subject)
}

pub fn is_ipv6(subject: &str) -> Result<bool, CharClassError> {
    DEFAULT_ENGINE.is_ipv6(subject)
}
