//! builder.rs - Composes fragments into engine-ready patterns.
//!
//! A pattern is always `prefix + [whitespace token] + fragment + suffix`, plus
//! flags. The default framings make a fragment into a negated bracket class for
//! stripping, or an anchored bracket class for whole-subject matching. Other
//! framings embed a structured sequence instead of a set.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use regex::Regex;

use crate::catalog::WHITESPACE;
use crate::config::EngineOptions;
use crate::errors::CharClassError;
use crate::patterns::compiler::get_or_compile;

/// Compile-time flags. Unicode mode is always on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    pub case_insensitive: bool,
}

/// How a fragment is framed: what goes before it, after it, and which flags apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Framing<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub flags: PatternFlags,
}

impl<'a> Framing<'a> {
    pub const fn new(prefix: &'a str, suffix: &'a str) -> Self {
        Self {
            prefix,
            suffix,
            flags: PatternFlags { case_insensitive: false },
        }
    }

    /// Runs of one or more characters outside the fragment.
    pub const fn replace() -> Framing<'static> {
        Framing::new("[^", "]+")
    }

    /// The whole subject, start to end, drawn from the fragment.
    pub const fn matching() -> Framing<'static> {
        Framing::new("^[", "]+$")
    }

    /// The whole subject must be exactly the (sequence) fragment.
    pub const fn exact() -> Framing<'static> {
        Framing::new("^(?:", ")$")
    }

    /// No framing at all; the fragment is used as written.
    pub const fn bare() -> Framing<'static> {
        Framing::new("", "")
    }

    pub const fn case_insensitive(mut self) -> Self {
        self.flags.case_insensitive = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BuiltPattern {
    source: String,
    flags: PatternFlags,
}

impl BuiltPattern {
    fn compile(&self, options: &EngineOptions) -> Result<Arc<Regex>, CharClassError> {
        get_or_compile(&self.source, self.flags, options)
    }
}

/// A pattern matching the characters to strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacePattern(BuiltPattern);

/// A pattern the whole subject must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPattern(BuiltPattern);

impl ReplacePattern {
    pub fn source(&self) -> &str {
        &self.0.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.0.flags
    }

    pub fn compile(&self, options: &EngineOptions) -> Result<Arc<Regex>, CharClassError> {
        self.0.compile(options)
    }
}

impl MatchPattern {
    pub fn source(&self) -> &str {
        &self.0.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.0.flags
    }

    pub fn compile(&self, options: &EngineOptions) -> Result<Arc<Regex>, CharClassError> {
        self.0.compile(options)
    }
}

/// Builds a replace-shaped pattern. With [`Framing::replace`] the result matches
/// every maximal run of characters not in `fragment`.
pub fn build_replace_pattern(fragment: &str, framing: Framing<'_>) -> ReplacePattern {
    let mut source = String::with_capacity(framing.prefix.len() + fragment.len() + framing.suffix.len());
    source.push_str(framing.prefix);
    source.push_str(fragment);
    source.push_str(framing.suffix);
    ReplacePattern(BuiltPattern {
        source,
        flags: framing.flags,
    })
}

/// Builds a match-shaped pattern. When `allow_whitespace` is set the whitespace
/// token goes directly after the prefix, so inside a bracket class it widens the
/// set rather than adding an alternative.
pub fn build_match_pattern(fragment: &str, allow_whitespace: bool, framing: Framing<'_>) -> MatchPattern {
    let whitespace = if allow_whitespace { WHITESPACE } else { "" };
    let mut source = String::with_capacity(
        framing.prefix.len() + whitespace.len() + fragment.len() + framing.suffix.len(),
    );
    source.push_str(framing.prefix);
    source.push_str(whitespace);
    source.push_str(fragment);
    source.push_str(framing.suffix);
    MatchPattern(BuiltPattern {
        source,
        flags: framing.flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ALPHA, ALPHADASH, NUMERIC, UUID};

    #[test]
    fn replace_pattern_negates_the_fragment() {
        let pattern = build_replace_pattern(ALPHA, Framing::replace());
        assert_eq!(pattern.source(), r"[^\pL\pM]+");
        assert!(!pattern.flags().case_insensitive);
    }

    #[test]
    fn match_pattern_is_anchored() {
        let pattern = build_match_pattern(ALPHA, false, Framing::matching());
        assert_eq!(pattern.source(), r"^[\pL\pM]+$");
    }

    #[test]
    fn whitespace_extends_the_bracket_set() {
        let pattern = build_match_pattern(ALPHADASH, true, Framing::matching());
        assert_eq!(pattern.source(), r"^[\s\pL\pM\pN._\-]+$");
    }

    #[test]
    fn whitespace_ahead_of_numeric_still_compiles() {
        let pattern = build_match_pattern(NUMERIC, true, Framing::matching());
        assert!(pattern.compile(&EngineOptions::default()).is_ok());
    }

    #[test]
    fn custom_framing_embeds_a_structured_pattern() {
        let pattern = build_match_pattern(UUID, false, Framing::exact().case_insensitive());
        assert!(pattern.source().starts_with("^(?:[0-9a-f]{8}-"));
        assert!(pattern.source().ends_with("{12})$"));
        assert!(pattern.flags().case_insensitive);
    }

    #[test]
    fn building_is_deterministic() {
        let a = build_match_pattern(ALPHA, true, Framing::matching());
        let b = build_match_pattern(ALPHA, true, Framing::matching());
        assert_eq!(a, b);
    }
}
