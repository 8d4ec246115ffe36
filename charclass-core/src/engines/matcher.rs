// charclass-core/src/engines/matcher.rs
//! Whole-subject matching and capture gluing.
//!
//! The engine answers with a tri-state [`MatchOutcome`]. Compilation failures
//! come back as `Err`, and an attempt that cannot be made on the given input is
//! `Inconclusive`. Only at the public boundary does that collapse to `bool`.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::EngineOptions;
use crate::errors::CharClassError;
use crate::patterns::builder::{build_match_pattern, Framing, MatchPattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    NoMatch,
    /// The subject could not be examined at all, e.g. it is not valid UTF-8.
    Inconclusive,
}

impl MatchOutcome {
    pub fn is_match(self) -> bool {
        matches!(self, MatchOutcome::Matched)
    }
}

impl From<bool> for MatchOutcome {
    fn from(matched: bool) -> Self {
        if matched {
            MatchOutcome::Matched
        } else {
            MatchOutcome::NoMatch
        }
    }
}

pub fn evaluate(subject: &str, pattern: &MatchPattern, options: &EngineOptions) -> Result<MatchOutcome, CharClassError> {
    let regex = pattern.compile(options)?;
    Ok(regex.is_match(subject).into())
}

/// Like [`evaluate`], for raw bytes. Invalid UTF-8 is `Inconclusive`.
pub fn evaluate_bytes(subject: &[u8], pattern: &MatchPattern, options: &EngineOptions) -> Result<MatchOutcome, CharClassError> {
    match std::str::from_utf8(subject) {
        Ok(text) => evaluate(text, pattern, options),
        Err(e) => {
            debug!("Subject is not valid UTF-8 ({}); match is inconclusive.", e);
            Ok(MatchOutcome::Inconclusive)
        }
    }
}

/// True iff the whole subject satisfies `fragment` under `framing`.
pub fn matches(
    subject: &str,
    fragment: &str,
    allow_whitespace: bool,
    framing: Framing<'_>,
    options: &EngineOptions,
) -> Result<bool, CharClassError> {
    let pattern = build_match_pattern(fragment, allow_whitespace, framing);
    Ok(evaluate(subject, &pattern, options)?.is_match())
}

/// Runs a capturing match and returns every group after the whole-match one.
/// Groups that did not take part come back empty. `None` means no match.
pub fn capture_groups(
    subject: &str,
    fragment: &str,
    allow_whitespace: bool,
    framing: Framing<'_>,
    options: &EngineOptions,
) -> Result<Option<Vec<String>>, CharClassError> {
    let pattern = build_match_pattern(fragment, allow_whitespace, framing);
    let regex = pattern.compile(options)?;
    let Some(captures) = regex.captures(subject) else {
        return Ok(None);
    };
    let groups = captures
        .iter()
        .skip(1)
        .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
        .collect();
    Ok(Some(groups))
}

/// Joins the captured groups with `separator`. A failed match glues nothing
/// and yields the empty string.
pub fn glue(
    subject: &str,
    fragment: &str,
    separator: &str,
    allow_whitespace: bool,
    framing: Framing<'_>,
    options: &EngineOptions,
) -> Result<String, CharClassError> {
    match capture_groups(subject, fragment, allow_whitespace, framing, options)? {
        Some(groups) => Ok(groups.join(separator)),
        None => {
            debug!("Glue pattern did not match; returning empty string.");
            Ok(String::new())
        }
    }
}
