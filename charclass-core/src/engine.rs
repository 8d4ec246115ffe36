// charclass-core/src/engine.rs
//! The `Engine` facade: every public operation bound to one set of options.
//!
//! Each operation selects a catalog fragment or structured pattern, frames it
//! with the builder and runs it through the filter or match engine. An engine
//! is immutable once built and can be shared freely between threads.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::catalog::{
    CharClass, ALPHA, ALPHADASH, ALPHANUMERIC, DIGITS, IPV4, IPV6, NUMERIC, UUID,
};
use crate::config::{CustomClass, EngineOptions};
use crate::engines::{filter, matcher};
use crate::engines::matcher::MatchOutcome;
use crate::errors::CharClassError;
use crate::patterns::builder::{build_match_pattern, Framing, MatchPattern};

/// A class name resolved against the built-in catalog and the engine's custom classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRef<'a> {
    Builtin(CharClass),
    Custom(&'a CustomClass),
}

impl ClassRef<'_> {
    pub fn name(&self) -> &str {
        match self {
            ClassRef::Builtin(class) => class.name(),
            ClassRef::Custom(custom) => &custom.name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an engine after validating the options' custom classes.
    pub fn with_options(options: EngineOptions) -> Result<Self, CharClassError> {
        options.validate()?;
        debug!(
            "Engine created with {} custom classes (cache_patterns: {}).",
            options.custom_classes.len(),
            options.cache_patterns
        );
        Ok(Self { options })
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    // Low-level building blocks.

    pub fn replace(
        &self,
        subject: &str,
        fragment: &str,
        replacement: &str,
        framing: Framing<'_>,
    ) -> Result<String, CharClassError> {
        filter::replace(subject, fragment, replacement, framing, &self.options)
    }

    pub fn matches(
        &self,
        subject: &str,
        fragment: &str,
        allow_whitespace: bool,
        framing: Framing<'_>,
    ) -> Result<bool, CharClassError> {
        matcher::matches(subject, fragment, allow_whitespace, framing, &self.options)
    }

    pub fn glue(
        &self,
        subject: &str,
        pattern: &str,
        separator: &str,
        allow_whitespace: bool,
        framing: Framing<'_>,
    ) -> Result<String, CharClassError> {
        matcher::glue(subject, pattern, separator, allow_whitespace, framing, &self.options)
    }

    // Filters.

    pub fn alpha(&self, subject: &str, replacement: &str) -> Result<String, CharClassError> {
        self.replace(subject, ALPHA, replacement, Framing::replace())
    }

    pub fn alphadash(&self, subject: &str, replacement: &str) -> Result<String, CharClassError> {
        self.replace(subject, ALPHADASH, replacement, Framing::replace())
    }

    pub fn alphanumeric(&self, subject: &str, replacement: &str) -> Result<String, CharClassError> {
        self.replace(subject, ALPHANUMERIC, replacement, Framing::replace())
    }

    pub fn digits(&self, subject: &str, replacement: &str) -> Result<String, CharClassError> {
        self.replace(subject, DIGITS, replacement, Framing::replace())
    }

    pub fn numeric(&self, subject: &str, replacement: &str) -> Result<String, CharClassError> {
        self.replace(subject, NUMERIC, replacement, Framing::replace())
    }

    pub fn uuid(&self, subject: &str) -> Result<String, CharClassError> {
        filter::uuid(subject, &self.options)
    }

    pub fn ipv4(&self, subject: &str) -> Result<String, CharClassError> {
        filter::ipv4(subject, &self.options)
    }

    pub fn ip(&self, subject: &str) -> Result<String, CharClassError> {
        self.ipv4(subject)
    }

    pub fn ipv6(&self, subject: &str) -> Result<String, CharClassError> {
        filter::ipv6(subject, &self.options)
    }

    // Matchers.

    pub fn is_alpha(&self, subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
        self.matches(subject, ALPHA, allow_whitespace, Framing::matching())
    }

    pub fn is_alphadash(&self, subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
        self.matches(subject, ALPHADASH, allow_whitespace, Framing::matching())
    }

    pub fn is_alphanumeric(&self, subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
        self.matches(subject, ALPHANUMERIC, allow_whitespace, Framing::matching())
    }

    pub fn is_digits(&self, subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
        self.matches(subject, DIGITS, allow_whitespace, Framing::matching())
    }

    pub fn is_numeric(&self, subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
        self.matches(subject, NUMERIC, allow_whitespace, Framing::matching())
    }

    pub fn is_uuid(&self, subject: &str) -> Result<bool, CharClassError> {
        self.matches(subject, UUID, false, Framing::exact().case_insensitive())
    }

    pub fn is_ipv4(&self, subject: &str) -> Result<bool, CharClassError> {
        self.matches(subject, IPV4, false, Framing::exact())
    }

    pub fn is_ip(&self, subject: &str) -> Result<bool, CharClassError> {
        self.is_ipv4(subject)
    }

    pub fn is_ipv6(&self, subject: &str) -> Result<bool, CharClassError> {
        self.matches(subject, IPV6, false, Framing::exact().case_insensitive())
    }

    // Dispatch by class.

    /// Filters `subject` down to `class`. Structured classes ignore `replacement`.
    pub fn filter_class(&self, class: CharClass, subject: &str, replacement: &str) -> Result<String, CharClassError> {
        match class {
            CharClass::Alpha => self.alpha(subject, replacement),
            CharClass::Alphadash => self.alphadash(subject, replacement),
            CharClass::Alphanumeric => self.alphanumeric(subject, replacement),
            CharClass::Digits => self.digits(subject, replacement),
            CharClass::Numeric => self.numeric(subject, replacement),
            CharClass::Uuid => self.uuid(subject),
            CharClass::Ipv4 => self.ipv4(subject),
            CharClass::Ipv6 => self.ipv6(subject),
        }
    }

    /// Checks `subject` against `class`. Structured classes ignore `allow_whitespace`.
    pub fn check_class(&self, class: CharClass, subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
        let pattern = self.match_pattern(ClassRef::Builtin(class), allow_whitespace);
        Ok(matcher::evaluate(subject, &pattern, &self.options)?.is_match())
    }

    /// Byte-level [`Engine::check_class`]; invalid UTF-8 never matches.
    pub fn check_bytes(&self, class: CharClass, subject: &[u8], allow_whitespace: bool) -> Result<bool, CharClassError> {
        Ok(self.check_outcome(ClassRef::Builtin(class), subject, allow_whitespace)?.is_match())
    }

    // Named classes, built-in first, then custom.

    pub fn resolve(&self, name: &str) -> Result<ClassRef<'_>, CharClassError> {
        if let Ok(class) = name.parse::<CharClass>() {
            return Ok(ClassRef::Builtin(class));
        }
        self.options
            .find_custom_class(name)
            .map(ClassRef::Custom)
            .ok_or_else(|| CharClassError::UnknownClass(name.to_string()))
    }

    /// Every class name this engine answers to, built-ins first.
    pub fn class_names(&self) -> Vec<String> {
        CharClass::ALL
            .iter()
            .map(|class| class.name().to_string())
            .chain(self.options.custom_classes.iter().map(|c| c.name.clone()))
            .collect()
    }

    pub fn filter_named(&self, name: &str, subject: &str, replacement: &str) -> Result<String, CharClassError> {
        match self.resolve(name)? {
            ClassRef::Builtin(class) => self.filter_class(class, subject, replacement),
            ClassRef::Custom(custom) => self.replace(subject, &custom.fragment, replacement, Framing::replace()),
        }
    }

    pub fn check_named(&self, name: &str, subject: &str, allow_whitespace: bool) -> Result<bool, CharClassError> {
        let class = self.resolve(name)?;
        let pattern = self.match_pattern(class, allow_whitespace);
        Ok(matcher::evaluate(subject, &pattern, &self.options)?.is_match())
    }

    /// The un-collapsed outcome of matching raw bytes against a resolved class.
    pub fn check_outcome(&self, class: ClassRef<'_>, subject: &[u8], allow_whitespace: bool) -> Result<MatchOutcome, CharClassError> {
        let pattern = self.match_pattern(class, allow_whitespace);
        matcher::evaluate_bytes(subject, &pattern, &self.options)
    }

    fn match_pattern(&self, class: ClassRef<'_>, allow_whitespace: bool) -> MatchPattern {
        match class {
            ClassRef::Builtin(CharClass::Uuid) => build_match_pattern(UUID, false, Framing::exact().case_insensitive()),
            ClassRef::Builtin(CharClass::Ipv4) => build_match_pattern(IPV4, false, Framing::exact()),
            ClassRef::Builtin(CharClass::Ipv6) => build_match_pattern(IPV6, false, Framing::exact().case_insensitive()),
            ClassRef::Builtin(flat) => {
                // Only structured classes lack a fragment and they are handled above.
                let fragment = flat.fragment().unwrap_or_default();
                build_match_pattern(fragment, allow_whitespace, Framing::matching())
            }
            ClassRef::Custom(custom) => build_match_pattern(&custom.fragment, allow_whitespace, Framing::matching()),
        }
    }
}
