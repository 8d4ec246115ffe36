//! Configuration management for `charclass-core`.
//!
//! `EngineOptions` controls how patterns are compiled and cached, and carries the
//! custom classes an [`Engine`](crate::engine::Engine) exposes next to the
//! built-in catalog. Options are plain serde data and load from YAML.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::catalog::CharClass;
use crate::patterns::builder::{build_match_pattern, build_replace_pattern, Framing, PatternFlags};
use crate::patterns::compiler::compile_pattern;

/// Maximum allowed length for a custom fragment.
pub const MAX_FRAGMENT_LENGTH: usize = 500;

/// Default size limit for a compiled regex.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A user-defined bracket class, e.g. `{ name: hex, fragment: "0-9a-fA-F" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CustomClass {
    pub name: String,
    /// Body of a bracket class. A literal `-` must be escaped or placed last.
    pub fragment: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Size limit handed to the regex compiler, in bytes.
    pub size_limit: usize,
    /// Reuse compiled patterns across calls.
    pub cache_patterns: bool,
    /// Upper bound on the length of a custom fragment.
    pub max_fragment_length: usize,
    pub custom_classes: Vec<CustomClass>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
            cache_patterns: true,
            max_fragment_length: MAX_FRAGMENT_LENGTH,
            custom_classes: Vec::new(),
        }
    }
}

impl EngineOptions {
    /// Loads engine options from a YAML file and validates the custom classes.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading engine options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let options = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        info!(
            "Loaded {} custom classes from file {}.",
            options.custom_classes.len(),
            path.display()
        );
        Ok(options)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let options: EngineOptions =
            serde_yml::from_str(text).context("Failed to parse engine options")?;
        options.validate()?;
        Ok(options)
    }

    pub fn find_custom_class(&self, name: &str) -> Option<&CustomClass> {
        self.custom_classes.iter().find(|c| c.name == name)
    }

    /// Checks every custom class: naming, length and that the fragment builds
    /// into a valid pattern in both replace and match shape.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut errors = Vec::new();

        if self.size_limit == 0 {
            errors.push("`size_limit` must be greater than zero.".to_string());
        }

        for class in &self.custom_classes {
            if class.name.trim().is_empty() {
                errors.push("A custom class has an empty `name` field.".to_string());
                continue;
            }
            if class.name.parse::<CharClass>().is_ok() {
                errors.push(format!(
                    "Custom class '{}' shadows a built-in class.",
                    class.name
                ));
            }
            if !names.insert(class.name.as_str()) {
                warn!("Duplicate custom class name '{}'.", class.name);
                errors.push(format!("Duplicate custom class name found: '{}'.", class.name));
            }
            if class.fragment.is_empty() {
                errors.push(format!("Custom class '{}' has an empty `fragment` field.", class.name));
                continue;
            }
            if class.fragment.len() > self.max_fragment_length {
                errors.push(format!(
                    "Custom class '{}': fragment length ({}) exceeds maximum allowed ({}).",
                    class.name,
                    class.fragment.len(),
                    self.max_fragment_length
                ));
                continue;
            }

            let replace = build_replace_pattern(&class.fragment, Framing::replace());
            let matcher = build_match_pattern(&class.fragment, true, Framing::matching());
            for source in [replace.source(), matcher.source()] {
                if let Err(e) = compile_pattern(source, PatternFlags::default(), self.size_limit) {
                    errors.push(format!(
                        "Custom class '{}' has an invalid fragment: {}",
                        class.name, e
                    ));
                    break;
                }
            }
        }

        if errors.is_empty() {
            debug!("Validated {} custom classes.", self.custom_classes.len());
            Ok(())
        } else {
            Err(anyhow!("Engine options validation failed:\n{}", errors.join("\n")))
        }
    }
}
