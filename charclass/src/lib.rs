// charclass/src/lib.rs
//! # charclass CLI Application
//!
//! Command-line front end for `charclass-core`: filter or check text by
//! character class, from arguments or stdin.

pub mod cli;
pub mod commands;
pub mod logger;

use anyhow::{Context, Result};
use charclass_core::{Engine, EngineOptions};
use log::debug;
use std::path::Path;

/// Builds the engine, loading options from `config` when given.
pub fn build_engine(config: Option<&Path>) -> Result<Engine> {
    let Some(path) = config else {
        debug!("No config file given; using default engine options.");
        return Ok(Engine::new());
    };
    let options = EngineOptions::load_from_file(path)?;
    Engine::with_options(options)
        .with_context(|| format!("Failed to build engine from {}", path.display()))
}
