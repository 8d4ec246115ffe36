//! `filter` command: strips input down to a class.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

use charclass_core::Engine;

/// Filters `text`, or each line of `input` when no text is given, writing one
/// result per line to `out`. Invalid UTF-8 in a line is replaced with U+FFFD
/// before filtering, which every built-in class then strips.
pub fn run_filter<R: BufRead, W: Write>(
    engine: &Engine,
    class: &str,
    text: Option<&str>,
    replacement: &str,
    input: R,
    out: &mut W,
) -> Result<()> {
    // Resolve once up front so an unknown class fails before any input is read.
    let resolved = engine.resolve(class)?;
    info!("Filtering with class '{}'.", resolved.name());

    if let Some(text) = text {
        let filtered = engine.filter_named(class, text, replacement)?;
        writeln!(out, "{filtered}")?;
        return Ok(());
    }

    let mut lines = 0usize;
    for line in input.split(b'\n') {
        let mut line = line.context("Failed to read line from stdin")?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let line = match String::from_utf8(line) {
            Ok(text) => text,
            Err(e) => {
                warn!("Line {} is not valid UTF-8; replacing invalid sequences.", lines + 1);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let filtered = engine
            .filter_named(class, &line, replacement)
            .with_context(|| format!("Failed to filter line {}", lines + 1))?;
        writeln!(out, "{filtered}")?;
        lines += 1;
    }
    debug!("Filtered {} lines.", lines);
    Ok(())
}
