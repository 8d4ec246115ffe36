//! `check` command: reports whether input wholly belongs to a class.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use charclass_core::Engine;

/// Checks `text`, or each line of `input` as raw bytes, printing `true` or
/// `false` per subject. Returns whether every subject conformed.
pub fn run_check<R: BufRead, W: Write>(
    engine: &Engine,
    class: &str,
    text: Option<&str>,
    allow_whitespace: bool,
    input: R,
    out: &mut W,
) -> Result<bool> {
    let resolved = engine.resolve(class)?;
    info!("Checking against class '{}'.", resolved.name());

    if let Some(text) = text {
        let conforms = engine.check_named(class, text, allow_whitespace)?;
        writeln!(out, "{conforms}")?;
        return Ok(conforms);
    }

    let mut all_conform = true;
    let mut lines = 0usize;
    for line in input.split(b'\n') {
        let mut line = line.context("Failed to read line from stdin")?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let outcome = engine.check_outcome(resolved, &line, allow_whitespace)?;
        debug!("Line {}: {:?}", lines + 1, outcome);
        let conforms = outcome.is_match();
        writeln!(out, "{conforms}")?;
        all_conform &= conforms;
        lines += 1;
    }
    debug!("Checked {} lines.", lines);
    Ok(all_conform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_line() {
        let mut out = Vec::new();
        let all = run_check(&Engine::new(), "ipv4", None, false, "0.0.0.0\n256.1.1.1\r\n".as_bytes(), &mut out).unwrap();
        assert!(!all);
        assert_eq!(String::from_utf8(out).unwrap(), "true\nfalse\n");
    }

    #[test]
    fn invalid_utf8_lines_do_not_conform() {
        let mut out = Vec::new();
        let all = run_check(&Engine::new(), "alpha", None, false, &b"abc\n\xff\xfe\n"[..], &mut out).unwrap();
        assert!(!all);
        assert_eq!(String::from_utf8(out).unwrap(), "true\nfalse\n");
    }

    #[test]
    fn whitespace_flag_is_forwarded() {
        let mut out = Vec::new();
        let all = run_check(&Engine::new(), "alpha", Some("Ab cd"), true, &b""[..], &mut out).unwrap();
        assert!(all);
    }
}
