// charclass-core/src/engines/mod.rs
//! Execution of built patterns.
//!
//! * `matcher`: whole-subject conformance checks and capture-and-glue.
//! * `filter`: stripping disallowed runs and reassembling structured formats.

pub mod filter;
pub mod matcher;
