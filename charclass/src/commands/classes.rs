//! `classes` command: lists the class names an engine answers to.

use anyhow::Result;
use std::io::Write;

use charclass_core::{ClassRef, Engine};

pub fn run_classes<W: Write>(engine: &Engine, out: &mut W) -> Result<()> {
    for name in engine.class_names() {
        let kind = match engine.resolve(&name)? {
            ClassRef::Builtin(class) if class.is_structured() => "structured",
            ClassRef::Builtin(_) => "class",
            ClassRef::Custom(custom) => custom.description.as_deref().unwrap_or("custom"),
        };
        writeln!(out, "{:<14}{}", name, kind)?;
    }
    Ok(())
}
