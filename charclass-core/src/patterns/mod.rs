//! Pattern assembly and compilation.
//!
//! `builder` turns a catalog fragment plus a [`builder::Framing`] into a
//! replace-shaped or match-shaped pattern. `compiler` turns those into compiled
//! regexes, sharing them through a process-wide cache.

pub mod builder;
pub mod compiler;
