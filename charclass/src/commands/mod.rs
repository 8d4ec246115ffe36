// charclass/src/commands/mod.rs
pub mod check;
pub mod classes;
pub mod filter;
