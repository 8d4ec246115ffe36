// charclass/src/cli.rs
//! This file defines the command-line interface (CLI) for the charclass application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "charclass",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter and validate text by character class",
    long_about = "charclass strips text down to a character class (alpha, alphadash, alphanumeric, digits, numeric), regroups UUIDs and IP addresses into canonical form, and checks whether input wholly belongs to a class. Custom bracket classes can be supplied through a YAML config file.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML file with engine options and custom classes.
    #[arg(long = "config", value_name = "FILE", global = true, env = "CHARCLASS_CONFIG", help = "Path to a YAML file with engine options and custom classes.")]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `charclass` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Strips input down to a class, regrouping structured formats.
    #[command(about = "Strip input down to a character class.")]
    Filter(FilterCommand),

    /// Checks whether input wholly belongs to a class.
    #[command(about = "Check whether input wholly belongs to a character class.")]
    Check(CheckCommand),

    /// Lists every class name the engine answers to.
    #[command(about = "List built-in and configured class names.")]
    Classes,
}

/// Arguments for the `filter` command.
#[derive(Parser, Debug)]
pub struct FilterCommand {
    /// Class name: alpha, alphadash, alphanumeric, digits, numeric, uuid, ip, ipv4, ipv6 or a custom class.
    #[arg(value_name = "CLASS")]
    pub class: String,

    /// Text to filter (reads stdin line by line if not provided).
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Replacement for each run of stripped characters. Ignored by structured classes.
    #[arg(long, short = 'r', value_name = "STR", default_value = "", help = "Replacement for each stripped run.")]
    pub replace: String,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Class name, as for `filter`.
    #[arg(value_name = "CLASS")]
    pub class: String,

    /// Text to check (reads stdin line by line if not provided).
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Treat whitespace as part of the class. Ignored by structured classes.
    #[arg(long, short = 'w', help = "Treat whitespace as part of the class.")]
    pub allow_whitespace: bool,
}
