// charclass/src/main.rs
//! charclass entry point.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use charclass::cli::{Cli, Commands};
use charclass::commands::{check::run_check, classes::run_classes, filter::run_filter};
use charclass::{build_engine, logger};

fn run(args: Cli) -> Result<bool> {
    let engine = build_engine(args.config.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let success = match args.command {
        Commands::Filter(cmd) => {
            run_filter(&engine, &cmd.class, cmd.text.as_deref(), &cmd.replace, stdin.lock(), &mut out)?;
            true
        }
        Commands::Check(cmd) => {
            run_check(&engine, &cmd.class, cmd.text.as_deref(), cmd.allow_whitespace, stdin.lock(), &mut out)?
        }
        Commands::Classes => {
            run_classes(&engine, &mut out)?;
            true
        }
    };
    out.flush()?;
    Ok(success)
}

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
