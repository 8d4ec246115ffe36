// charclass/src/logger.rs
//! Logger setup for the binary. `RUST_LOG` applies unless a level is forced.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises `env_logger`. `Some(level)` overrides `RUST_LOG`; `None` falls
/// back to it with a default of `warn`. Safe to call more than once.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

/// Maps the `--quiet` and `--debug` flags to a forced level.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
