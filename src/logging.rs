//! Tracing subscriber setup
//!
//! `RUST_LOG` always wins; otherwise the level comes from `-v` flags.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Plain text appended to a file
    File(&'a Path),
    /// Standard error
    Stderr,
    /// Standard error, errors only, so a full-screen UI is not overdrawn
    StderrQuiet,
}

/// Default filter directive for a verbosity count
#[must_use]
pub fn default_directive(verbosity: u8, target: LogTarget<'_>) -> String {
    let level = match (target, verbosity) {
        (LogTarget::StderrQuiet, _) => "error",
        (_, 0) => "warn",
        (_, 1) => "info",
        (_, 2) => "debug",
        _ => "trace",
    };
    format!("wordle_game={level},wordle={level}")
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init(verbosity: u8, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, target)));
    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()?;
        }
        LogTarget::Stderr | LogTarget::StderrQuiet => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    tracing::trace!("logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(
            default_directive(0, LogTarget::Stderr),
            "wordle_game=warn,wordle=warn"
        );
        assert_eq!(
            default_directive(2, LogTarget::Stderr),
            "wordle_game=debug,wordle=debug"
        );
        assert_eq!(
            default_directive(9, LogTarget::File(Path::new("x.log"))),
            "wordle_game=trace,wordle=trace"
        );
    }

    #[test]
    fn quiet_target_ignores_verbosity() {
        assert_eq!(
            default_directive(3, LogTarget::StderrQuiet),
            "wordle_game=error,wordle=error"
        );
    }
}
