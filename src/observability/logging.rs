//! Diagnostic log setup.
//!
//! Logs go to stderr so they never interleave with findings on stdout.
//! `-v` flags pick the level; `ROUTELINT_LOG_LEVEL` replaces the flags with
//! a full `EnvFilter` directive when set.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_LEVEL_ENV: &str = "ROUTELINT_LOG_LEVEL";

/// Levels selected by zero, one, two, and three or more `-v` flags.
const LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];

/// Log line encoding on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Plain text, colored when stderr is a terminal.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

fn level_for(verbosity: u8) -> &'static str {
    LEVELS[usize::from(verbosity).min(LEVELS.len() - 1)]
}

fn ansi_enabled(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => stderr_is_terminal && !no_color,
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter =
        EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    // A subscriber is already installed when this fails; keep it.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => {
            let ansi = ansi_enabled(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            builder.with_ansi(ansi).try_init()
        }
    };
}
