//! CLI argument definitions
//!
//! Clap derive structs for `routelint` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::discovery::DEFAULT_EXTENSION;
use crate::observability::LogFormat;
use crate::report::ReportFormat;

/// Lint support-dialogue router files.
///
/// Each PATH may be a file, a directory (searched recursively for files
/// with the recognized extension), or a glob pattern. Exits 0 when every
/// file passes and 1 when any file fails.
#[derive(Parser, Debug)]
#[command(name = "routelint", author, version, about)]
pub struct Cli {
    /// Router files, directories, or glob patterns to lint.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Output format for findings.
    #[arg(short, long, default_value = "human")]
    pub format: ReportFormat,

    /// YAML policy file overriding the required fields and accepted fallback.
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// File extension recognized when expanding directories.
    #[arg(long, default_value = DEFAULT_EXTENSION, value_name = "EXT")]
    pub extension: String,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output on stderr. Findings are still printed.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "ROUTELINT_COLOR")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

// ============================================================================
// Tests
// ============================================================================
