//! Error types for `routelint`
//!
//! Lint findings are never errors: everything wrong with a router file is
//! reported as a [`Finding`](crate::validator::Finding). The types here cover
//! failures of the run itself (bad policy file, bad glob argument) and map
//! them to process exit codes.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `routelint` invocations.
pub struct ExitCode;

impl ExitCode {
    /// Every expanded file passed.
    pub const SUCCESS: i32 = 0;

    /// At least one file failed, or no path arguments were given.
    pub const FAILURE: i32 = 1;

    /// Policy configuration could not be loaded.
    pub const CONFIG_ERROR: i32 = 2;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `routelint` operations.
#[derive(Debug, Error)]
pub enum RouteLintError {
    /// Policy configuration loading error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RouteLintError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Policy file loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Policy file could not be read
    #[error("cannot read policy file {path}: {source}")]
    Read {
        /// Path to the policy file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the policy file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Discovery Errors
// ============================================================================

/// Errors raised while expanding a path argument into file paths.
///
/// These never abort a run: the linter reports them as findings against the
/// offending argument.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Argument is not a valid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending argument
        pattern: String,
        /// Error message from the glob parser
        message: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `routelint` operations.
pub type Result<T> = std::result::Result<T, RouteLintError>;

// ============================================================================
// Tests
// ============================================================================
