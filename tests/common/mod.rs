//! Shared integration-test harness for running the `routelint` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the built `routelint` binary.
pub struct RouteLintProcess;

impl RouteLintProcess {
    /// Runs `routelint` with `args` and waits for it to exit.
    ///
    /// Logging is silenced so stderr only carries usage and fatal errors.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_routelint"))
            .args(args)
            .env_remove("ROUTELINT_LOG_LEVEL")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run routelint")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Returns a fixture path as a `String` argument.
    #[must_use]
    pub fn fixture_arg(name: &str) -> String {
        Self::fixture_path(name)
            .to_str()
            .expect("non-UTF-8 fixture path")
            .to_string()
    }
}

/// Captured stdout as lines.
#[must_use]
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}
