//! Lint command handler.

use crate::cli::args::Cli;
use crate::config::PolicyConfig;
use crate::discovery::FsSource;
use crate::error::{ExitCode, Result};
use crate::lint::Linter;
use crate::report::Reporter;
use crate::validator::RouteFileValidator;

/// Usage line printed when no paths are given.
pub const USAGE: &str = "usage: routelint [OPTIONS] <PATH>... (files, directories, or glob patterns)";

/// Lints every path named on the command line and returns the exit code.
///
/// # Errors
///
/// Returns [`RouteLintError::Config`](crate::error::RouteLintError::Config)
/// if the policy file cannot be loaded. Lint failures are not errors; they
/// are reported through the exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    if cli.paths.is_empty() {
        eprintln!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    }

    let policy = match &cli.policy {
        Some(path) => PolicyConfig::load(path)?,
        None => PolicyConfig::default(),
    };
    tracing::info!(
        required = ?policy.required_fields(),
        fallback_id = policy.fallback_id(),
        "lint policy"
    );

    let linter = Linter::new(
        RouteFileValidator::new(policy),
        FsSource::new(&cli.extension),
    );
    let mut reporter = Reporter::stdout(cli.format);
    let summary = linter.run(&cli.paths, &mut reporter);

    Ok(if summary.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
