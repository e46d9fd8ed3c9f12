//! Router file validation
//!
//! [`RouteFileValidator`] runs one linear pass over a router file:
//!
//! 1. Parse the raw text as JSON.
//! 2. Require a top-level `routes` array.
//! 3. Per route: required fields, fallback policy, pattern compilation,
//!    precedence collection.
//! 4. Report precedence values shared by more than one route.
//!
//! Steps 1 and 2 abort the file on failure. Every other check runs to
//! completion so one invocation surfaces every problem in the file.

pub mod document;
pub mod finding;

pub use finding::{FileReport, Finding, FindingKind, Severity, Verdict};

use indexmap::IndexMap;
use fancy_regex::RegexBuilder;
use serde_json::{Map, Value};

use crate::config::PolicyConfig;

// ============================================================================
// Validator
// ============================================================================

/// Validates router files against a fixed [`PolicyConfig`].
///
/// The validator holds no per-file state; one instance can check any number
/// of files, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct RouteFileValidator {
    policy: PolicyConfig,
}

impl RouteFileValidator {
    /// Creates a validator bound to `policy`.
    #[must_use]
    pub const fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// The policy this validator enforces.
    #[must_use]
    pub const fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Validates `raw` and returns every finding plus the verdict.
    ///
    /// `file` is the identifier copied into each finding.
    #[must_use]
    pub fn validate(&self, file: &str, raw: &str) -> FileReport {
        let mut findings = Vec::new();
        let verdict = self.validate_with(file, raw, |finding| findings.push(finding.clone()));
        FileReport { findings, verdict }
    }

    /// Validates `raw`, handing each finding to `on_finding` as soon as it is
    /// discovered.
    ///
    /// Findings arrive in the same order [`validate`](Self::validate) returns
    /// them.
    pub fn validate_with<F>(&self, file: &str, raw: &str, on_finding: F) -> Verdict
    where
        F: FnMut(&Finding),
    {
        let mut sink = FindingSink::new(file, on_finding);

        let parsed: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                sink.error(FindingKind::StructuralError, None, format!("invalid JSON: {e}"));
                return sink.verdict();
            }
        };

        let routes = match document::routes(&parsed) {
            Ok(routes) => routes,
            Err(message) => {
                sink.error(FindingKind::StructuralError, None, message);
                return sink.verdict();
            }
        };

        tracing::debug!(file, routes = routes.len(), "checking routes");

        let mut precedence_seen: IndexMap<i128, Vec<usize>> = IndexMap::new();

        for (idx, route) in routes.iter().enumerate().map(|(i, r)| (i + 1, r)) {
            let Some(entry) = route.as_object() else {
                sink.error(
                    FindingKind::SchemaError,
                    Some(idx),
                    format!("route must be an object, found {}", document::type_name(route)),
                );
                continue;
            };

            self.check_required_fields(&mut sink, idx, entry);
            self.check_fallback(&mut sink, idx, entry);
            check_pattern(&mut sink, idx, entry);

            if let Some(precedence) = document::precedence(entry) {
                precedence_seen.entry(precedence).or_default().push(idx);
            }
        }

        for (precedence, indices) in &precedence_seen {
            if indices.len() > 1 {
                sink.warn(
                    FindingKind::PrecedenceWarning,
                    None,
                    format!("precedence {precedence} used by routes {indices:?}"),
                );
            }
        }

        sink.verdict()
    }

    fn check_required_fields<F: FnMut(&Finding)>(
        &self,
        sink: &mut FindingSink<'_, F>,
        idx: usize,
        entry: &Map<String, Value>,
    ) {
        let missing = document::missing_fields(entry, self.policy.required_fields());
        if !missing.is_empty() {
            sink.error(
                FindingKind::SchemaError,
                Some(idx),
                format!("missing required fields: {}", missing.join(", ")),
            );
        }
    }

    fn check_fallback<F: FnMut(&Finding)>(
        &self,
        sink: &mut FindingSink<'_, F>,
        idx: usize,
        entry: &Map<String, Value>,
    ) {
        let accepted = self.policy.fallback_id();
        let actual = entry.get(document::FALLBACK_KEY);
        if actual.and_then(Value::as_str) != Some(accepted) {
            sink.warn(
                FindingKind::PolicyWarning,
                Some(idx),
                format!(
                    "fallback {} does not match accepted '{accepted}'",
                    document::describe_value(actual)
                ),
            );
        }
    }
}

/// Compiled-program size cap for route patterns.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiles the route pattern case-insensitively. An absent pattern is
/// checked as the empty string.
///
/// Look-around and backreferences are accepted; router patterns are authored
/// for backtracking engines and use both.
fn check_pattern<F: FnMut(&Finding)>(
    sink: &mut FindingSink<'_, F>,
    idx: usize,
    entry: &Map<String, Value>,
) {
    let pattern = match entry.get(document::PATTERN_KEY) {
        None => "",
        Some(Value::String(pattern)) => pattern.as_str(),
        Some(other) => {
            sink.error(
                FindingKind::PatternError,
                Some(idx),
                format!("pattern must be a string, found {}", document::type_name(other)),
            );
            return;
        }
    };

    let compiled = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .delegate_size_limit(PATTERN_SIZE_LIMIT)
        .build();
    if let Err(e) = compiled {
        sink.error(
            FindingKind::PatternError,
            Some(idx),
            format!("invalid regex: {}", regex_message(&e)),
        );
    }
}

/// Condenses a regex error to one line.
///
/// Syntax errors from the inner engine render as a multi-line diagram ending
/// in `error: <reason>`; only the reason is kept so each finding stays on a
/// single output line.
fn regex_message(err: &fancy_regex::Error) -> String {
    let text = err.to_string();
    text.lines()
        .rev()
        .find_map(|line| line.trim_start().strip_prefix("error: "))
        .map_or_else(
            || text.split_whitespace().collect::<Vec<_>>().join(" "),
            |reason| reason.trim().to_string(),
        )
}

// ============================================================================
// Finding Sink
// ============================================================================

/// Builds findings for one file, forwards them, and tracks the verdict.
struct FindingSink<'a, F> {
    file: &'a str,
    on_finding: F,
    failed: bool,
}

impl<'a, F: FnMut(&Finding)> FindingSink<'a, F> {
    const fn new(file: &'a str, on_finding: F) -> Self {
        Self {
            file,
            on_finding,
            failed: false,
        }
    }

    fn error(&mut self, kind: FindingKind, route: Option<usize>, message: String) {
        self.failed = true;
        self.emit(kind, route, message);
    }

    fn warn(&mut self, kind: FindingKind, route: Option<usize>, message: String) {
        self.emit(kind, route, message);
    }

    fn emit(&mut self, kind: FindingKind, route: Option<usize>, message: String) {
        let finding = Finding::new(kind, self.file, route, message);
        (self.on_finding)(&finding);
    }

    const fn verdict(&self) -> Verdict {
        if self.failed { Verdict::Fail } else { Verdict::Pass }
    }
}

// ============================================================================
// Tests
// ============================================================================
