//! Finding, severity, and verdict types.

use std::fmt;

use serde::Serialize;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the file.
    Error,
    /// Reported, never fails the file.
    Warn,
}

impl Severity {
    /// Upper-case label used in human output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
        }
    }
}

/// What class of problem a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Unreadable file, invalid JSON, or missing `routes` array. Aborts the file.
    StructuralError,
    /// Route is missing required fields or is not an object.
    SchemaError,
    /// Route pattern does not compile.
    PatternError,
    /// Route fallback differs from the accepted identifier.
    PolicyWarning,
    /// Several routes share one precedence value.
    PrecedenceWarning,
}

impl FindingKind {
    /// Severity implied by this kind.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::StructuralError | Self::SchemaError | Self::PatternError => Severity::Error,
            Self::PolicyWarning | Self::PrecedenceWarning => Severity::Warn,
        }
    }
}

/// One reported issue with file and route context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// ERROR or WARN.
    pub severity: Severity,
    /// Taxonomy of the issue.
    pub kind: FindingKind,
    /// Identifier of the originating file (usually its path).
    pub file: String,
    /// 1-based route index, or `None` for file-level findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    /// Creates a finding whose severity is derived from `kind`.
    #[must_use]
    pub fn new(
        kind: FindingKind,
        file: impl Into<String>,
        route: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            file: file.into(),
            route,
            message: message.into(),
        }
    }

    /// Returns `true` for ERROR-severity findings.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {}", self.severity.label(), self.file)?;
        if let Some(route) = self.route {
            write!(f, " route[{route}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Per-file outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No ERROR findings.
    Pass,
    /// At least one ERROR finding.
    Fail,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Pass`].
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// All findings for one file plus its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Findings in discovery order.
    pub findings: Vec<Finding>,
    /// PASS iff `findings` holds no ERROR.
    pub verdict: Verdict,
}

impl FileReport {
    /// Number of ERROR findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    /// Number of WARN findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.findings.len() - self.error_count()
    }
}
