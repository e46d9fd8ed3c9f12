//! Run loop: expand arguments, read files, validate, report.

use crate::discovery::FileSource;
use crate::report::Reporter;
use crate::validator::{Finding, FindingKind, RouteFileValidator, Verdict};

/// Aggregate outcome of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files validated (including unreadable ones).
    pub files: usize,
    /// Files and arguments that failed.
    pub failed: usize,
    /// ERROR findings across all files.
    pub errors: usize,
    /// WARN findings across all files.
    pub warnings: usize,
    /// Arguments that expanded to no files.
    pub unmatched: usize,
}

impl RunSummary {
    /// Returns `true` if nothing failed.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Drives a [`RouteFileValidator`] over every file named by the arguments.
#[derive(Debug)]
pub struct Linter<S> {
    validator: RouteFileValidator,
    source: S,
}

impl<S: FileSource> Linter<S> {
    /// Creates a linter reading files from `source`.
    #[must_use]
    pub const fn new(validator: RouteFileValidator, source: S) -> Self {
        Self { validator, source }
    }

    /// Lints every file the arguments expand to, streaming findings to
    /// `reporter` in argument, file, and route order.
    pub fn run<A: AsRef<str>>(&self, args: &[A], reporter: &mut Reporter) -> RunSummary {
        let mut summary = RunSummary::default();

        for arg in args {
            let arg = arg.as_ref();
            let paths = match self.source.expand(arg) {
                Ok(paths) => paths,
                Err(e) => {
                    let finding = Finding::new(FindingKind::StructuralError, arg, None, e.to_string());
                    Self::record(&mut summary, reporter, &finding);
                    summary.failed += 1;
                    continue;
                }
            };

            if paths.is_empty() {
                tracing::warn!(arg, "argument matched no files");
                summary.unmatched += 1;
                continue;
            }

            for path in paths {
                let file = path.display().to_string();
                summary.files += 1;

                let verdict = match self.source.read(&path) {
                    Ok(raw) => self.validator.validate_with(&file, &raw, |finding| {
                        Self::record(&mut summary, reporter, finding);
                    }),
                    Err(e) => {
                        let finding = Finding::new(
                            FindingKind::StructuralError,
                            file.as_str(),
                            None,
                            format!("cannot read file: {e}"),
                        );
                        Self::record(&mut summary, reporter, &finding);
                        Verdict::Fail
                    }
                };

                tracing::info!(file = %file, verdict = ?verdict, "validated");
                if !verdict.is_pass() {
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            files = summary.files,
            failed = summary.failed,
            errors = summary.errors,
            warnings = summary.warnings,
            "lint complete"
        );
        summary
    }

    fn record(summary: &mut RunSummary, reporter: &mut Reporter, finding: &Finding) {
        if finding.is_error() {
            summary.errors += 1;
        } else {
            summary.warnings += 1;
        }
        reporter.report(finding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiscoveryError;
    use crate::report::ReportFormat;
    use std::collections::BTreeMap;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    /// In-memory tree: arguments map to paths, paths map to contents.
    #[derive(Default)]
    struct MemorySource {
        expansions: BTreeMap<String, Vec<PathBuf>>,
        files: BTreeMap<PathBuf, String>,
    }

    impl MemorySource {
        fn file(mut self, path: &str, contents: &str) -> Self {
            self.expansions
                .entry(path.to_string())
                .or_default()
                .push(PathBuf::from(path));
            self.files.insert(PathBuf::from(path), contents.to_string());
            self
        }

        fn dir(mut self, arg: &str, paths: &[&str]) -> Self {
            self.expansions
                .insert(arg.to_string(), paths.iter().map(PathBuf::from).collect());
            self
        }
    }

    impl FileSource for MemorySource {
        fn expand(&self, arg: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
            if arg.contains('[') {
                return Err(DiscoveryError::InvalidPattern {
                    pattern: arg.to_string(),
                    message: "invalid range pattern".to_string(),
                });
            }
            Ok(self
                .expansions
                .get(arg)
                .cloned()
                .unwrap_or_else(|| vec![PathBuf::from(arg)]))
        }

        fn read(&self, path: &Path) -> std::io::Result<String> {
            self.files.get(path).cloned().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory")
            })
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    const GOOD: &str = r#"{"routes": [{"pattern": "hi", "template_id": "t", "fallback": "tool_generic_support_intro"}]}"#;
    const BAD_REGEX: &str = r#"{"routes": [{"pattern": "(", "template_id": "t", "fallback": "tool_generic_support_intro"}]}"#;
    const WARN_ONLY: &str = r#"{"routes": [{"pattern": "a", "template_id": "t", "fallback": "other"}]}"#;

    fn run(source: MemorySource, args: &[&str]) -> (RunSummary, Vec<String>) {
        let buf = SharedBuf::default();
        let mut reporter = Reporter::new(Box::new(buf.clone()), ReportFormat::Human);
        let summary = Linter::new(RouteFileValidator::default(), source).run(args, &mut reporter);
        drop(reporter);
        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        (summary, out.lines().map(ToString::to_string).collect())
    }

    #[test]
    fn all_passing_files_succeed() {
        let source = MemorySource::default()
            .file("a.json", GOOD)
            .file("b.json", WARN_ONLY);
        let (summary, lines) = run(source, &["a.json", "b.json"]);
        assert!(summary.success());
        assert_eq!(summary.files, 2);
        assert_eq!(summary.warnings, 1);
        assert_eq!(lines, ["WARN  b.json route[1]: fallback 'other' does not match accepted 'tool_generic_support_intro'"]);
    }

    #[test]
    fn one_failing_file_fails_the_run() {
        let source = MemorySource::default()
            .file("a.json", GOOD)
            .file("bad.json", BAD_REGEX);
        let (summary, lines) = run(source, &["a.json", "bad.json"]);
        assert!(!summary.success());
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ERROR bad.json route[1]: invalid regex"));
    }

    #[test]
    fn findings_follow_argument_order() {
        let source = MemorySource::default()
            .file("z.json", WARN_ONLY)
            .file("a.json", "[]");
        let (_, lines) = run(source, &["z.json", "a.json"]);
        assert!(lines[0].contains("z.json"));
        assert!(lines[1].contains("a.json"));
    }

    #[test]
    fn directory_expansion_validates_each_file() {
        let source = MemorySource::default()
            .dir("routes", &["routes/a.json", "routes/b.json"])
            .file("routes/a.json", GOOD)
            .file("routes/b.json", "{}");
        let (summary, lines) = run(source, &["routes"]);
        assert_eq!(summary.files, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(lines, ["ERROR routes/b.json: top-level key 'routes' missing"]);
    }

    #[test]
    fn unreadable_file_is_structural_error() {
        let (summary, lines) = run(MemorySource::default(), &["missing.json"]);
        assert!(!summary.success());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ERROR missing.json: cannot read file:"));
    }

    #[test]
    fn unmatched_argument_is_counted_not_failed() {
        let source = MemorySource::default().dir("empty/*.json", &[]);
        let (summary, lines) = run(source, &["empty/*.json"]);
        assert!(summary.success());
        assert_eq!(summary.unmatched, 1);
        assert_eq!(summary.files, 0);
        assert!(lines.is_empty());
    }

    #[test]
    fn bad_glob_is_reported_against_argument() {
        let (summary, lines) = run(MemorySource::default(), &["routes/[.json"]);
        assert!(!summary.success());
        assert_eq!(summary.files, 0);
        assert!(lines[0].starts_with("ERROR routes/[.json: invalid glob pattern"));
    }
}
