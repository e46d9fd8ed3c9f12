//! Finding output.
//!
//! Findings are written one per line as soon as they are discovered, and the
//! writer is flushed after every line so long runs show progress.

use std::io::{BufWriter, Write};

use clap::ValueEnum;

use crate::validator::Finding;

/// Output format for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// `ERROR <file> route[<n>]: <message>`
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

/// Line-oriented finding writer.
///
/// Write failures are logged and dropped: a closed pipe must not change the
/// lint verdict.
pub struct Reporter {
    writer: BufWriter<Box<dyn Write + Send>>,
    format: ReportFormat,
}

// Box<dyn Write> is not Debug.
impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Reporter {
    /// Creates a reporter that writes to `writer`.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>, format: ReportFormat) -> Self {
        Self {
            writer: BufWriter::new(writer),
            format,
        }
    }

    /// Creates a reporter that writes to stdout.
    #[must_use]
    pub fn stdout(format: ReportFormat) -> Self {
        Self::new(Box::new(std::io::stdout()), format)
    }

    /// Writes one finding and flushes.
    pub fn report(&mut self, finding: &Finding) {
        if let Err(e) = self.write_line(finding) {
            tracing::debug!(error = %e, "failed to write finding");
        }
    }

    fn write_line(&mut self, finding: &Finding) -> std::io::Result<()> {
        match self.format {
            ReportFormat::Human => writeln!(self.writer, "{finding}")?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.writer, finding)?;
                self.writer.write_all(b"\n")?;
            }
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::FindingKind;
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory writer so tests can inspect output.
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

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn findings() -> [Finding; 2] {
        [
            Finding::new(FindingKind::SchemaError, "a.json", Some(2), "missing required fields: fallback"),
            Finding::new(FindingKind::PrecedenceWarning, "a.json", None, "precedence 1 used by routes [1, 3]"),
        ]
    }

    #[test]
    fn human_lines() {
        let buf = SharedBuf::default();
        let mut reporter = Reporter::new(Box::new(buf.clone()), ReportFormat::Human);
        for f in &findings() {
            reporter.report(f);
        }
        assert_eq!(
            buf.contents(),
            "ERROR a.json route[2]: missing required fields: fallback\n\
             WARN  a.json: precedence 1 used by routes [1, 3]\n"
        );
    }

    #[test]
    fn json_lines() {
        let buf = SharedBuf::default();
        let mut reporter = Reporter::new(Box::new(buf.clone()), ReportFormat::Json);
        for f in &findings() {
            reporter.report(f);
        }
        let out = buf.contents();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["severity"], "error");
        assert_eq!(lines[0]["kind"], "schema_error");
        assert_eq!(lines[0]["route"], 2);
        assert_eq!(lines[1]["severity"], "warn");
        assert!(lines[1].get("route").is_none());
    }

    #[test]
    fn each_finding_is_flushed_immediately() {
        let buf = SharedBuf::default();
        let mut reporter = Reporter::new(Box::new(buf.clone()), ReportFormat::Human);
        reporter.report(&findings()[0]);
        assert!(buf.contents().ends_with('\n'));
    }
}
