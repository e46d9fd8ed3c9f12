//! Path argument expansion and file reading.
//!
//! The linter never touches the filesystem directly; it goes through a
//! [`FileSource`], so the run loop can be tested against an in-memory tree.

use std::path::{Path, PathBuf};

use crate::error::DiscoveryError;

/// Extension recognized when expanding a directory argument.
pub const DEFAULT_EXTENSION: &str = "json";

/// Where the linter gets its files from.
pub trait FileSource {
    /// Expands one command-line argument into the files it names.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscoveryError`] if the argument is a malformed glob.
    fn expand(&self, arg: &str) -> Result<Vec<PathBuf>, DiscoveryError>;

    /// Reads a file's full text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error (missing file, non-UTF-8 content, ...).
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// Returns `true` if `arg` contains glob metacharacters.
#[must_use]
pub fn is_glob(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

// ============================================================================
// Filesystem source
// ============================================================================

/// [`FileSource`] backed by the real filesystem.
///
/// - glob arguments are matched with the `glob` crate (sorted, files only);
/// - directories expand to every file with the recognized extension beneath
///   them, recursively;
/// - anything else is returned as-is, existing or not.
#[derive(Debug, Clone)]
pub struct FsSource {
    extension: String,
}

impl Default for FsSource {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}

impl FsSource {
    /// Creates a source that recognizes `extension` (with or without a
    /// leading dot) during directory expansion.
    #[must_use]
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// The recognized extension, without a leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn glob_files(pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
        let paths = glob::glob(pattern).map_err(|e| DiscoveryError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e.error(), "skipping unreadable path");
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

impl FileSource for FsSource {
    fn expand(&self, arg: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
        let path = Path::new(arg);

        if path.is_dir() {
            let pattern = format!(
                "{}/**/*.{}",
                glob::Pattern::escape(arg.trim_end_matches(['/', '\\'])),
                glob::Pattern::escape(&self.extension)
            );
            tracing::debug!(dir = arg, %pattern, "expanding directory");
            return Self::glob_files(&pattern);
        }

        if is_glob(arg) {
            tracing::debug!(pattern = arg, "expanding glob");
            return Self::glob_files(arg);
        }

        Ok(vec![path.to_path_buf()])
    }

    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
