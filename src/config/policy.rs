//! Lint policy definition and loading.
//!
//! A policy file is a small YAML document; both keys are optional and fall
//! back to the built-in project standard:
//!
//! ```yaml
//! required_fields: [pattern, template_id, fallback]
//! fallback_id: tool_generic_support_intro
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Fallback template every route is expected to use.
pub const DEFAULT_FALLBACK_ID: &str = "tool_generic_support_intro";

/// Fields every route entry must declare.
pub const DEFAULT_REQUIRED_FIELDS: [&str; 3] = ["pattern", "template_id", "fallback"];

// ============================================================================
// PolicyConfig
// ============================================================================

/// Read-only lint policy shared by every file in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    required_fields: Vec<String>,
    fallback_id: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            required_fields: DEFAULT_REQUIRED_FIELDS.iter().map(ToString::to_string).collect(),
            fallback_id: DEFAULT_FALLBACK_ID.to_string(),
        }
    }
}

impl PolicyConfig {
    /// Builds a policy from an explicit field list and fallback identifier.
    ///
    /// Duplicate field names are dropped, keeping the first occurrence, so
    /// missing-field messages list each name once in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the field list is empty,
    /// contains an empty name, or the fallback identifier is empty.
    pub fn new<I, S>(required_fields: I, fallback_id: impl Into<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: Vec<String> = Vec::new();
        for field in required_fields {
            let field = field.into();
            if field.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "required_fields".to_string(),
                    value: field,
                    expected: "non-empty field names".to_string(),
                });
            }
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        if fields.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "required_fields".to_string(),
                value: "[]".to_string(),
                expected: "at least one field name".to_string(),
            });
        }

        let fallback_id = fallback_id.into();
        if fallback_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "fallback_id".to_string(),
                value: fallback_id,
                expected: "a non-empty template identifier".to_string(),
            });
        }

        Ok(Self {
            required_fields: fields,
            fallback_id,
        })
    }

    /// Field names every route must declare, in reporting order.
    #[must_use]
    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    /// The single accepted fallback template identifier.
    #[must_use]
    pub fn fallback_id(&self) -> &str {
        &self.fallback_id
    }

    /// Loads a policy from a YAML file, filling unset keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, is not valid
    /// YAML, has unknown keys, or holds invalid values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(path, &text)
    }

    /// Parses policy YAML. `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// See [`PolicyConfig::load`].
    pub fn from_yaml_str(path: &Path, text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: "policy file is empty".to_string(),
            });
        }

        let file: PolicyFile = serde_yaml::from_str(text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        let defaults = Self::default();
        let policy = Self::new(
            file.required_fields.unwrap_or(defaults.required_fields),
            file.fallback_id.unwrap_or(defaults.fallback_id),
        )?;

        tracing::debug!(
            path = %path.display(),
            required = ?policy.required_fields,
            fallback_id = %policy.fallback_id,
            "loaded lint policy"
        );
        Ok(policy)
    }
}

/// On-disk shape of a policy file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    #[serde(default)]
    required_fields: Option<Vec<String>>,
    #[serde(default)]
    fallback_id: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
