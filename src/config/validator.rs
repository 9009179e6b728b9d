//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - At least one interpreter candidate, none blank
//! - A non-empty entry point and manifest
//! - Install arguments and fallback use only known placeholders
//! - Required files and directories are relative to the project root

use crate::config::schema::{LaunchpadConfig, MANIFEST_PLACEHOLDER};
use crate::error::{LaunchpadError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Regex for `{name}` placeholders in install arguments.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[A-Za-z_]+\}").expect("PLACEHOLDER_REGEX must compile"));

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &LaunchpadConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_interpreter(config));
    errors.extend(validate_paths(config));
    errors.extend(validate_install(config));

    errors
}

fn validate_interpreter(config: &LaunchpadConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.interpreter.candidates.is_empty() {
        errors.push(ValidationError::new(
            "no-interpreter",
            "interpreter.candidates must name at least one executable",
        ));
    }

    if config
        .interpreter
        .candidates
        .iter()
        .any(|c| c.trim().is_empty())
    {
        errors.push(ValidationError::new(
            "blank-interpreter",
            "interpreter.candidates contains a blank entry",
        ));
    }

    errors
}

fn validate_paths(config: &LaunchpadConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.entry_point.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "no-entry-point",
            "entry_point must not be empty",
        ));
    }

    if config.manifest.as_os_str().is_empty() {
        errors.push(ValidationError::new("no-manifest", "manifest must not be empty"));
    }

    let relative_lists: [(&str, &[std::path::PathBuf]); 4] = [
        ("required_files", &config.required_files),
        ("directories", &config.directories),
        ("runtime_directories", &config.runtime_directories),
        ("expected_artifacts", &config.expected_artifacts),
    ];

    for (field, paths) in relative_lists {
        for path in paths {
            if is_rooted(path) {
                errors.push(ValidationError::new(
                    "absolute-path",
                    format!(
                        "{} entry '{}' must be relative to the project root",
                        field,
                        path.display()
                    ),
                ));
            }
        }
    }

    errors
}

fn is_rooted(path: &Path) -> bool {
    path.is_absolute() || path.has_root()
}

fn validate_install(config: &LaunchpadConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.install.args.is_empty() {
        errors.push(ValidationError::new(
            "no-install-args",
            "install.args must not be empty",
        ));
    }

    let fields = config
        .install
        .args
        .iter()
        .map(|a| ("install.args", a.as_str()))
        .chain(std::iter::once((
            "install.fallback",
            config.install.fallback.as_str(),
        )));

    for (field, value) in fields {
        for found in PLACEHOLDER_REGEX.find_iter(value) {
            if found.as_str() != MANIFEST_PLACEHOLDER {
                errors.push(ValidationError::new(
                    "unknown-placeholder",
                    format!(
                        "{} uses unknown placeholder '{}' (only {} is supported)",
                        field,
                        found.as_str(),
                        MANIFEST_PLACEHOLDER
                    ),
                ));
            }
        }
    }

    errors
}

/// Validate configuration and return Result.
///
/// Returns Ok(()) if valid, or a `LaunchpadError::ConfigValidationError`
/// with all messages joined.
pub fn validate(config: &LaunchpadConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LaunchpadError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&LaunchpadConfig::default()).is_empty());
        assert!(validate(&LaunchpadConfig::default()).is_ok());
    }

    #[test]
    fn rejects_empty_candidates() {
        let mut config = LaunchpadConfig::default();
        config.interpreter.candidates.clear();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "no-interpreter"));
    }

    #[test]
    fn rejects_blank_candidate() {
        let mut config = LaunchpadConfig::default();
        config.interpreter.candidates.push("  ".into());

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "blank-interpreter"));
    }

    #[test]
    fn rejects_empty_entry_point() {
        let mut config = LaunchpadConfig::default();
        config.entry_point = PathBuf::new();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "no-entry-point"));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_absolute_required_file() {
        let mut config = LaunchpadConfig::default();
        config.required_files.push(PathBuf::from("/etc/passwd"));

        let errors = validate_config(&config);
        let err = errors.iter().find(|e| e.rule == "absolute-path").unwrap();
        assert!(err.message.contains("required_files"));
    }

    #[test]
    fn rejects_unknown_placeholder() {
        let mut config = LaunchpadConfig::default();
        config.install.fallback = "pip install -r {requirements}".into();

        let errors = validate_config(&config);
        let err = errors
            .iter()
            .find(|e| e.rule == "unknown-placeholder")
            .unwrap();
        assert!(err.message.contains("{requirements}"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = LaunchpadConfig::default();
        config.interpreter.candidates.clear();
        config.install.args.clear();

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 2);

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains(';'));
    }
}
