//! Error types for launchpad operations.
//!
//! This module defines [`LaunchpadError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Prerequisite failures (`MissingPrerequisiteFile`, `MissingInterpreter`,
//!   `DependencyInstallFailure`) are fatal and carry enough context for a
//!   remediation message
//! - Missing optional artifacts are never errors; they surface as warnings
//! - Use `anyhow::Error` (via `LaunchpadError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launchpad operations.
#[derive(Debug, Error)]
pub enum LaunchpadError {
    /// A file the assistant cannot run without is absent.
    #[error("Missing required file: {path}")]
    MissingPrerequisiteFile { path: PathBuf, hint: String },

    /// None of the interpreter candidates resolved on PATH.
    #[error("No interpreter found (tried: {})", candidates.join(", "))]
    MissingInterpreter { candidates: Vec<String> },

    /// The package manager exited non-zero while installing the manifest.
    #[error("Dependency installation failed with exit code {code:?}: {command}")]
    DependencyInstallFailure { command: String, code: Option<i32> },

    /// The entry point could not be started at all.
    #[error("Failed to launch '{command}': {message}")]
    LaunchFailed { command: String, message: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchpadError {
    /// Remediation text shown under the error, if the error carries one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingPrerequisiteFile { hint, .. } => Some(hint.clone()),
            Self::MissingInterpreter { .. } => Some(
                "Install Python 3.8+ from https://python.org and make sure it is on PATH"
                    .to_string(),
            ),
            Self::ConfigNotFound { .. } => {
                Some("Run `launchpad init` to write a default launchpad.yml".to_string())
            }
            _ => None,
        }
    }

    /// Process exit code for this error.
    ///
    /// Every prerequisite and runtime failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for launchpad operations.
pub type Result<T> = std::result::Result<T, LaunchpadError>;
