//! Fail-fast prerequisite verification.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::LaunchpadConfig;
use crate::error::{LaunchpadError, Result};
use crate::host::Host;
use crate::requirements::{resolve_interpreter, Interpreter};

/// Everything the verifier confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedEnvironment {
    /// The interpreter that will run the assistant.
    pub interpreter: Interpreter,
    /// Root that every configured path is relative to.
    pub project_root: PathBuf,
    /// Absolute paths of the required files, in check order.
    pub files: Vec<PathBuf>,
}

/// Checks the interpreter and required files, stopping at the first miss.
///
/// The interpreter is checked before any file, so a host without one fails
/// with [`LaunchpadError::MissingInterpreter`] whatever files exist.
///
/// # Example
///
/// ```
/// use launchpad::config::LaunchpadConfig;
/// use launchpad::host::MockHost;
/// use launchpad::preflight::Verifier;
///
/// let config = LaunchpadConfig::default();
/// let host = MockHost::new()
///     .with_executable("python", "/usr/bin/python")
///     .with_file("/p/dispatcher.py")
///     .with_file("/p/main.py");
///
/// let err = Verifier::new(&config, "/p").verify(&host).unwrap_err();
/// assert!(err.to_string().contains("config/commands.yaml"));
/// ```
pub struct Verifier<'a> {
    config: &'a LaunchpadConfig,
    project_root: PathBuf,
}

impl<'a> Verifier<'a> {
    /// Create a verifier for a project.
    pub fn new(config: &'a LaunchpadConfig, project_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            project_root: project_root.into(),
        }
    }

    /// The project root paths are resolved against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run every check in order.
    pub fn verify(&self, host: &dyn Host) -> Result<VerifiedEnvironment> {
        let interpreter = self.resolve_interpreter(host)?;
        let files = self.check_files(host)?;
        Ok(VerifiedEnvironment {
            interpreter,
            project_root: self.project_root.clone(),
            files,
        })
    }

    /// Resolve the first available interpreter candidate.
    pub fn resolve_interpreter(&self, host: &dyn Host) -> Result<Interpreter> {
        let interpreter = resolve_interpreter(host, &self.config.interpreter, &self.project_root)
            .ok_or_else(|| LaunchpadError::MissingInterpreter {
                candidates: self.config.interpreter.candidates.clone(),
            })?;
        tracing::debug!("Using interpreter {}", interpreter.describe());
        Ok(interpreter)
    }

    /// Check required files in their configured order.
    ///
    /// Returns the absolute paths on success, or an error naming the first
    /// missing file as configured.
    pub fn check_files(&self, host: &dyn Host) -> Result<Vec<PathBuf>> {
        let mut found = Vec::with_capacity(self.config.required_files.len());
        for relative in &self.config.required_files {
            let path = self.project_root.join(relative);
            if !host.is_file(&path) {
                tracing::debug!("Required file missing: {}", path.display());
                return Err(LaunchpadError::MissingPrerequisiteFile {
                    path: relative.clone(),
                    hint: remediation_hint(self.config, relative),
                });
            }
            tracing::debug!("Required file present: {}", path.display());
            found.push(path);
        }
        Ok(found)
    }
}

/// Remediation text for a missing required file.
pub fn remediation_hint(config: &LaunchpadConfig, relative: &Path) -> String {
    if relative == config.registry_file {
        format!(
            "Run `launchpad init --registry` to write a default registry, or create {}",
            relative.display()
        )
    } else if relative.components().count() == 1 {
        format!("Place {} in the project root", relative.display())
    } else {
        format!(
            "Make sure {} exists relative to the project root",
            relative.display()
        )
    }
}
