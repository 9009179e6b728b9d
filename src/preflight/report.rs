//! Check report for `launchpad check`.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::LaunchpadConfig;
use crate::error::{LaunchpadError, Result};
use crate::registry::RegistryFinding;
use crate::requirements::Interpreter;

use super::VerifiedEnvironment;

/// Whether a required file was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Whether the file exists.
    pub present: bool,
}

/// The outcome of a verification, in a form suitable for display or JSON.
///
/// Only the checks the verifier actually performed are listed: a missing
/// interpreter means no files were checked, and files after the first
/// missing one are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Whether every prerequisite was satisfied.
    pub ok: bool,
    /// The resolved interpreter, if any.
    pub interpreter: Option<Interpreter>,
    /// Required files in check order.
    pub files: Vec<FileCheck>,
    /// The failure message, if verification failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Remediation for the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Advisory registry findings.
    pub registry: Vec<RegistryFinding>,
}

impl CheckReport {
    /// Build a report from a verification outcome.
    pub fn from_outcome(
        config: &LaunchpadConfig,
        outcome: &Result<VerifiedEnvironment>,
        interpreter: Option<Interpreter>,
        registry: Vec<RegistryFinding>,
    ) -> Self {
        let present = |path: &PathBuf| FileCheck {
            path: path.clone(),
            present: true,
        };

        let files = match outcome {
            Ok(_) => config.required_files.iter().map(present).collect(),
            Err(LaunchpadError::MissingPrerequisiteFile { path: missing, .. }) => {
                let mut files: Vec<FileCheck> = config
                    .required_files
                    .iter()
                    .take_while(|p| *p != missing)
                    .map(present)
                    .collect();
                files.push(FileCheck {
                    path: missing.clone(),
                    present: false,
                });
                files
            }
            Err(_) => Vec::new(),
        };

        let interpreter = match outcome {
            Ok(env) => Some(env.interpreter.clone()),
            Err(_) => interpreter,
        };

        Self {
            ok: outcome.is_ok(),
            interpreter,
            files,
            error: outcome.as_ref().err().map(|e| e.to_string()),
            hint: outcome.as_ref().err().and_then(|e| e.hint()),
            registry,
        }
    }

    /// Exit code for `check`: registry findings never fail it.
    pub fn exit_code(&self) -> i32 {
        if self.ok {
            0
        } else {
            1
        }
    }
}
