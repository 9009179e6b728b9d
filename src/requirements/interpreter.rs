//! Interpreter discovery.
//!
//! Candidates are tried in order and the first one found on PATH wins.
//! The version is read from `<interpreter> --version` when possible; an
//! interpreter whose version cannot be read is still usable.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::InterpreterConfig;
use crate::host::Host;
use crate::shell::{CommandOptions, Invocation};

/// Regex for dotted version numbers in `--version` output.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+(?:\.\d+)?").expect("VERSION_REGEX must compile"));

/// A resolved interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpreter {
    /// The candidate name that matched.
    pub name: String,
    /// Where it was found.
    pub path: PathBuf,
    /// Version reported by the interpreter, if readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Interpreter {
    /// Human-readable description, e.g. `python 3.11.4 (/usr/bin/python)`.
    pub fn describe(&self) -> String {
        match &self.version {
            Some(v) => format!("{} {} ({})", self.name, v, self.path.display()),
            None => format!("{} ({})", self.name, self.path.display()),
        }
    }
}

/// Extract the first dotted version number from tool output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX.find(output).map(|m| m.as_str().to_string())
}

/// Resolve the first available interpreter candidate.
///
/// Candidates such as `.venv/bin/python` resolve against `project_root`,
/// whatever directory launchpad was started from.
pub fn resolve_interpreter(
    host: &dyn Host,
    config: &InterpreterConfig,
    project_root: &Path,
) -> Option<Interpreter> {
    for name in &config.candidates {
        let Some(path) = host.find_executable(name, project_root) else {
            tracing::debug!("Interpreter candidate '{}' not on PATH", name);
            continue;
        };

        tracing::debug!("Interpreter candidate '{}' resolved to {}", name, path.display());
        let version = read_version(host, &path, &config.version_args, project_root);
        return Some(Interpreter {
            name: name.clone(),
            path,
            version,
        });
    }
    None
}

fn read_version(host: &dyn Host, path: &Path, args: &[String], cwd: &Path) -> Option<String> {
    if args.is_empty() {
        return None;
    }

    let invocation = Invocation::new(path, args.to_vec());
    match host.run(&invocation, &CommandOptions::captured(cwd)) {
        // Python 2 prints its version on stderr
        Ok(result) if result.success => {
            extract_version(&result.stdout).or_else(|| extract_version(&result.stderr))
        }
        Ok(result) => {
            tracing::debug!(
                "{} exited with {:?}; version unknown",
                invocation.display(),
                result.exit_code
            );
            None
        }
        Err(e) => {
            tracing::debug!("Could not read interpreter version: {}", e);
            None
        }
    }
}
