//! PATH probing for executables.
//!
//! Executables are resolved by walking PATH entries directly rather than
//! shelling out to `which`/`where`, whose behavior varies across systems
//! and is sometimes a shell builtin with inconsistent error handling.
//!
//! # Example
//!
//! ```no_run
//! use launchpad::requirements::probe::PathProbe;
//! use std::path::Path;
//!
//! let probe = PathProbe::from_env();
//! if let Some(python) = probe.resolve("python3", Path::new("/srv/assistant")) {
//!     println!("python3 at {}", python.display());
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::shell::executable_file_names;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. A name that
/// contains a path separator is not searched for on PATH: it is joined to
/// `base` (absolute names are kept as they are) and checked directly.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf], base: &Path) -> Option<PathBuf> {
    let names = executable_file_names(tool);

    if Path::new(tool).components().count() > 1 {
        return names
            .iter()
            .map(|name| base.join(name))
            .find(|candidate| is_executable(candidate));
    }

    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// A snapshot of PATH used for executable lookups.
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    entries: Vec<PathBuf>,
}

impl PathProbe {
    /// Probe using the process PATH.
    pub fn from_env() -> Self {
        Self::with_entries(parse_system_path())
    }

    /// Probe using explicit PATH entries.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_entries(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// The PATH entries this probe searches.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Resolve an executable name to its path.
    ///
    /// Relative names with a directory part resolve against `base`.
    pub fn resolve(&self, name: &str, base: &Path) -> Option<PathBuf> {
        resolve_tool_path(name, &self.entries, base)
    }
}
