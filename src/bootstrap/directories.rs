//! Idempotent directory creation.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{LaunchpadError, Result};
use crate::host::Host;

/// Which directories were created and which already existed.
///
/// Paths are relative to the project root, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryReport {
    /// Directories that did not exist and were created.
    pub created: Vec<PathBuf>,
    /// Directories that already existed.
    pub present: Vec<PathBuf>,
}

impl DirectoryReport {
    /// Every directory the report covers.
    pub fn total(&self) -> usize {
        self.created.len() + self.present.len()
    }
}

/// Create every absent directory under `root`.
///
/// Running this twice yields the same directory set and no error. A path
/// that exists as a regular file is an error.
pub fn ensure_directories(host: &dyn Host, root: &Path, dirs: &[PathBuf]) -> Result<DirectoryReport> {
    let mut report = DirectoryReport::default();

    for relative in dirs {
        let path = root.join(relative);
        if host.is_dir(&path) {
            report.present.push(relative.clone());
            continue;
        }
        if host.is_file(&path) {
            return Err(LaunchpadError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", relative.display()),
            )));
        }

        host.create_dir_all(&path)?;
        tracing::debug!("Created directory {}", path.display());
        report.created.push(relative.clone());
    }

    Ok(report)
}

/// Directories that [`ensure_directories`] would create, without creating them.
pub fn pending_directories(host: &dyn Host, root: &Path, dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter()
        .filter(|relative| !host.is_dir(&root.join(relative)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchpadConfig;
    use crate::host::MockHost;

    fn dirs(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn creates_absent_and_reports_present() {
        let host = MockHost::new().with_dir("/p/logs");
        let report =
            ensure_directories(&host, Path::new("/p"), &dirs(&["logs", "state"])).unwrap();

        assert_eq!(report.created, dirs(&["state"]));
        assert_eq!(report.present, dirs(&["logs"]));
        assert_eq!(report.total(), 2);
        assert_eq!(host.created_dirs(), vec![PathBuf::from("/p/state")]);
    }

    #[test]
    fn second_run_creates_nothing() {
        let host = MockHost::new().with_dir("/p");
        let config = LaunchpadConfig::default();

        let first = ensure_directories(&host, Path::new("/p"), &config.directories).unwrap();
        let dirs_after_first = host.dirs();
        let second = ensure_directories(&host, Path::new("/p"), &config.directories).unwrap();

        assert_eq!(first.created.len(), config.directories.len());
        assert!(second.created.is_empty());
        assert_eq!(second.present, config.directories);
        assert_eq!(host.dirs(), dirs_after_first);
    }

    #[test]
    fn nested_directories_create_parents() {
        let host = MockHost::new().with_dir("/p");
        ensure_directories(&host, Path::new("/p"), &dirs(&["scripts/audio"])).unwrap();
        assert!(host.is_dir(Path::new("/p/scripts")));
        assert!(host.is_dir(Path::new("/p/scripts/audio")));
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let host = MockHost::new().with_file("/p/logs");
        let result = ensure_directories(&host, Path::new("/p"), &dirs(&["logs"]));
        match result {
            Err(LaunchpadError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::AlreadyExists),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn pending_lists_only_missing() {
        let host = MockHost::new().with_dir("/p/config");
        let pending = pending_directories(&host, Path::new("/p"), &dirs(&["config", "logs"]));
        assert_eq!(pending, dirs(&["logs"]));
        assert!(host.created_dirs().is_empty());
    }
}
