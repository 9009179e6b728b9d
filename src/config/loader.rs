//! Configuration file discovery and loading.
//!
//! The project config lives at `launchpad.yml` in the project root. It is
//! optional: without it the built-in defaults describe the stock layout.

use crate::config::schema::LaunchpadConfig;
use crate::error::{LaunchpadError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project config.
pub const CONFIG_FILE_NAME: &str = "launchpad.yml";

/// Find the project root by walking up from `start`.
///
/// Returns the first ancestor (including `start`) that holds a
/// `launchpad.yml`, or None if there is none.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Path of the project config for a root.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LaunchpadConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LaunchpadError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LaunchpadError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty document is treated like `{}`.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LaunchpadConfig> {
    if content.trim().is_empty() {
        return Ok(LaunchpadConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LaunchpadError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the effective config for a project.
///
/// An explicit path must exist. Otherwise `launchpad.yml` in the project
/// root is used when present, and the defaults when it is not. The result
/// is validated before it is returned.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LaunchpadConfig> {
    let config = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            let path = config_path(project_root);
            if path.is_file() {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            } else {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                LaunchpadConfig::default()
            }
        }
    };

    super::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_project_root_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();
        let nested = temp.path().join("scripts/audio");
        fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn find_project_root_without_config_is_none() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        // An ancestor of the temp dir could hold a launchpad.yml on a dev
        // machine, so only assert that nothing inside the temp dir matched.
        if let Some(root) = find_project_root(&nested) {
            assert!(!root.starts_with(temp.path()));
        }
    }

    #[test]
    fn load_config_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, LaunchpadConfig::default());
    }

    #[test]
    fn load_config_reads_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "app_name: Friday\nentry_point: assistant.py\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.app_name, "Friday");
        assert_eq!(config.entry_point, PathBuf::from("assistant.py"));
    }

    #[test]
    fn load_config_explicit_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(Path::new("custom.yml")));
        assert!(matches!(
            result,
            Err(LaunchpadError::ConfigNotFound { path }) if path.ends_with("custom.yml")
        ));
    }

    #[test]
    fn load_config_explicit_relative_to_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("custom.yml"), "app_name: Custom\n").unwrap();

        let config = load_config(temp.path(), Some(Path::new("custom.yml"))).unwrap();
        assert_eq!(config.app_name, "Custom");
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let result = parse_config("app_name: [unclosed", Path::new("launchpad.yml"));
        assert!(matches!(
            result,
            Err(LaunchpadError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn empty_document_is_default() {
        let config = parse_config("  \n", Path::new("launchpad.yml")).unwrap();
        assert_eq!(config, LaunchpadConfig::default());
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "interpreter:\n  candidates: []\n",
        )
        .unwrap();

        let result = load_config(temp.path(), None);
        assert!(matches!(
            result,
            Err(LaunchpadError::ConfigValidationError { .. })
        ));
    }
}
