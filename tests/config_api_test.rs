//! Integration tests for config module public API.

use launchpad::config::{
    find_project_root, load_config, validate, LaunchpadConfig, OutputMode, CONFIG_FILE_NAME,
};
use launchpad::LaunchpadError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let _config = LaunchpadConfig::default();
    let _mode = OutputMode::Verbose;
    assert_eq!(CONFIG_FILE_NAME, "launchpad.yml");
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        r#"
app_name: Jarvis
required_files: [main.py]
entry_point: main.py
entry_args: ["--mode", "coding"]
install:
  args: ["-m", "pip", "install", "--user", "-r", "{manifest}"]
settings:
  default_output: quiet
  log_file: logs/launchpad.log
"#,
    )
    .unwrap();

    let nested = temp.path().join("scripts/audio");
    fs::create_dir_all(&nested).unwrap();
    let root = find_project_root(&nested).unwrap();

    let config = load_config(&root, None).unwrap();
    validate(&config).unwrap();

    assert_eq!(config.app_name, "Jarvis");
    assert_eq!(config.required_files, vec![PathBuf::from("main.py")]);
    assert_eq!(config.entry_args, vec!["--mode", "coding"]);
    assert_eq!(
        config.install_args(),
        vec!["-m", "pip", "install", "--user", "-r", "requirements.txt"]
    );
    assert_eq!(config.settings.default_output, OutputMode::Quiet);
    assert_eq!(
        config.settings.log_file,
        Some(PathBuf::from("logs/launchpad.log"))
    );
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    let err = load_config(temp.path(), Some(std::path::Path::new("other.yml"))).unwrap_err();
    assert!(matches!(err, LaunchpadError::ConfigNotFound { .. }));
}

#[test]
fn invalid_values_are_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "interpreter:\n  candidates: []\n",
    )
    .unwrap();

    let err = load_config(temp.path(), None).unwrap_err();
    assert!(matches!(err, LaunchpadError::ConfigValidationError { .. }));
}
