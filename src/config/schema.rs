//! Configuration schema definitions for launchpad.
//!
//! This module contains the struct definitions that map to the
//! `launchpad.yml` file format. Every field has a default, so an absent
//! or empty file describes the stock voice-assistant layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder replaced by the manifest path in install arguments.
pub const MANIFEST_PLACEHOLDER: &str = "{manifest}";

/// Root configuration structure for launchpad.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchpadConfig {
    /// Application name (for display purposes)
    pub app_name: String,

    /// Interpreter discovery
    pub interpreter: InterpreterConfig,

    /// Files that must exist before launch, checked in order
    pub required_files: Vec<PathBuf>,

    /// Directories created by `setup`
    pub directories: Vec<PathBuf>,

    /// Directories ensured by `run` before the entry point starts
    pub runtime_directories: Vec<PathBuf>,

    /// Dependency manifest consumed by the package manager
    pub manifest: PathBuf,

    /// Package manager invocation
    pub install: InstallConfig,

    /// Artifacts produced by a separate development step; missing ones warn
    pub expected_artifacts: Vec<PathBuf>,

    /// Program handed to the interpreter by `run`
    pub entry_point: PathBuf,

    /// Extra arguments always passed to the entry point
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry_args: Vec<String>,

    /// Command registry linted by `check`
    pub registry_file: PathBuf,

    /// Global settings
    pub settings: Settings,
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            app_name: "Voice Assistant".to_string(),
            interpreter: InterpreterConfig::default(),
            required_files: vec![
                PathBuf::from("dispatcher.py"),
                PathBuf::from("main.py"),
                PathBuf::from("config/commands.yaml"),
            ],
            directories: default_directories(),
            runtime_directories: vec![PathBuf::from("logs"), PathBuf::from("state")],
            manifest: PathBuf::from("requirements.txt"),
            install: InstallConfig::default(),
            expected_artifacts: vec![
                PathBuf::from("dispatcher.py"),
                PathBuf::from("main.py"),
                PathBuf::from("scripts/audio/voicemeeter_control.py"),
            ],
            entry_point: PathBuf::from("main.py"),
            entry_args: Vec::new(),
            registry_file: PathBuf::from("config/commands.yaml"),
            settings: Settings::default(),
        }
    }
}

impl LaunchpadConfig {
    /// Installer arguments with the manifest path substituted.
    pub fn install_args(&self) -> Vec<String> {
        let manifest = self.manifest.to_string_lossy();
        self.install
            .args
            .iter()
            .map(|arg| arg.replace(MANIFEST_PLACEHOLDER, &manifest))
            .collect()
    }

    /// Manual fallback command with the manifest path substituted.
    pub fn fallback_command(&self) -> String {
        self.install
            .fallback
            .replace(MANIFEST_PLACEHOLDER, &self.manifest.to_string_lossy())
    }
}

fn default_directories() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("config")];
    for category in [
        "audio",
        "utility",
        "coding",
        "knowledge",
        "productivity",
        "system",
        "streaming",
    ] {
        dirs.push(PathBuf::from("scripts").join(category));
    }
    dirs.push(PathBuf::from("state"));
    dirs.push(PathBuf::from("logs"));
    dirs
}

/// How to find the interpreter that runs the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Executable names tried in order; the first found on PATH wins
    pub candidates: Vec<String>,

    /// Arguments that make the interpreter print its version
    pub version_args: Vec<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            candidates: vec!["python".into(), "python3".into(), "py".into()],
            version_args: vec!["--version".into()],
        }
    }
}

/// Package manager invocation, run through the resolved interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Arguments after the interpreter; `{manifest}` is substituted
    pub args: Vec<String>,

    /// Command the operator can run by hand when installation fails
    pub fallback: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            args: ["-m", "pip", "install", "-r", MANIFEST_PLACEHOLDER]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fallback: format!("pip install -r {}", MANIFEST_PLACEHOLDER),
        }
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// Plain-text log file (relative to project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Output verbosity as written in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: LaunchpadConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, LaunchpadConfig::default());
    }

    #[test]
    fn default_required_files_keep_check_order() {
        let config = LaunchpadConfig::default();
        assert_eq!(
            config.required_files,
            vec![
                PathBuf::from("dispatcher.py"),
                PathBuf::from("main.py"),
                PathBuf::from("config/commands.yaml"),
            ]
        );
    }

    #[test]
    fn default_directories_cover_script_categories() {
        let dirs = default_directories();
        assert_eq!(dirs.len(), 10);
        assert_eq!(dirs.first(), Some(&PathBuf::from("config")));
        assert!(dirs.contains(&PathBuf::from("scripts/streaming")));
        assert!(dirs.contains(&PathBuf::from("scripts/audio")));
        assert_eq!(dirs.last(), Some(&PathBuf::from("logs")));
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let yaml = r#"
app_name: Jarvis
interpreter:
  candidates: [python3.12]
settings:
  default_output: quiet
"#;
        let config: LaunchpadConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.app_name, "Jarvis");
        assert_eq!(config.interpreter.candidates, vec!["python3.12"]);
        assert_eq!(config.interpreter.version_args, vec!["--version"]);
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
        assert_eq!(config.entry_point, PathBuf::from("main.py"));
    }

    #[test]
    fn install_defaults_reference_manifest_placeholder() {
        let install = InstallConfig::default();
        assert_eq!(install.args.last().map(String::as_str), Some("{manifest}"));
        assert!(install.fallback.contains("{manifest}"));
    }

    #[test]
    fn install_args_substitute_manifest() {
        let mut config = LaunchpadConfig::default();
        config.manifest = PathBuf::from("deps/requirements-win.txt");
        assert_eq!(
            config.install_args(),
            vec!["-m", "pip", "install", "-r", "deps/requirements-win.txt"]
        );
        assert_eq!(
            config.fallback_command(),
            "pip install -r deps/requirements-win.txt"
        );
    }

    #[test]
    fn output_mode_parses_lowercase() {
        let mode: OutputMode = serde_yaml::from_str("verbose").unwrap();
        assert_eq!(mode, OutputMode::Verbose);
        assert!(serde_yaml::from_str::<OutputMode>("loud").is_err());
    }
}
