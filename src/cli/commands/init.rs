//! Init command implementation.
//!
//! The `launchpad init` command writes a commented `launchpad.yml` that
//! spells out the built-in defaults, and optionally the default command
//! registry.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::{config_path, LaunchpadConfig};
use crate::error::Result;
use crate::host::Host;
use crate::registry::write_default_registry;
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The configuration written by `launchpad init`.
///
/// Parsing it yields exactly [`LaunchpadConfig::default`].
pub const CONFIG_TEMPLATE: &str = r#"# launchpad configuration
#
# Every field is optional; removing one restores its default.

# Name shown in headers and status lines
app_name: Voice Assistant

# Executables tried in order; the first one on PATH runs everything
interpreter:
  candidates: [python, python3, py]
  version_args: ["--version"]

# Checked in this order before launch; the first missing file aborts
required_files:
  - dispatcher.py
  - main.py
  - config/commands.yaml

# Created by `launchpad setup`
directories:
  - config
  - scripts/audio
  - scripts/utility
  - scripts/coding
  - scripts/knowledge
  - scripts/productivity
  - scripts/system
  - scripts/streaming
  - state
  - logs

# Ensured by `launchpad run` before the entry point starts
runtime_directories: [logs, state]

# Dependency manifest and the installer run through the interpreter.
# `{manifest}` is replaced by the manifest path.
manifest: requirements.txt
install:
  args: ["-m", "pip", "install", "-r", "{manifest}"]
  fallback: "pip install -r {manifest}"

# Produced outside setup; missing ones only warn
expected_artifacts:
  - dispatcher.py
  - main.py
  - scripts/audio/voicemeeter_control.py

# Program handed to the interpreter by `launchpad run`
entry_point: main.py
# entry_args: ["--mode", "general"]

# Command registry linted by `launchpad check`
registry_file: config/commands.yaml

settings:
  # verbose, normal, quiet or silent
  default_output: normal
  # log_file: logs/launchpad.log
"#;

/// The init command implementation.
pub struct InitCommand<'a> {
    project_root: PathBuf,
    host: &'a dyn Host,
    config_file: Option<PathBuf>,
    args: InitArgs,
}

impl<'a> InitCommand<'a> {
    /// Create a new init command.
    ///
    /// `config_file` is an explicit target from `--config`; relative paths
    /// resolve against the project root.
    pub fn new(
        project_root: &Path,
        host: &'a dyn Host,
        config_file: Option<&Path>,
        args: InitArgs,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            host,
            config_file: config_file.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    /// Where the config will be written.
    pub fn target(&self) -> PathBuf {
        match &self.config_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.project_root.join(path),
            None => config_path(&self.project_root),
        }
    }
}

impl InitCommand<'_> {
    /// Write the default registry unless one is already there.
    fn write_registry(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let registry_file = LaunchpadConfig::default().registry_file;
        if write_default_registry(self.host, &self.project_root, &registry_file)? {
            ui.success(&format!("Created {}", registry_file.display()));
        } else {
            ui.message(&format!(
                "{} already exists; left unchanged",
                registry_file.display()
            ));
        }
        Ok(())
    }
}

impl Command for InitCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.target();

        // --registry applies even when the config is kept
        if self.host.exists(&target) && !self.args.force {
            ui.warning(&format!(
                "{} already exists and was left unchanged. Use --force to overwrite.",
                target.display()
            ));
            if self.args.registry {
                self.write_registry(ui)?;
            }
            return Ok(CommandResult::failure(1));
        }

        if let Some(parent) = target.parent() {
            self.host.create_dir_all(parent)?;
        }
        self.host.write_file(&target, CONFIG_TEMPLATE)?;
        tracing::debug!("Wrote config to {}", target.display());
        ui.success(&format!("Created {}", target.display()));

        if self.args.registry {
            self.write_registry(ui)?;
        }

        ui.show_hint(hints::after_init());
        Ok(CommandResult::success())
    }
}
