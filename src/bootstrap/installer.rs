//! The setup sequence: interpreter, directories, dependencies, artifacts.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::LaunchpadConfig;
use crate::error::{LaunchpadError, Result};
use crate::host::Host;
use crate::preflight::Verifier;
use crate::requirements::Interpreter;
use crate::shell::{CommandOptions, Invocation, OutputCallback, OutputLine, Termination};
use crate::ui::{hints, live_output_callback, UserInterface};

use super::directories::{ensure_directories, pending_directories, DirectoryReport};

/// Lines of installer output kept in the failure block.
const FAILURE_TAIL_LINES: usize = 20;

/// Live output lines shown under the install spinner.
const LIVE_LINES: usize = 3;

/// Flags that change what setup does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupOptions {
    /// Create directories and report artifacts without installing.
    pub skip_install: bool,
    /// Print what would happen without touching anything.
    pub dry_run: bool,
}

/// What a setup run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupReport {
    /// The interpreter dependencies were installed with.
    pub interpreter: Interpreter,
    /// Directory outcome; empty on a dry run.
    pub directories: DirectoryReport,
    /// Whether the installer ran and succeeded.
    pub installed: bool,
    /// Expected artifacts that are absent.
    pub missing_artifacts: Vec<PathBuf>,
}

/// Prepares a project so the assistant can run.
pub struct Bootstrapper<'a> {
    config: &'a LaunchpadConfig,
    project_root: PathBuf,
    options: SetupOptions,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper for a project.
    pub fn new(config: &'a LaunchpadConfig, project_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            project_root: project_root.into(),
            options: SetupOptions::default(),
        }
    }

    /// Set the setup flags.
    pub fn with_options(mut self, options: SetupOptions) -> Self {
        self.options = options;
        self
    }

    /// The installer command for an interpreter.
    pub fn install_invocation(&self, interpreter: &Interpreter) -> Invocation {
        Invocation::new(&interpreter.path, self.config.install_args())
    }

    /// Install the dependency manifest.
    ///
    /// On failure the installer output, likely causes, and the manual
    /// fallback command are shown before the error is returned.
    pub fn install(
        &self,
        host: &dyn Host,
        interpreter: &Interpreter,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let manifest = self.project_root.join(&self.config.manifest);
        if !host.is_file(&manifest) {
            return Err(LaunchpadError::MissingPrerequisiteFile {
                path: self.config.manifest.clone(),
                hint: format!(
                    "Create {} listing the assistant's dependencies",
                    self.config.manifest.display()
                ),
            });
        }

        let invocation = self.install_invocation(interpreter);
        let command = invocation.display();
        tracing::debug!("Installing dependencies: {}", command);

        let outcome = if ui.output_mode().shows_command_output() {
            ui.message(&format!("$ {}", command));
            let termination =
                host.run_foreground(&invocation, &CommandOptions::inherited(&self.project_root))?;
            InstallOutcome::from_termination(termination)
        } else {
            self.install_with_spinner(host, &invocation, ui)?
        };

        if outcome.success {
            return Ok(());
        }

        tracing::debug!("Installer exited with {:?}", outcome.code);
        ui.show_error_block(&command, &tail(&outcome.output, FAILURE_TAIL_LINES), None);
        ui.message("Possible causes:");
        for cause in hints::install_failure_causes() {
            ui.message(&format!("  - {}", cause));
        }
        ui.show_hint(&hints::after_install_failure(&self.config.fallback_command()));

        Err(LaunchpadError::DependencyInstallFailure {
            command,
            code: outcome.code,
        })
    }

    fn install_with_spinner(
        &self,
        host: &dyn Host,
        invocation: &Invocation,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallOutcome> {
        let base = "Installing dependencies...".to_string();
        let mut spinner = ui.start_spinner(&base);
        let callback: OutputCallback = match spinner.progress_bar() {
            Some(bar) => live_output_callback(bar, base, 4, LIVE_LINES),
            None => Box::new(|_: OutputLine| {}),
        };

        let options = CommandOptions::captured(&self.project_root);
        let result = match host.run_streaming(invocation, &options, callback) {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_error("Could not start the installer");
                return Err(e);
            }
        };

        if result.success {
            spinner.finish_success("Dependencies installed");
        } else {
            spinner.finish_error("Dependency installation failed");
        }

        Ok(InstallOutcome {
            success: result.success,
            code: result.exit_code,
            output: result.combined_output(),
        })
    }

    /// Expected artifacts that are absent, in configured order.
    pub fn missing_artifacts(&self, host: &dyn Host) -> Vec<PathBuf> {
        self.config
            .expected_artifacts
            .iter()
            .filter(|relative| !host.is_file(&self.project_root.join(relative)))
            .cloned()
            .collect()
    }

    /// Run the full setup sequence.
    pub fn run(&self, host: &dyn Host, ui: &mut dyn UserInterface) -> Result<SetupReport> {
        ui.show_header(&format!("{} setup", self.config.app_name));

        let interpreter = Verifier::new(self.config, &self.project_root).resolve_interpreter(host)?;
        ui.success(&format!("Found {}", interpreter.describe()));

        if self.options.dry_run {
            return Ok(self.dry_run(host, interpreter, ui));
        }

        let directories = ensure_directories(host, &self.project_root, &self.config.directories)?;
        if directories.created.is_empty() {
            ui.success("Directory structure already in place");
        } else {
            ui.success(&format!(
                "Created {} of {} directories",
                directories.created.len(),
                directories.total()
            ));
        }

        let installed = if self.options.skip_install {
            ui.warning("Skipping dependency installation");
            false
        } else {
            self.install(host, &interpreter, ui)?;
            true
        };

        let missing_artifacts = self.missing_artifacts(host);
        for artifact in &missing_artifacts {
            ui.warning(&format!(
                "{} not found; the assistant may fail until it is added",
                artifact.display()
            ));
        }

        ui.success("Setup complete");
        if installed {
            ui.show_hint(hints::after_setup());
        } else {
            ui.show_hint(&hints::after_skipped_install(
                &self.config.fallback_command(),
            ));
        }

        Ok(SetupReport {
            interpreter,
            directories,
            installed,
            missing_artifacts,
        })
    }

    fn dry_run(
        &self,
        host: &dyn Host,
        interpreter: Interpreter,
        ui: &mut dyn UserInterface,
    ) -> SetupReport {
        let pending = pending_directories(host, &self.project_root, &self.config.directories);
        if pending.is_empty() {
            ui.message("All directories already exist");
        }
        for dir in &pending {
            ui.message(&format!("Would create {}", dir.display()));
        }
        if !self.options.skip_install {
            ui.message(&format!(
                "Would run: {}",
                self.install_invocation(&interpreter).display()
            ));
        }

        let missing_artifacts = self.missing_artifacts(host);
        for artifact in &missing_artifacts {
            ui.warning(&format!("{} not found", artifact.display()));
        }

        SetupReport {
            interpreter,
            directories: DirectoryReport::default(),
            installed: false,
            missing_artifacts,
        }
    }
}

struct InstallOutcome {
    success: bool,
    code: Option<i32>,
    output: String,
}

impl InstallOutcome {
    fn from_termination(termination: Termination) -> Self {
        let code = match termination {
            Termination::Exited(code) => Some(code),
            Termination::Interrupted | Termination::Signaled(_) => None,
        };
        Self {
            success: termination.is_success(),
            code,
            output: String::new(),
        }
    }
}

fn tail(output: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use crate::shell::CommandResult;
    use crate::ui::{MockUI, OutputMode, SpinnerStatus};
    use std::time::Duration;

    const ROOT: &str = "/p";

    fn python() -> Interpreter {
        Interpreter {
            name: "python".into(),
            path: PathBuf::from("/usr/bin/python"),
            version: Some("3.11.4".into()),
        }
    }

    fn project() -> MockHost {
        MockHost::new()
            .with_executable("python", "/usr/bin/python")
            .with_file("/p/requirements.txt")
    }

    fn pip_failure(code: i32, stderr: &str) -> CommandResult {
        CommandResult::failure(Some(code), String::new(), stderr.into(), Duration::ZERO)
    }

    #[test]
    fn install_runs_pip_through_the_interpreter() {
        let config = LaunchpadConfig::default();
        let host = project();
        let mut ui = MockUI::new();

        Bootstrapper::new(&config, ROOT)
            .install(&host, &python(), &mut ui)
            .unwrap();

        let invocations = host.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].program, PathBuf::from("/usr/bin/python"));
        assert_eq!(
            invocations[0].args,
            vec!["-m", "pip", "install", "-r", "requirements.txt"]
        );
        assert_eq!(
            ui.spinner_results(),
            vec![(SpinnerStatus::Success, "Dependencies installed".to_string())]
        );
    }

    #[test]
    fn install_without_manifest_is_missing_prerequisite() {
        let config = LaunchpadConfig::default();
        let host = MockHost::new();
        let mut ui = MockUI::new();

        let err = Bootstrapper::new(&config, ROOT)
            .install(&host, &python(), &mut ui)
            .unwrap_err();
        match err {
            LaunchpadError::MissingPrerequisiteFile { path, .. } => {
                assert_eq!(path, PathBuf::from("requirements.txt"))
            }
            other => panic!("expected MissingPrerequisiteFile, got {other:?}"),
        }
        assert!(host.invocations().is_empty());
    }

    #[test]
    fn failed_install_prints_guidance_and_fallback() {
        let config = LaunchpadConfig::default();
        let host = project().with_response(
            "pip install",
            pip_failure(1, "error: Microsoft Visual C++ 14.0 is required"),
        );
        let mut ui = MockUI::new();

        let err = Bootstrapper::new(&config, ROOT)
            .install(&host, &python(), &mut ui)
            .unwrap_err();

        match err {
            LaunchpadError::DependencyInstallFailure { command, code } => {
                assert!(command.contains("pip install -r requirements.txt"));
                assert_eq!(code, Some(1));
            }
            other => panic!("expected DependencyInstallFailure, got {other:?}"),
        }
        assert_eq!(ui.error_blocks().len(), 1);
        assert!(ui.error_blocks()[0].1.contains("Visual C++"));
        assert!(ui.has_message("build tools"));
        assert!(ui.has_message("Network"));
        assert!(ui.has_message("version mismatch"));
        assert!(ui.has_hint("pip install -r requirements.txt"));
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Error);
    }

    #[test]
    fn verbose_install_inherits_output() {
        let config = LaunchpadConfig::default();
        let host = project().with_termination(Termination::Exited(2));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let err = Bootstrapper::new(&config, ROOT)
            .install(&host, &python(), &mut ui)
            .unwrap_err();

        assert!(matches!(
            err,
            LaunchpadError::DependencyInstallFailure { code: Some(2), .. }
        ));
        assert_eq!(host.foreground_invocations().len(), 1);
        assert!(host.invocations().is_empty());
        assert!(ui.spinners().is_empty());
        assert!(ui.has_message("$ /usr/bin/python -m pip install"));
    }

    #[test]
    fn installer_that_cannot_start_propagates() {
        let config = LaunchpadConfig::default();
        let host = project().with_spawn_failure("pip");
        let mut ui = MockUI::new();

        let err = Bootstrapper::new(&config, ROOT)
            .install(&host, &python(), &mut ui)
            .unwrap_err();
        assert!(matches!(err, LaunchpadError::LaunchFailed { .. }));
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Error);
    }

    #[test]
    fn missing_artifacts_keep_configured_order() {
        let config = LaunchpadConfig::default();
        let host = MockHost::new().with_file("/p/main.py");

        let missing = Bootstrapper::new(&config, ROOT).missing_artifacts(&host);
        assert_eq!(
            missing,
            vec![
                PathBuf::from("dispatcher.py"),
                PathBuf::from("scripts/audio/voicemeeter_control.py"),
            ]
        );
    }

    #[test]
    fn run_creates_directories_installs_and_warns() {
        let config = LaunchpadConfig::default();
        let host = project().with_file("/p/main.py");
        let mut ui = MockUI::new();

        let report = Bootstrapper::new(&config, ROOT).run(&host, &mut ui).unwrap();

        assert!(report.installed);
        assert_eq!(report.directories.created.len(), config.directories.len());
        assert_eq!(report.missing_artifacts.len(), 2);
        assert!(ui.has_warning("dispatcher.py"));
        assert!(ui.has_warning("voicemeeter_control.py"));
        assert!(ui.has_success("Setup complete"));
        assert!(ui.has_hint("launchpad run"));
        assert_eq!(ui.headers(), ["Voice Assistant setup"]);
    }

    #[test]
    fn run_twice_is_idempotent() {
        let config = LaunchpadConfig::default();
        let host = project();

        Bootstrapper::new(&config, ROOT)
            .run(&host, &mut MockUI::new())
            .unwrap();
        let dirs = host.dirs();

        let mut ui = MockUI::new();
        let second = Bootstrapper::new(&config, ROOT).run(&host, &mut ui).unwrap();

        assert!(second.directories.created.is_empty());
        assert_eq!(host.dirs(), dirs);
        assert!(ui.has_success("already in place"));
    }

    #[test]
    fn run_without_interpreter_touches_nothing() {
        let config = LaunchpadConfig::default();
        let host = MockHost::new().with_file("/p/requirements.txt");

        let err = Bootstrapper::new(&config, ROOT)
            .run(&host, &mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, LaunchpadError::MissingInterpreter { .. }));
        assert!(host.created_dirs().is_empty());
    }

    #[test]
    fn install_failure_aborts_before_artifact_warnings() {
        let config = LaunchpadConfig::default();
        let host = project().with_response("pip install", pip_failure(1, "network unreachable"));
        let mut ui = MockUI::new();

        let result = Bootstrapper::new(&config, ROOT).run(&host, &mut ui);
        assert!(matches!(
            result,
            Err(LaunchpadError::DependencyInstallFailure { .. })
        ));
        assert!(!ui.has_success("Setup complete"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn skip_install_does_not_run_pip() {
        let config = LaunchpadConfig::default();
        let host = MockHost::new().with_executable("python", "/usr/bin/python");
        let mut ui = MockUI::new();

        let report = Bootstrapper::new(&config, ROOT)
            .with_options(SetupOptions {
                skip_install: true,
                dry_run: false,
            })
            .run(&host, &mut ui)
            .unwrap();

        assert!(!report.installed);
        assert!(host.invocations().iter().all(|i| !i.display().contains("pip")));
        assert!(ui.has_warning("Skipping dependency installation"));
        assert!(ui.has_hint("pip install -r requirements.txt"));
    }

    #[test]
    fn dry_run_changes_nothing() {
        let config = LaunchpadConfig::default();
        let host = project().with_dir("/p/logs");
        let mut ui = MockUI::new();

        let report = Bootstrapper::new(&config, ROOT)
            .with_options(SetupOptions {
                skip_install: false,
                dry_run: true,
            })
            .run(&host, &mut ui)
            .unwrap();

        assert!(!report.installed);
        assert!(host.created_dirs().is_empty());
        assert!(host.invocations().iter().all(|i| !i.display().contains("pip")));
        assert!(ui.has_message("Would create config"));
        assert!(!ui.has_message("Would create logs"));
        assert!(ui.has_message("Would run: /usr/bin/python -m pip install -r requirements.txt"));
    }

    #[test]
    fn failure_tail_keeps_last_lines() {
        let output: String = (1..=30).map(|i| format!("line {i}\n")).collect();
        let kept = tail(&output, 20);
        assert!(kept.starts_with("line 11"));
        assert!(kept.ends_with("line 30"));
    }
}
