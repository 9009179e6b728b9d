//! Check command implementation.
//!
//! The `launchpad check` command runs every prerequisite check without
//! creating or launching anything, then lints the command registry.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::preflight::{CheckReport, VerifiedEnvironment, Verifier};
use crate::registry::lint_registry;
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    ctx: CommandContext<'a>,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(ctx: CommandContext<'a>, args: CheckArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Run the checks and collect the report.
    pub fn report(&self) -> CheckReport {
        let config = self.ctx.config;
        let host = self.ctx.host;
        let verifier = Verifier::new(config, self.ctx.project_root);

        let (outcome, interpreter) = match verifier.resolve_interpreter(host) {
            Ok(found) => {
                let outcome = verifier.check_files(host).map(|files| VerifiedEnvironment {
                    interpreter: found.clone(),
                    project_root: self.ctx.project_root.to_path_buf(),
                    files,
                });
                (outcome, Some(found))
            }
            Err(e) => (Err(e), None),
        };

        let registry = lint_registry(host, self.ctx.project_root, &config.registry_file);
        CheckReport::from_outcome(config, &outcome, interpreter, registry)
    }

    fn render(&self, report: &CheckReport, ui: &mut dyn UserInterface) {
        ui.show_header(&format!("{} check", self.ctx.config.app_name));

        if let Some(interpreter) = &report.interpreter {
            ui.success(&format!("Found {}", interpreter.describe()));
        }
        for file in report.files.iter().filter(|f| f.present) {
            ui.success(&format!("{} found", file.path.display()));
        }

        if let Some(error) = &report.error {
            ui.error(error);
        }
        if let Some(hint) = &report.hint {
            ui.show_hint(hint);
        }

        for finding in &report.registry {
            ui.warning(&finding.to_string());
        }

        if report.ok {
            ui.success("All prerequisites satisfied");
            ui.show_hint(hints::after_check());
        }
    }
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &CheckReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| anyhow::Error::from(e).into())
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.report();
        tracing::debug!(
            "Check finished: ok={}, {} registry findings",
            report.ok,
            report.registry.len()
        );

        if self.args.json {
            println!("{}", render_json(&report)?);
        } else {
            self.render(&report, ui);
        }

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchpadConfig;
    use crate::host::MockHost;
    use crate::ui::MockUI;
    use std::path::{Path, PathBuf};

    const REGISTRY: &str = r#"
commands:
  - key: app_launcher
    name: Application Launcher
    description: Launch or close applications
    keywords: [open, launch]
    category: utility
    environment: python
    script_path: scripts/utility/app_launcher.py
"#;

    fn context<'a>(config: &'a LaunchpadConfig, host: &'a MockHost) -> CommandContext<'a> {
        CommandContext {
            project_root: Path::new("/p"),
            config,
            host,
        }
    }

    fn ready_host() -> MockHost {
        MockHost::new()
            .with_executable("python", "/usr/bin/python")
            .with_file("/p/dispatcher.py")
            .with_file("/p/main.py")
            .with_file_contents("/p/config/commands.yaml", REGISTRY)
            .with_file("/p/scripts/utility/app_launcher.py")
    }

    #[test]
    fn passing_check_exits_zero() {
        let config = LaunchpadConfig::default();
        let host = ready_host();
        let mut ui = MockUI::new();

        let result = CheckCommand::new(context(&config, &host), CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_success("All prerequisites satisfied"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_registry_fails_with_its_name() {
        let config = LaunchpadConfig::default();
        let host = MockHost::new()
            .with_executable("python", "/usr/bin/python")
            .with_file("/p/dispatcher.py")
            .with_file("/p/main.py");
        let mut ui = MockUI::new();

        let result = CheckCommand::new(context(&config, &host), CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_error("config/commands.yaml"));
        assert!(ui.has_hint("launchpad init --registry"));
        assert!(host.created_dirs().is_empty());
    }

    #[test]
    fn missing_interpreter_checks_no_files() {
        let config = LaunchpadConfig::default();
        let host = MockHost::new().with_file("/p/main.py");

        let report = CheckCommand::new(context(&config, &host), CheckArgs::default()).report();

        assert!(!report.ok);
        assert!(report.interpreter.is_none());
        assert!(report.files.is_empty());
        assert!(report.error.unwrap().contains("python"));
    }

    #[test]
    fn registry_findings_warn_without_failing() {
        let config = LaunchpadConfig::default();
        let host = MockHost::new()
            .with_executable("python", "/usr/bin/python")
            .with_file("/p/dispatcher.py")
            .with_file("/p/main.py")
            .with_file_contents("/p/config/commands.yaml", REGISTRY);
        let mut ui = MockUI::new();

        let result = CheckCommand::new(context(&config, &host), CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning("missing-script"));
    }

    #[test]
    fn json_report_names_missing_file() {
        let config = LaunchpadConfig::default();
        let host = MockHost::new()
            .with_executable("python", "/usr/bin/python")
            .with_file("/p/dispatcher.py");

        let report = CheckCommand::new(context(&config, &host), CheckArgs::default()).report();
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(json["ok"], false);
        assert_eq!(json["files"][1]["path"], "main.py");
        assert_eq!(json["files"][1]["present"], false);
        assert_eq!(report.files.last().map(|f| f.path.clone()), Some(PathBuf::from("main.py")));
    }
}
