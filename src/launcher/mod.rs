//! Launching the assistant.
//!
//! The launcher repeats every prerequisite check, ensures the runtime
//! directories exist, and then runs the entry point in the foreground.
//! Interrupts reach the child, and how it stopped is reported back.
//!
//! ```text
//! checking ──▶ ready ──▶ running ──▶ terminated
//!     │                                  ▲
//!     └────────── check failed ──────────┘
//! ```

use std::path::{Path, PathBuf};

use crate::bootstrap::ensure_directories;
use crate::config::LaunchpadConfig;
use crate::error::Result;
use crate::host::Host;
use crate::preflight::Verifier;
use crate::shell::{CommandOptions, Invocation};
use crate::ui::{hints, UserInterface};

pub use crate::shell::Termination;

/// Runtime directory the assistant writes its log into.
const LOG_DIR: &str = "logs";

/// Verifies the project and runs its entry point.
pub struct Launcher<'a> {
    config: &'a LaunchpadConfig,
    project_root: PathBuf,
    extra_args: Vec<String>,
}

impl<'a> Launcher<'a> {
    /// Create a launcher for a project.
    pub fn new(config: &'a LaunchpadConfig, project_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            project_root: project_root.into(),
            extra_args: Vec::new(),
        }
    }

    /// Append arguments after the configured entry arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Verify the project and build the entry point invocation.
    ///
    /// Nothing is created unless every check passes.
    pub fn prepare(&self, host: &dyn Host) -> Result<Invocation> {
        let env = Verifier::new(self.config, &self.project_root).verify(host)?;
        ensure_directories(host, &self.project_root, &self.config.runtime_directories)?;

        let mut args = Vec::with_capacity(1 + self.config.entry_args.len() + self.extra_args.len());
        args.push(self.config.entry_point.to_string_lossy().into_owned());
        args.extend(self.config.entry_args.iter().cloned());
        args.extend(self.extra_args.iter().cloned());

        Ok(Invocation::new(env.interpreter.path, args))
    }

    /// Prepare, then run the entry point until it stops.
    pub fn launch(&self, host: &dyn Host, ui: &mut dyn UserInterface) -> Result<Termination> {
        let app = &self.config.app_name;
        ui.show_header(app);

        let invocation = self.prepare(host)?;
        ui.success("Environment verified");
        ui.message(&format!("Starting {}... (Ctrl+C to stop)", app));
        tracing::debug!("Launching {}", invocation.display());

        let termination =
            host.run_foreground(&invocation, &CommandOptions::inherited(&self.project_root))?;
        tracing::debug!("{} terminated: {:?}", app, termination);

        match termination {
            Termination::Exited(0) => ui.success(&format!("{} stopped", app)),
            Termination::Interrupted => ui.warning(&format!("{} interrupted", app)),
            Termination::Exited(code) => {
                ui.error(&format!("{} exited with code {}", app, code));
                if self.writes_logs() {
                    ui.show_hint(&hints::after_failed_launch(LOG_DIR));
                }
            }
            Termination::Signaled(signal) => {
                ui.error(&format!("{} was terminated by signal {}", app, signal));
            }
        }

        Ok(termination)
    }

    fn writes_logs(&self) -> bool {
        self.config
            .runtime_directories
            .iter()
            .any(|dir| dir.as_path() == Path::new(LOG_DIR))
    }
}
