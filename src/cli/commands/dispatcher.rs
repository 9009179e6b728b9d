//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for what every command runs against
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::LaunchpadConfig;
use crate::error::Result;
use crate::host::{Host, SystemHost};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a result that passes a child's exit code through.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
        }
    }
}

/// Everything a project command runs against.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    /// The project root.
    pub project_root: &'a Path,
    /// The loaded configuration.
    pub config: &'a LaunchpadConfig,
    /// Filesystem and process access.
    pub host: &'a dyn Host,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    host: Box<dyn Host>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self::with_host(project_root, Box::new(SystemHost::new()))
    }

    /// Create a dispatcher over a specific host.
    pub fn with_host(project_root: PathBuf, host: Box<dyn Host>) -> Self {
        Self { project_root, host }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// `config` is the result of loading the project configuration. Only
    /// commands that need it surface a load failure; `init` and
    /// `completions` run regardless.
    pub fn dispatch(
        &self,
        cli: &Cli,
        config: Result<LaunchpadConfig>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(
                    &self.project_root,
                    self.host.as_ref(),
                    cli.config.as_deref(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Setup(args)) => {
                let config = config?;
                let cmd = super::setup::SetupCommand::new(self.context(&config), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let config = config?;
                let cmd = super::check::CheckCommand::new(self.context(&config), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Run(args)) => {
                let config = config?;
                let cmd = super::run::RunCommand::new(self.context(&config), args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to run with no extra arguments
                let config = config?;
                let cmd = super::run::RunCommand::new(self.context(&config), RunArgs::default());
                cmd.execute(ui)
            }
        }
    }

    fn context<'a>(&'a self, config: &'a LaunchpadConfig) -> CommandContext<'a> {
        CommandContext {
            project_root: &self.project_root,
            config,
            host: self.host.as_ref(),
        }
    }
}
