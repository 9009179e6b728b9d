//! Setup command implementation.
//!
//! The `launchpad setup` command creates the directory skeleton, installs
//! dependencies and reports missing artifacts.

use crate::bootstrap::{Bootstrapper, SetupOptions};
use crate::cli::args::SetupArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The setup command implementation.
pub struct SetupCommand<'a> {
    ctx: CommandContext<'a>,
    args: SetupArgs,
}

impl<'a> SetupCommand<'a> {
    /// Create a new setup command.
    pub fn new(ctx: CommandContext<'a>, args: SetupArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SetupArgs {
        &self.args
    }
}

impl Command for SetupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let options = SetupOptions {
            skip_install: self.args.skip_install,
            dry_run: self.args.dry_run,
        };

        let report = Bootstrapper::new(self.ctx.config, self.ctx.project_root)
            .with_options(options)
            .run(self.ctx.host, ui)?;

        tracing::debug!(
            "Setup finished: {} directories created, installed={}, {} artifacts missing",
            report.directories.created.len(),
            report.installed,
            report.missing_artifacts.len()
        );

        Ok(CommandResult::success())
    }
}
