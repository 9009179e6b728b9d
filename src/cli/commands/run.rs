//! Run command implementation.
//!
//! The `launchpad run` command verifies the environment and starts the
//! assistant in the foreground. The child's exit code becomes ours.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::launcher::Launcher;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    ctx: CommandContext<'a>,
    args: RunArgs,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(ctx: CommandContext<'a>, args: RunArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let termination = Launcher::new(self.ctx.config, self.ctx.project_root)
            .with_args(self.args.args.clone())
            .launch(self.ctx.host, ui)?;

        Ok(CommandResult::from_exit_code(termination.exit_code()))
    }
}
