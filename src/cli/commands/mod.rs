//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`launchpad setup`, `launchpad run`)
//! - Configuration loaded once, in `main`
//! - Every command running against the same [`Host`](crate::host::Host)

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod run;
pub mod setup;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
