//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Launchpad - verify, bootstrap and launch the voice assistant.
#[derive(Debug, Parser)]
#[command(name = "launchpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file, relative to the project root (default: launchpad.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output, including installer output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create directories and install dependencies
    Setup(SetupArgs),

    /// Verify the environment and start the assistant (default if no command specified)
    Run(RunArgs),

    /// Verify the environment and lint the command registry without launching
    Check(CheckArgs),

    /// Write a default launchpad.yml
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Create directories without installing dependencies
    #[arg(long)]
    pub skip_install: bool,

    /// Show what would be created and run without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Extra arguments passed to the entry point (after `--`)
    #[arg(last = true)]
    pub args: Vec<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing launchpad.yml
    #[arg(long)]
    pub force: bool,

    /// Also write the default command registry when it is absent
    #[arg(long)]
    pub registry: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["launchpad"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn setup_flags_parse() {
        let cli = Cli::try_parse_from(["launchpad", "setup", "--skip-install", "--dry-run"]).unwrap();
        match cli.command {
            Some(Commands::Setup(args)) => {
                assert!(args.skip_install);
                assert!(args.dry_run);
            }
            other => panic!("expected setup, got {other:?}"),
        }
    }

    #[test]
    fn run_collects_trailing_args() {
        let cli = Cli::try_parse_from(["launchpad", "run", "--", "--mode", "coding"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.args, vec!["--mode", "coding"]),
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["launchpad", "check", "--json", "--project", "/tmp/x", "--debug"])
                .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/x")));
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Check(CheckArgs { json: true }))));
    }

    #[test]
    fn init_flags_parse() {
        let cli = Cli::try_parse_from(["launchpad", "init", "--force", "--registry"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => {
                assert!(args.force);
                assert!(args.registry);
            }
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["launchpad", "deploy"]).is_err());
    }
}
