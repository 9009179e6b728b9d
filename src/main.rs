//! launchpad CLI entry point.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use launchpad::cli::{Cli, CommandDispatcher};
use launchpad::config::{find_project_root, load_config, Settings};
use launchpad::shell::is_ci;
use launchpad::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Events go to stderr, and additionally to `log_file` without colors
/// when one is configured. Returns the open error if the file could not
/// be created.
fn init_tracing(debug: bool, log_file: Option<&Path>) -> Option<std::io::Error> {
    let filter = if debug {
        EnvFilter::new("launchpad=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("launchpad=info"))
    };

    let (file, open_error) = match log_file.map(open_log_file) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let file_layer = file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .with(filter)
        .init();

    open_error
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}

/// Project root: `--project`, else the nearest ancestor with a
/// `launchpad.yml`, else the current directory.
fn resolve_project_root(cli: &Cli) -> PathBuf {
    if let Some(project) = &cli.project {
        return project.clone();
    }
    let cwd = std::env::current_dir().unwrap_or_default();
    find_project_root(&cwd).unwrap_or(cwd)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let project_root = resolve_project_root(&cli);
    let config = load_config(&project_root, cli.config.as_deref());
    let settings = config
        .as_ref()
        .map(|c| c.settings.clone())
        .unwrap_or_else(|_| Settings::default());

    let log_file = settings.log_file.as_ref().map(|p| project_root.join(p));
    let log_error = init_tracing(cli.debug, log_file.as_deref());
    if let (Some(e), Some(path)) = (&log_error, &log_file) {
        tracing::warn!("Could not open log file {}: {}", path.display(), e);
    }

    tracing::debug!("launchpad starting with args: {:?}", cli);
    tracing::debug!("Project root: {}", project_root.display());

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet, settings.default_output.into());
    let mut ui = create_ui(!is_ci(), output_mode);

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, config, ui.as_mut()) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if let Some(hint) = e.hint() {
                ui.show_hint(&hint);
            }
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
