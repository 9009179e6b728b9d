//! launchpad - pre-flight checks, bootstrap and launch for a local voice
//! assistant.
//!
//! launchpad replaces ad-hoc setup and start scripts: `setup` creates the
//! project skeleton and installs dependencies, `check` verifies every
//! prerequisite without side effects, and `run` verifies the same
//! prerequisites before starting the assistant in the foreground.
//!
//! # Modules
//!
//! - [`bootstrap`] - Directory creation and dependency installation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`host`] - Filesystem and process access behind a trait
//! - [`launcher`] - Verified foreground launch of the entry point
//! - [`preflight`] - Ordered prerequisite verification
//! - [`registry`] - Command registry lint and default registry
//! - [`requirements`] - Interpreter discovery on PATH
//! - [`shell`] - Child process execution and interrupt forwarding
//! - [`ui`] - Spinners, status lines, and terminal output
//!
//! # Example
//!
//! ```
//! use launchpad::config::LaunchpadConfig;
//! use launchpad::host::MockHost;
//! use launchpad::preflight::Verifier;
//!
//! let config = LaunchpadConfig::default();
//! let host = MockHost::new()
//!     .with_executable("python", "/usr/bin/python")
//!     .with_file("/app/dispatcher.py")
//!     .with_file("/app/main.py");
//!
//! let err = Verifier::new(&config, "/app").verify(&host).unwrap_err();
//! assert_eq!(err.to_string(), "Missing required file: config/commands.yaml");
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod launcher;
pub mod preflight;
pub mod registry;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{LaunchpadError, Result};
