//! Filesystem and process access.
//!
//! Every component reaches the outside world through the [`Host`] trait
//! instead of calling `std::fs`, PATH lookups or `std::process` directly.
//! [`SystemHost`] is the real implementation; [`MockHost`] is an in-memory
//! one for tests.
//!
//! # Example
//!
//! ```
//! use launchpad::host::{Host, MockHost};
//! use std::path::Path;
//!
//! let host = MockHost::new().with_file("/project/main.py");
//! assert!(host.is_file(Path::new("/project/main.py")));
//! assert!(host.is_dir(Path::new("/project")));
//! ```

pub mod mock;

pub use mock::MockHost;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::requirements::probe::PathProbe;
use crate::shell::{
    execute, execute_foreground, execute_streaming, CommandOptions, CommandResult, Invocation,
    OutputCallback, Termination,
};

/// Access to the filesystem, PATH and child processes.
pub trait Host {
    /// Whether `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    /// Create a directory and its missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a file, creating or truncating it.
    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;

    /// Resolve an executable name on PATH.
    ///
    /// A relative name with a directory part, such as `.venv/bin/python`,
    /// is not searched for on PATH but resolved against `base`.
    fn find_executable(&self, name: &str, base: &Path) -> Option<PathBuf>;

    /// Run a command to completion.
    fn run(&self, invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult>;

    /// Run a command to completion, streaming its output lines.
    fn run_streaming(
        &self,
        invocation: &Invocation,
        options: &CommandOptions,
        callback: OutputCallback,
    ) -> Result<CommandResult>;

    /// Run a command in the foreground, forwarding interrupts to it.
    fn run_foreground(&self, invocation: &Invocation, options: &CommandOptions)
        -> Result<Termination>;
}

/// The real host: local filesystem, process PATH, spawned children.
#[derive(Debug, Clone)]
pub struct SystemHost {
    probe: PathProbe,
}

impl SystemHost {
    /// Create a host that searches the process PATH.
    pub fn new() -> Self {
        Self {
            probe: PathProbe::from_env(),
        }
    }

    /// Create a host with an explicit PATH probe.
    pub fn with_probe(probe: PathProbe) -> Self {
        Self { probe }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for SystemHost {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)?;
        Ok(())
    }

    fn find_executable(&self, name: &str, base: &Path) -> Option<PathBuf> {
        self.probe.resolve(name, base)
    }

    fn run(&self, invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult> {
        execute(invocation, options)
    }

    fn run_streaming(
        &self,
        invocation: &Invocation,
        options: &CommandOptions,
        callback: OutputCallback,
    ) -> Result<CommandResult> {
        execute_streaming(invocation, options, callback)
    }

    fn run_foreground(
        &self,
        invocation: &Invocation,
        options: &CommandOptions,
    ) -> Result<Termination> {
        execute_foreground(invocation, options)
    }
}
