//! In-memory host for testing.
//!
//! `MockHost` implements the [`Host`] trait over a set of fake files,
//! directories and PATH executables, and records every process it is asked
//! to run. Command outcomes are scripted by matching a substring of the
//! rendered command line.
//!
//! # Example
//!
//! ```
//! use launchpad::host::{Host, MockHost};
//! use launchpad::shell::{CommandOptions, CommandResult, Invocation};
//! use std::path::Path;
//! use std::time::Duration;
//!
//! let host = MockHost::new()
//!     .with_executable("python", "/usr/bin/python")
//!     .with_response(
//!         "pip install",
//!         CommandResult::failure(Some(1), String::new(), "no network".into(), Duration::ZERO),
//!     );
//!
//! let inv = Invocation::new("/usr/bin/python", vec!["-m".into(), "pip".into(), "install".into()]);
//! let result = host.run(&inv, &CommandOptions::default()).unwrap();
//! assert!(!result.success);
//! assert_eq!(host.invocations().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{LaunchpadError, Result};
use crate::shell::{
    CommandOptions, CommandResult, Invocation, OutputCallback, OutputLine, Termination,
};

use super::Host;

/// Mock host implementation for testing.
#[derive(Debug)]
pub struct MockHost {
    files: RefCell<HashMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    executables: HashMap<String, PathBuf>,
    responses: Vec<(String, CommandResult)>,
    spawn_failures: Vec<String>,
    termination: Termination,
    created_dirs: RefCell<Vec<PathBuf>>,
    invocations: RefCell<Vec<Invocation>>,
    foreground: RefCell<Vec<(Invocation, CommandOptions)>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            files: RefCell::default(),
            dirs: RefCell::default(),
            executables: HashMap::new(),
            responses: Vec::new(),
            spawn_failures: Vec::new(),
            termination: Termination::Exited(0),
            created_dirs: RefCell::default(),
            invocations: RefCell::default(),
            foreground: RefCell::default(),
        }
    }
}

impl MockHost {
    /// Create an empty mock host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty file (and its parent directories).
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_file_contents(path, "")
    }

    /// Add a file with contents (and its parent directories).
    pub fn with_file_contents(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir_chain(parent);
        }
        self.files.borrow_mut().insert(path, contents.to_string());
        self
    }

    /// Add a directory (and its parents).
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.add_dir_chain(&path.into());
        self
    }

    /// Make an executable name resolvable on the fake PATH.
    pub fn with_executable(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.executables.insert(name.to_string(), path.into());
        self
    }

    /// Script the result of any command whose rendered line contains `needle`.
    ///
    /// The first matching response wins. Unmatched commands succeed with
    /// empty output.
    pub fn with_response(mut self, needle: &str, result: CommandResult) -> Self {
        self.responses.push((needle.to_string(), result));
        self
    }

    /// Make any command whose rendered line contains `needle` fail to spawn.
    pub fn with_spawn_failure(mut self, needle: &str) -> Self {
        self.spawn_failures.push(needle.to_string());
        self
    }

    /// Set how foreground commands terminate.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Directories created through [`Host::create_dir_all`], in order.
    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.created_dirs.borrow().clone()
    }

    /// Every directory the host currently knows about.
    pub fn dirs(&self) -> Vec<PathBuf> {
        self.dirs.borrow().iter().cloned().collect()
    }

    /// Contents of a fake file.
    pub fn file_contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// All captured and streamed invocations, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// All foreground invocations with their options, in order.
    pub fn foreground_invocations(&self) -> Vec<(Invocation, CommandOptions)> {
        self.foreground.borrow().clone()
    }

    fn add_dir_chain(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn check_spawn(&self, invocation: &Invocation) -> Result<()> {
        let line = invocation.display();
        if self.spawn_failures.iter().any(|n| line.contains(n)) {
            return Err(LaunchpadError::LaunchFailed {
                command: line,
                message: "No such file or directory".to_string(),
            });
        }
        Ok(())
    }

    fn response_for(&self, invocation: &Invocation) -> CommandResult {
        let line = invocation.display();
        self.responses
            .iter()
            .find(|(needle, _)| line.contains(needle))
            .map(|(_, result)| result.clone())
            .unwrap_or_else(|| CommandResult::success(String::new(), String::new(), Duration::ZERO))
    }
}

impl Host for MockHost {
    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if path
            .ancestors()
            .any(|ancestor| self.files.borrow().contains_key(ancestor))
        {
            return Err(LaunchpadError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", path.display()),
            )));
        }

        if !self.is_dir(path) {
            self.created_dirs.borrow_mut().push(path.to_path_buf());
            self.add_dir_chain(path);
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            LaunchpadError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.is_dir(parent) => {
                Err(LaunchpadError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} does not exist", parent.display()),
                )))
            }
            _ => {
                self.files
                    .borrow_mut()
                    .insert(path.to_path_buf(), contents.to_string());
                Ok(())
            }
        }
    }

    fn find_executable(&self, name: &str, base: &Path) -> Option<PathBuf> {
        if Path::new(name).components().count() > 1 {
            let path = base.join(name);
            return self.is_file(&path).then_some(path);
        }
        self.executables.get(name).cloned()
    }

    fn run(&self, invocation: &Invocation, _options: &CommandOptions) -> Result<CommandResult> {
        self.invocations.borrow_mut().push(invocation.clone());
        self.check_spawn(invocation)?;
        Ok(self.response_for(invocation))
    }

    fn run_streaming(
        &self,
        invocation: &Invocation,
        _options: &CommandOptions,
        callback: OutputCallback,
    ) -> Result<CommandResult> {
        self.invocations.borrow_mut().push(invocation.clone());
        self.check_spawn(invocation)?;
        let result = self.response_for(invocation);
        for line in result.stdout.lines() {
            callback(OutputLine::Stdout(line.to_string()));
        }
        for line in result.stderr.lines() {
            callback(OutputLine::Stderr(line.to_string()));
        }
        Ok(result)
    }

    fn run_foreground(
        &self,
        invocation: &Invocation,
        options: &CommandOptions,
    ) -> Result<Termination> {
        self.foreground
            .borrow_mut()
            .push((invocation.clone(), options.clone()));
        self.check_spawn(invocation)?;
        Ok(self.termination)
    }
}
