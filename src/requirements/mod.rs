//! Executable and interpreter detection.
//!
//! # Modules
//!
//! - [`probe`] - PATH walking for executables
//! - [`interpreter`] - Interpreter candidate resolution and version reading

pub mod interpreter;
pub mod probe;

pub use interpreter::{extract_version, resolve_interpreter, Interpreter};
pub use probe::{is_executable, parse_system_path, resolve_tool_path, PathProbe};
