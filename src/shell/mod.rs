//! Process execution and platform details.

pub mod command;
pub mod platform;
pub mod signals;

pub use command::{
    execute, execute_foreground, execute_streaming, CommandOptions, CommandResult, Invocation,
    OutputCallback, OutputLine, Termination,
};
pub use platform::{executable_file_names, is_ci};
pub use signals::ForwardGuard;
