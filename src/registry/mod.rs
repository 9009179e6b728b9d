//! The assistant's command registry.
//!
//! `launchpad` never interprets registry commands. It only lints the file
//! for structural mistakes that would make the assistant skip or crash on
//! an entry, and can write the default two-command registry.
//!
//! # Modules
//!
//! - [`lint`] - Read-only registry checks reported as warnings
//! - [`default`] - The default registry written by `launchpad init --registry`

pub mod default;
pub mod lint;

pub use default::{default_registry, write_default_registry};
pub use lint::{lint_registry, RegistryFinding};

/// Categories the assistant knows how to route.
pub const CATEGORIES: &[&str] = &[
    "utility",
    "audio",
    "coding",
    "productivity",
    "knowledge",
    "system",
];

/// Environments the assistant can execute scripts in.
pub const ENVIRONMENTS: &[&str] = &["python", "ahk", "java", "nodejs", "system"];

/// Assistant modes a command can be limited to.
pub const MODES: &[&str] = &["general", "coding", "study", "streaming"];

/// Fields every registry entry must carry.
pub const REQUIRED_FIELDS: &[&str] = &[
    "key",
    "name",
    "description",
    "keywords",
    "category",
    "environment",
    "script_path",
];
