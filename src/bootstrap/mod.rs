//! Project bootstrap.
//!
//! Creates the directory skeleton, installs the dependency manifest with
//! the resolved interpreter, and warns about expected artifacts that are
//! still missing. Missing artifacts never fail setup.
//!
//! # Modules
//!
//! - [`directories`] - Idempotent directory creation
//! - [`installer`] - The [`Bootstrapper`] setup sequence

pub mod directories;
pub mod installer;

pub use directories::{ensure_directories, pending_directories, DirectoryReport};
pub use installer::{Bootstrapper, SetupOptions, SetupReport};
