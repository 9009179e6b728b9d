//! Configuration loading, parsing, and validation for launchpad.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use launchpad::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("launchpad.yml"), "app_name: Jarvis").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.app_name, "Jarvis");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    config_path, find_project_root, load_config, load_config_file, parse_config,
    CONFIG_FILE_NAME,
};
pub use schema::{
    InstallConfig, InterpreterConfig, LaunchpadConfig, OutputMode, Settings,
    MANIFEST_PLACEHOLDER,
};
pub use validator::{validate, validate_config, ValidationError};
