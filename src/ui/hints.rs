//! Contextual hint text.
//!
//! Hints suggest the logical next action after a command finishes.

/// After a successful `setup`.
pub fn after_setup() -> &'static str {
    "Run `launchpad run` to start the assistant."
}

/// After `setup` when the installer was skipped.
pub fn after_skipped_install(fallback: &str) -> String {
    format!("Install dependencies later with `{}`.", fallback)
}

/// After a failed dependency install.
pub fn after_install_failure(fallback: &str) -> String {
    format!("Install manually with `{}`, then re-run `launchpad setup`.", fallback)
}

/// Possible causes printed when the installer fails.
pub fn install_failure_causes() -> &'static [&'static str] {
    &[
        "Missing native build tools (some packages compile C extensions)",
        "Network failure while downloading packages",
        "Package version mismatch with the installed interpreter",
    ]
}

/// After `check` passes.
pub fn after_check() -> &'static str {
    "Environment ready. Run `launchpad run` to start the assistant."
}

/// After `init`.
pub fn after_init() -> &'static str {
    "Run `launchpad setup` to create directories and install dependencies."
}

/// After the launched program exits with a failure code.
pub fn after_failed_launch(log_dir: &str) -> String {
    format!("Check {} for details.", log_dir)
}
