//! Platform-specific process details.

/// Check if running in a CI environment.
///
/// Used to force non-interactive output in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// File names a bare executable name may have on disk.
///
/// On Windows, `python` is looked up as `python.exe`, `python.cmd` and
/// `python.bat` after the bare name. Names that already carry an
/// extension are returned unchanged.
pub fn executable_file_names(name: &str) -> Vec<String> {
    if cfg!(windows) && std::path::Path::new(name).extension().is_none() {
        vec![
            name.to_string(),
            format!("{}.exe", name),
            format!("{}.cmd", name),
            format!("{}.bat", name),
        ]
    } else {
        vec![name.to_string()]
    }
}
