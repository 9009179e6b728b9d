//! Default command registry.

use std::path::Path;

use crate::error::Result;
use crate::host::Host;

const DEFAULT_REGISTRY: &str = r#"commands:
- key: voicemeeter_control
  name: Voicemeeter Audio Control
  description: Control Voicemeeter audio routing and levels
  keywords:
  - patch
  - mute
  - unmute
  - volume
  - audio
  - strip
  - bus
  category: audio
  environment: python
  script_path: scripts/audio/voicemeeter_control.py
  ai_parsing: true
  modes:
  - general
  - streaming
- key: app_launcher
  name: Application Launcher
  description: Launch or close applications
  keywords:
  - open
  - launch
  - start
  - close
  - kill
  - app
  category: utility
  environment: python
  script_path: scripts/utility/app_launcher.py
  modes:
  - general
  - coding
  - study
"#;

/// The default registry document.
pub fn default_registry() -> &'static str {
    DEFAULT_REGISTRY
}

/// Write the default registry unless one already exists.
///
/// Returns `true` when the file was written. An existing registry is never
/// overwritten.
pub fn write_default_registry(
    host: &dyn Host,
    project_root: &Path,
    registry_file: &Path,
) -> Result<bool> {
    let path = project_root.join(registry_file);
    if host.exists(&path) {
        tracing::debug!("Registry already present at {}", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        host.create_dir_all(parent)?;
    }
    host.write_file(&path, DEFAULT_REGISTRY)?;
    tracing::debug!("Wrote default registry to {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use crate::registry::lint_registry;
    use std::path::PathBuf;

    #[test]
    fn default_registry_lints_clean_once_scripts_exist() {
        let host = MockHost::new()
            .with_dir("/p")
            .with_file("/p/scripts/audio/voicemeeter_control.py")
            .with_file("/p/scripts/utility/app_launcher.py");
        let written =
            write_default_registry(&host, Path::new("/p"), Path::new("config/commands.yaml"))
                .unwrap();
        assert!(written);

        let findings = lint_registry(&host, Path::new("/p"), Path::new("config/commands.yaml"));
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn existing_registry_is_never_overwritten() {
        let host = MockHost::new().with_file_contents("/p/config/commands.yaml", "commands: []\n");
        let written =
            write_default_registry(&host, Path::new("/p"), Path::new("config/commands.yaml"))
                .unwrap();

        assert!(!written);
        assert_eq!(
            host.file_contents(Path::new("/p/config/commands.yaml")).as_deref(),
            Some("commands: []\n")
        );
    }

    #[test]
    fn parent_directory_is_created() {
        let host = MockHost::new().with_dir("/p");
        write_default_registry(&host, Path::new("/p"), Path::new("config/commands.yaml")).unwrap();
        assert!(host.created_dirs().contains(&PathBuf::from("/p/config")));
    }

    #[test]
    fn default_registry_parses_as_yaml() {
        let doc: serde_yaml::Value = serde_yaml::from_str(default_registry()).unwrap();
        let commands = doc["commands"].as_sequence().unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0]["key"].as_str(), Some("voicemeeter_control"));
    }
}
