//! Registry lint.
//!
//! Findings are advisory: `check` prints them as warnings and they never
//! affect the exit code.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

use crate::host::Host;

use super::{CATEGORIES, ENVIRONMENTS, MODES, REQUIRED_FIELDS};

/// A problem found in the command registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryFinding {
    /// Short rule identifier, e.g. `missing-field`.
    pub rule: &'static str,
    /// The entry's key, or its 1-based position when it has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl RegistryFinding {
    fn new(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule,
            entry: None,
            message: message.into(),
        }
    }

    fn for_entry(rule: &'static str, entry: &str, message: impl Into<String>) -> Self {
        Self {
            rule,
            entry: Some(entry.to_string()),
            message: message.into(),
        }
    }
}

impl fmt::Display for RegistryFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            Some(entry) => write!(f, "{}: {} [{}]", entry, self.message, self.rule),
            None => write!(f, "{} [{}]", self.message, self.rule),
        }
    }
}

/// Lint the registry at `registry_file` (relative to `project_root`).
///
/// An absent registry yields no findings; the verifier reports it.
pub fn lint_registry(
    host: &dyn Host,
    project_root: &Path,
    registry_file: &Path,
) -> Vec<RegistryFinding> {
    let path = project_root.join(registry_file);
    if !host.is_file(&path) {
        return Vec::new();
    }

    let content = match host.read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            return vec![RegistryFinding::new(
                "unreadable",
                format!("Could not read {}: {}", registry_file.display(), e),
            )]
        }
    };

    let document: Value = match serde_yaml::from_str(&content) {
        Ok(document) => document,
        Err(e) => {
            return vec![RegistryFinding::new(
                "parse-error",
                format!("{} is not valid YAML: {}", registry_file.display(), e),
            )]
        }
    };

    let Some(commands) = document.get("commands").and_then(Value::as_sequence) else {
        return vec![RegistryFinding::new(
            "missing-commands",
            format!("{} has no top-level `commands` list", registry_file.display()),
        )];
    };

    let mut findings = Vec::new();
    let mut seen = HashSet::new();

    for (index, entry) in commands.iter().enumerate() {
        let label = entry
            .get("key")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index + 1));

        if !entry.is_mapping() {
            findings.push(RegistryFinding::for_entry(
                "invalid-entry",
                &label,
                "entry is not a mapping",
            ));
            continue;
        }

        for field in REQUIRED_FIELDS {
            if entry.get(field).is_none() {
                findings.push(RegistryFinding::for_entry(
                    "missing-field",
                    &label,
                    format!("missing required field `{}`", field),
                ));
            }
        }

        if let Some(key) = entry.get("key").and_then(Value::as_str) {
            if !seen.insert(key.to_string()) {
                findings.push(RegistryFinding::for_entry(
                    "duplicate-key",
                    &label,
                    "key is already used by an earlier entry",
                ));
            }
        }

        check_value(entry, "category", CATEGORIES, &label, &mut findings);
        check_value(entry, "environment", ENVIRONMENTS, &label, &mut findings);

        if let Some(keywords) = entry.get("keywords") {
            let valid = keywords
                .as_sequence()
                .is_some_and(|seq| seq.iter().all(Value::is_string));
            if !valid {
                findings.push(RegistryFinding::for_entry(
                    "invalid-keywords",
                    &label,
                    "`keywords` must be a list of strings",
                ));
            }
        }

        if let Some(modes) = entry.get("modes").and_then(Value::as_sequence) {
            for mode in modes {
                let name = mode.as_str().unwrap_or_default();
                if !MODES.contains(&name) {
                    findings.push(RegistryFinding::for_entry(
                        "unknown-mode",
                        &label,
                        format!("unknown mode `{}` (expected one of: {})", name, MODES.join(", ")),
                    ));
                }
            }
        }

        // System commands store a command line rather than a script path
        let is_system = entry.get("environment").and_then(Value::as_str) == Some("system");
        if let Some(script) = entry.get("script_path").and_then(Value::as_str) {
            if !is_system && !host.is_file(&project_root.join(script)) {
                findings.push(RegistryFinding::for_entry(
                    "missing-script",
                    &label,
                    format!("script `{}` does not exist", script),
                ));
            }
        }
    }

    tracing::debug!(
        "Registry lint: {} entries, {} findings",
        commands.len(),
        findings.len()
    );
    findings
}

fn check_value(
    entry: &Value,
    field: &str,
    allowed: &[&str],
    label: &str,
    findings: &mut Vec<RegistryFinding>,
) {
    let Some(value) = entry.get(field) else {
        return;
    };
    let name = value.as_str().unwrap_or_default();
    if !allowed.contains(&name) {
        let rule = match field {
            "category" => "unknown-category",
            _ => "unknown-environment",
        };
        findings.push(RegistryFinding::for_entry(
            rule,
            label,
            format!(
                "unknown {} `{}` (expected one of: {})",
                field,
                name,
                allowed.join(", ")
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;

    const REGISTRY: &str = "/p/config/commands.yaml";

    fn lint(host: &MockHost) -> Vec<RegistryFinding> {
        lint_registry(host, Path::new("/p"), Path::new("config/commands.yaml"))
    }

    fn rules(findings: &[RegistryFinding]) -> Vec<&'static str> {
        findings.iter().map(|f| f.rule).collect()
    }

    const VALID: &str = r#"
commands:
  - key: app_launcher
    name: Application Launcher
    description: Launch or close applications
    keywords: [open, launch]
    category: utility
    environment: python
    script_path: scripts/utility/app_launcher.py
    modes: [general, coding]
  - key: lock
    name: Lock
    description: Lock the workstation
    keywords: [lock]
    category: system
    environment: system
    script_path: rundll32.exe user32.dll,LockWorkStation
"#;

    #[test]
    fn valid_registry_has_no_findings() {
        let host = MockHost::new()
            .with_file_contents(REGISTRY, VALID)
            .with_file("/p/scripts/utility/app_launcher.py");
        assert!(lint(&host).is_empty());
    }

    #[test]
    fn absent_registry_has_no_findings() {
        assert!(lint(&MockHost::new()).is_empty());
    }

    #[test]
    fn invalid_yaml_is_reported() {
        let host = MockHost::new().with_file_contents(REGISTRY, "commands: [unclosed");
        assert_eq!(rules(&lint(&host)), ["parse-error"]);
    }

    #[test]
    fn missing_commands_list_is_reported() {
        let host = MockHost::new().with_file_contents(REGISTRY, "other: 1\n");
        assert_eq!(rules(&lint(&host)), ["missing-commands"]);

        let host = MockHost::new().with_file_contents(REGISTRY, "");
        assert_eq!(rules(&lint(&host)), ["missing-commands"]);
    }

    #[test]
    fn missing_fields_are_named() {
        let host = MockHost::new().with_file_contents(
            REGISTRY,
            "commands:\n  - key: bare\n    environment: system\n",
        );
        let findings = lint(&host);
        let missing: Vec<&str> = findings
            .iter()
            .filter(|f| f.rule == "missing-field")
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(missing.len(), 5);
        assert!(missing.iter().any(|m| m.contains("`script_path`")));
        assert!(findings.iter().all(|f| f.entry.as_deref() == Some("bare")));
    }

    #[test]
    fn unknown_enumerations_are_reported() {
        let host = MockHost::new().with_file_contents(
            REGISTRY,
            r#"
commands:
  - key: odd
    name: Odd
    description: Odd
    keywords: [odd]
    category: gaming
    environment: ruby
    script_path: odd.rb
    modes: [general, party]
"#,
        );
        let found = rules(&lint(&host));
        assert!(found.contains(&"unknown-category"));
        assert!(found.contains(&"unknown-environment"));
        assert!(found.contains(&"unknown-mode"));
        assert!(found.contains(&"missing-script"));
    }

    #[test]
    fn duplicate_keys_are_reported_once_per_repeat() {
        let entry = "  - {key: dup, name: n, description: d, keywords: [k], category: system, environment: system, script_path: x}\n";
        let host =
            MockHost::new().with_file_contents(REGISTRY, &format!("commands:\n{entry}{entry}{entry}"));
        let findings = lint(&host);
        assert_eq!(rules(&findings), ["duplicate-key", "duplicate-key"]);
    }

    #[test]
    fn entries_without_keys_are_labelled_by_position() {
        let host = MockHost::new().with_file_contents(REGISTRY, "commands:\n  - 42\n");
        let findings = lint(&host);
        assert_eq!(rules(&findings), ["invalid-entry"]);
        assert_eq!(findings[0].entry.as_deref(), Some("#1"));
    }

    #[test]
    fn display_includes_entry_and_rule() {
        let finding = RegistryFinding::for_entry("missing-script", "x", "script `a.py` does not exist");
        assert_eq!(
            finding.to_string(),
            "x: script `a.py` does not exist [missing-script]"
        );
    }
}
