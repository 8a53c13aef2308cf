use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Path of the runtime manifest relative to the archive root.
pub const RUNTIME_MANIFEST: &str = "meta/runtime.yml";

#[derive(Debug, Deserialize)]
struct RuntimeManifest {
    requires_ansible: Option<serde_yaml::Value>,
}

/// Scalars are accepted as-is so that an unquoted `2.9` still reads as a constraint.
fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads the `requires_ansible` constraint from `meta/runtime.yml`.
///
/// A missing file, a missing key or unparsable YAML all mean no constraint
/// is declared.
pub struct RuntimeAnalyzer;

impl RuntimeAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for RuntimeAnalyzer {
    type Evidence = Option<String>;

    fn analyze(&self, root: &Path) -> Result<Option<String>> {
        let path = root.join(RUNTIME_MANIFEST);
        if !path.is_file() {
            tracing::debug!("{} not present", RUNTIME_MANIFEST);
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("cannot read {}: {}", path.display(), e);
                return Ok(None);
            }
        };

        match serde_yaml::from_str::<RuntimeManifest>(&content) {
            Ok(manifest) => Ok(manifest.requires_ansible.and_then(scalar_to_string)),
            Err(e) => {
                tracing::warn!("cannot parse {}: {}", RUNTIME_MANIFEST, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) {
        std::fs::create_dir_all(dir.path().join("meta")).unwrap();
        std::fs::write(dir.path().join(RUNTIME_MANIFEST), content).unwrap();
    }

    #[test]
    fn test_reads_constraint() {
        let dir = TempDir::new().unwrap();
        write_manifest(
            &dir,
            "---\nrequires_ansible: \">=2.9\"\nplugin_routing:\n  modules: {}\n",
        );
        assert_eq!(
            RuntimeAnalyzer::new().analyze(dir.path()).unwrap().as_deref(),
            Some(">=2.9")
        );
    }

    #[test]
    fn test_missing_file_or_key() {
        let dir = TempDir::new().unwrap();
        assert_eq!(RuntimeAnalyzer::new().analyze(dir.path()).unwrap(), None);

        write_manifest(&dir, "plugin_routing: {}\n");
        assert_eq!(RuntimeAnalyzer::new().analyze(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_unquoted_number() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "requires_ansible: 2.9\n");
        assert_eq!(
            RuntimeAnalyzer::new().analyze(dir.path()).unwrap().as_deref(),
            Some("2.9")
        );
    }

    #[test]
    fn test_unparsable_yaml() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "requires_ansible: [unterminated\n");
        assert_eq!(RuntimeAnalyzer::new().analyze(dir.path()).unwrap(), None);
    }
}
