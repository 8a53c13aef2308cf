use std::path::Path;

use crate::error::Result;
use crate::matcher::{find_file, CHANGELOG_FILES};
use crate::models::ChangelogEvidence;

/// Counter limit used when none is configured.
pub const DEFAULT_MAX_INCREMENTS: usize = 10;

/// Extracts the changelog lines that follow the first mention of a version.
pub struct ChangelogAnalyzer {
    version: String,
    max_increments: usize,
}

impl ChangelogAnalyzer {
    pub fn new(version: &str, max_increments: usize) -> Self {
        Self {
            version: version.to_string(),
            max_increments,
        }
    }
}

impl super::Analyzer for ChangelogAnalyzer {
    type Evidence = ChangelogEvidence;

    fn analyze(&self, root: &Path) -> Result<ChangelogEvidence> {
        let Some(file_name) = find_file(root, CHANGELOG_FILES) else {
            tracing::debug!("no changelog file in {}", root.display());
            return Ok(ChangelogEvidence::default());
        };

        let lines = match std::fs::read_to_string(root.join(&file_name)) {
            Ok(text) => changelog_window(&text, &self.version, self.max_increments),
            Err(e) => {
                tracing::warn!("cannot read changelog {}: {}", file_name, e);
                Vec::new()
            }
        };

        if lines.is_empty() {
            tracing::debug!("{} never mentions {}", file_name, self.version);
        }

        Ok(ChangelogEvidence {
            source_file: Some(file_name),
            lines,
        })
    }
}

/// Collect lines starting at the first one containing `version`.
///
/// A single counter advances once for every line containing `version` and
/// once for every collected line; collection stops as soon as it exceeds
/// `max_increments`. Empty lines are kept, and `\r\n` endings read as `\n`.
pub fn changelog_window(text: &str, version: &str, max_increments: usize) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    let mut counter = 0usize;
    let mut window = Vec::new();

    for line in text.split('\n') {
        if line.contains(version) {
            counter += 1;
        }
        if counter != 0 {
            window.push(line.to_string());
            counter += 1;
            if counter > max_increments {
                break;
            }
        }
    }

    window
}
