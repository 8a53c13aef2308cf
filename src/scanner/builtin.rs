use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::error::{Error, Result};
use crate::models::ScanHit;

/// In-process scanner that walks the tree with `glob` and reads files directly.
///
/// Files that cannot be read as UTF-8 are skipped, matching grep's behaviour
/// of not reporting text matches inside binary files.
pub struct BuiltinScanner;

impl BuiltinScanner {
    pub fn new() -> Self {
        Self
    }
}

impl super::TextScanner for BuiltinScanner {
    fn scan(&self, root: &Path, needle: &str, include: &str) -> Result<Vec<ScanHit>> {
        Pattern::new(include).map_err(|e| Error::Pattern {
            pattern: include.to_string(),
            reason: e.to_string(),
        })?;

        let walk = format!("{}/**/{}", Pattern::escape(&root.to_string_lossy()), include);
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        let paths = glob::glob_with(&walk, options).map_err(|e| Error::Pattern {
            pattern: include.to_string(),
            reason: e.to_string(),
        })?;

        let mut files: Vec<_> = paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        let mut hits = Vec::new();
        for path in files {
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let display = super::relative_display(root, &path);
            for (idx, line) in content.lines().enumerate() {
                if line.contains(needle) {
                    hits.push(ScanHit {
                        path: display.clone(),
                        line: idx + 1,
                        content: line.to_string(),
                    });
                }
            }
        }

        Ok(hits)
    }
}
