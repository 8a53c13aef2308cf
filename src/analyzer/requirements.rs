use std::path::Path;

use crate::error::Result;
use crate::models::RequirementEntry;
use crate::requirement::parse_requirements;

/// Lists the Python dependencies declared in `requirements.txt` at the archive root.
///
/// The file name is matched exactly. A malformed entry fails the whole analysis.
pub struct RequirementsAnalyzer;

impl RequirementsAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for RequirementsAnalyzer {
    type Evidence = Vec<RequirementEntry>;

    fn analyze(&self, root: &Path) -> Result<Vec<RequirementEntry>> {
        let path = root.join("requirements.txt");
        if !path.is_file() {
            return Ok(Vec::new());
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("cannot read {}: {}", path.display(), e);
                return Ok(Vec::new());
            }
        };

        let entries = parse_requirements(&content)?;
        tracing::debug!("{} requirement(s) declared", entries.len());
        Ok(entries)
    }
}
