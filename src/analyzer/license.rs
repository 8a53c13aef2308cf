use std::path::Path;

use crate::error::Result;
use crate::license::identify::identify;
use crate::license::spdx::classify_spdx_id;
use crate::matcher::{find_file, LICENSE_FILES};
use crate::models::{LicenseEvidence, LicenseRisk};

/// Finds the license file at the archive root and identifies its license.
///
/// An unreadable or unrecognized file still yields its name as the source,
/// with no identifier.
pub struct LicenseAnalyzer;

impl LicenseAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for LicenseAnalyzer {
    type Evidence = LicenseEvidence;

    fn analyze(&self, root: &Path) -> Result<LicenseEvidence> {
        let Some(file_name) = find_file(root, LICENSE_FILES) else {
            tracing::debug!("no license file in {}", root.display());
            return Ok(LicenseEvidence::default());
        };

        let identifier = match std::fs::read_to_string(root.join(&file_name)) {
            Ok(text) => identify(&text),
            Err(e) => {
                tracing::warn!("cannot read license file {}: {}", file_name, e);
                None
            }
        };

        let risk = identifier
            .as_deref()
            .map(classify_spdx_id)
            .unwrap_or(LicenseRisk::Unknown);

        Ok(LicenseEvidence {
            identifier,
            source_file: Some(file_name),
            risk,
        })
    }
}
