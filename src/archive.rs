//! Unpacking of the collection archive under inspection.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::process;

pub trait ArchiveExtractor {
    /// Unpack `archive` into the existing directory `dest`.
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()>;
}

/// Extractor backed by the system `tar`, which detects the compression itself.
#[derive(Debug, Default)]
pub struct TarExtractor;

impl TarExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for TarExtractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        if !archive.is_file() {
            return Err(Error::Extraction {
                path: archive.to_path_buf(),
                reason: "no such file".to_string(),
            });
        }

        let mut command = Command::new("tar");
        command.arg("-xf").arg(archive).arg("-C").arg(dest);

        let output = process::run(command, None).map_err(|e| Error::Extraction {
            path: archive.to_path_buf(),
            reason: e.to_string(),
        })?;

        if !output.success() {
            return Err(Error::Extraction {
                path: archive.to_path_buf(),
                reason: format!("tar extraction failed: {}", output.stderr.trim()),
            });
        }

        tracing::debug!("extracted {} into {}", archive.display(), dest.display());
        Ok(())
    }
}
