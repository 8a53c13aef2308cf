//! Registry presence probe.
//!
//! A [`RegistryClient`] downloads a collection tarball without its
//! dependencies; [`probe`] decides whether the collection already exists by
//! running that download into a private temporary directory.

use std::path::Path;

use crate::error::Result;
use crate::models::PackageCoordinates;

pub mod galaxy;

/// How a download attempt ended, as reported by the client's exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Completed,
    Failed { code: Option<i32> },
}

pub trait RegistryClient {
    /// Download the collection tarball for `coords` into `dest`.
    fn download(&self, coords: &PackageCoordinates, dest: &Path) -> Result<DownloadOutcome>;
}

/// Whether the registry already serves `coords`.
///
/// True only when the download completes and
/// `{namespace}-{name}-{version}.tar.gz` exists afterwards. Every failure
/// reads as `false`. The download directory is removed before returning.
pub fn probe(client: &dyn RegistryClient, coords: &PackageCoordinates) -> bool {
    let dir = match tempfile::TempDir::new() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("cannot create download directory: {}", e);
            return false;
        }
    };

    match client.download(coords, dir.path()) {
        Ok(DownloadOutcome::Completed) => {
            let present = dir.path().join(coords.artifact_name()).is_file();
            if !present {
                tracing::debug!("download reported success but {} is missing", coords.artifact_name());
            }
            present
        }
        Ok(DownloadOutcome::Failed { code }) => {
            tracing::debug!("download of {} failed with status {:?}", coords, code);
            false
        }
        Err(e) => {
            tracing::warn!("registry probe for {} failed: {}", coords, e);
            false
        }
    }
}
