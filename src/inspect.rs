//! Assembles an [`InspectionReport`] from the individual analyzers.

use std::path::Path;

use crate::analyzer::changelog::ChangelogAnalyzer;
use crate::analyzer::community::CommunityAnalyzer;
use crate::analyzer::license::LicenseAnalyzer;
use crate::analyzer::requirements::RequirementsAnalyzer;
use crate::analyzer::runtime::RuntimeAnalyzer;
use crate::analyzer::Analyzer;
use crate::config::Config;
use crate::error::Result;
use crate::models::{InspectionReport, PackageCoordinates};
use crate::registry::{self, RegistryClient};
use crate::scanner::TextScanner;

/// Runs every analyzer over one extracted archive.
///
/// All analyzers run even when earlier ones find nothing. The only error that
/// can stop assembly is a fatal one, in practice a malformed requirements file.
pub struct Inspector<'a> {
    config: &'a Config,
    registry: Option<Box<dyn RegistryClient + 'a>>,
    scanner: Box<dyn TextScanner + 'a>,
}

impl<'a> Inspector<'a> {
    /// `registry: None` skips the registry probe; the report then carries no presence result.
    pub fn new(
        config: &'a Config,
        registry: Option<Box<dyn RegistryClient + 'a>>,
        scanner: Box<dyn TextScanner + 'a>,
    ) -> Self {
        Self {
            config,
            registry,
            scanner,
        }
    }

    pub fn inspect(&self, root: &Path, coords: &PackageCoordinates) -> Result<InspectionReport> {
        tracing::debug!("inspecting {} in {}", coords, root.display());

        let exists_in_registry = self
            .registry
            .as_deref()
            .map(|client| registry::probe(client, coords));

        let requires_ansible = RuntimeAnalyzer::new().analyze(root)?;
        let license = LicenseAnalyzer::new().analyze(root)?;
        let changelog =
            ChangelogAnalyzer::new(&coords.version, self.config.changelog.max_increments).analyze(root)?;
        let requirements = RequirementsAnalyzer::new().analyze(root)?;
        let community_references =
            CommunityAnalyzer::new(self.scanner.as_ref(), &self.config.scan).analyze(root)?;

        Ok(InspectionReport {
            coordinates: coords.clone(),
            exists_in_registry,
            requires_ansible,
            license,
            changelog,
            requirements,
            community_references,
        })
    }
}
