use std::path::Path;
use std::process::Command;
use std::time::Duration;

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::models::PackageCoordinates;
use crate::process;

use super::{DownloadOutcome, RegistryClient};

/// Registry client backed by `ansible-galaxy collection download`.
pub struct GalaxyCli {
    command: String,
    server: Option<String>,
    timeout: Option<Duration>,
}

impl GalaxyCli {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            command: config.command.clone(),
            server: config.server.clone(),
            timeout: config.timeout(),
        }
    }

    fn build_command(&self, coords: &PackageCoordinates, dest: &Path) -> Command {
        let mut command = Command::new(&self.command);
        command
            .args(["collection", "download", "--no-deps", "-p"])
            .arg(dest)
            .arg(coords.to_string());
        if let Some(server) = &self.server {
            command.args(["--server", server]);
        }
        command
    }
}

impl RegistryClient for GalaxyCli {
    fn download(&self, coords: &PackageCoordinates, dest: &Path) -> Result<DownloadOutcome> {
        let output = process::run(self.build_command(coords, dest), self.timeout)?;
        if output.success() {
            Ok(DownloadOutcome::Completed)
        } else {
            tracing::debug!("{} stderr: {}", self.command, output.stderr.trim());
            Ok(DownloadOutcome::Failed { code: output.code })
        }
    }
}
