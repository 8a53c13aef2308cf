use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::analyzer::changelog::DEFAULT_MAX_INCREMENTS;

/// Root configuration structure, deserialized from `.collection-checkr/config.toml`.
///
/// Every section and key is optional; missing values take the defaults below.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub scan: ScanConfig,
    pub changelog: ChangelogConfig,
}

/// How the registry presence probe invokes the registry client.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Executable providing `collection download`. Defaults to `ansible-galaxy`.
    pub command: String,
    /// Passed as `--server` when set.
    pub server: Option<String>,
    /// Kill the download after this many seconds. Unset waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            command: "ansible-galaxy".to_string(),
            server: None,
            timeout_secs: None,
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Which implementation searches the archive for community references.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanBackend {
    /// External `grep -rHnF`.
    Grep,
    /// In-process directory walk.
    Builtin,
}

/// Community reference scan settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub backend: ScanBackend,
    /// Literal substring marking a community collection reference.
    pub marker: String,
    /// Glob matched against file names.
    pub include: String,
    /// Hits whose path contains any of these (case-insensitive) are dropped.
    pub exclude: Vec<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            backend: ScanBackend::Grep,
            marker: "community.".to_string(),
            include: "*.y*l".to_string(),
            exclude: vec!["changelog.yml".to_string(), "changelog.yaml".to_string()],
            timeout_secs: None,
        }
    }
}

impl ScanConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Counter cutoff for the changelog window; roughly the number of lines shown.
    pub max_increments: usize,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            max_increments: DEFAULT_MAX_INCREMENTS,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<base>/.collection-checkr/config.toml`
/// 3. `~/.config/collection-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = base.join(".collection-checkr").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("collection-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    glob::Pattern::new(&config.scan.include).with_context(|| {
        format!(
            "invalid [scan] include glob `{}` in {}",
            config.scan.include,
            path.display()
        )
    })?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}
