use serde::{Deserialize, Serialize};

/// Identifies the collection under inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageCoordinates {
    pub namespace: String,
    pub name: String,
    pub version: String,
}

impl PackageCoordinates {
    pub fn new(namespace: &str, name: &str, version: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// File name the registry client is expected to produce for these coordinates.
    pub fn artifact_name(&self) -> String {
        format!("{}-{}-{}.tar.gz", self.namespace, self.name, self.version)
    }
}

impl std::fmt::Display for PackageCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}:{}", self.namespace, self.name, self.version)
    }
}

/// License file found at the archive root, with the identifier guessed from its text.
///
/// Both fields are `None` when no candidate file exists. `identifier` alone is
/// `None` when the file exists but its text is not recognized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseEvidence {
    pub identifier: Option<String>,
    pub source_file: Option<String>,
    pub risk: LicenseRisk,
}

impl LicenseEvidence {
    pub fn is_absent(&self) -> bool {
        self.source_file.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum LicenseRisk {
    Permissive,
    WeakCopyleft,
    StrongCopyleft,
    #[default]
    Unknown,
}

impl std::fmt::Display for LicenseRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseRisk::Permissive => write!(f, "Permissive"),
            LicenseRisk::WeakCopyleft => write!(f, "Weak Copyleft"),
            LicenseRisk::StrongCopyleft => write!(f, "Strong Copyleft"),
            LicenseRisk::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Lines of the changelog starting at the first mention of the target version.
///
/// Empty both when no changelog exists and when the version never appears;
/// `source_file` tells the two apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEvidence {
    pub source_file: Option<String>,
    pub lines: Vec<String>,
}

impl ChangelogEvidence {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One `requirements.txt` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementEntry {
    pub name: String,
    pub constraints: Vec<String>,
}

/// A single grep-style match of the community marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanHit {
    pub path: String,
    pub line: usize,
    pub content: String,
}

impl std::fmt::Display for ScanHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.content)
    }
}

/// Everything learned about one collection archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    pub coordinates: PackageCoordinates,
    /// `None` when the registry probe was skipped.
    pub exists_in_registry: Option<bool>,
    pub requires_ansible: Option<String>,
    pub license: LicenseEvidence,
    pub changelog: ChangelogEvidence,
    pub requirements: Vec<RequirementEntry>,
    pub community_references: Vec<String>,
}
