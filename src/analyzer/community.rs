use std::path::Path;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::scanner::TextScanner;

/// Collects references to the community namespace from YAML files.
///
/// Hits in changelog fragments are dropped: release notes mention other
/// collections without depending on them. A scanner failure, including an
/// include glob that does not compile, is reported as no references.
pub struct CommunityAnalyzer<'a> {
    scanner: &'a dyn TextScanner,
    marker: &'a str,
    include: &'a str,
    exclude: Vec<String>,
}

impl<'a> CommunityAnalyzer<'a> {
    pub fn new(scanner: &'a dyn TextScanner, config: &'a ScanConfig) -> Self {
        Self {
            scanner,
            marker: &config.marker,
            include: &config.include,
            exclude: config.exclude.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    fn is_excluded(&self, path: &str) -> bool {
        let lower = path.to_lowercase();
        self.exclude.iter().any(|e| lower.contains(e.as_str()))
    }
}

impl super::Analyzer for CommunityAnalyzer<'_> {
    type Evidence = Vec<String>;

    fn analyze(&self, root: &Path) -> Result<Vec<String>> {
        let hits = match self.scanner.scan(root, self.marker, self.include) {
            Ok(hits) => hits,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::warn!("community reference scan failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let references: Vec<String> = hits
            .into_iter()
            .filter(|hit| !self.is_excluded(&hit.path))
            .map(|hit| hit.to_string())
            .collect();

        tracing::debug!("{} community reference(s)", references.len());
        Ok(references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::error::Error;
    use crate::models::ScanHit;
    use tempfile::TempDir;

    struct FixedScanner(Vec<ScanHit>);

    impl TextScanner for FixedScanner {
        fn scan(&self, _root: &Path, _needle: &str, _include: &str) -> Result<Vec<ScanHit>> {
            Ok(self.0.clone())
        }
    }

    struct FailingScanner;

    impl TextScanner for FailingScanner {
        fn scan(&self, _root: &Path, _needle: &str, _include: &str) -> Result<Vec<ScanHit>> {
            Err(Error::ToolStatus {
                program: "grep".to_string(),
                code: Some(2),
            })
        }
    }

    fn hit(path: &str, line: usize, content: &str) -> ScanHit {
        ScanHit {
            path: path.to_string(),
            line,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_changelog_hits_are_dropped() {
        let scanner = FixedScanner(vec![
            hit("changelogs/changelog.yaml", 4, "- community.general 5.0.0"),
            hit("CHANGELOG.YML", 1, "community.docker"),
            hit("changelogs/fragments/1-fix.yml", 2, "- bump community.crypto"),
            hit("meta/runtime.yml", 9, "  redirect: community.general.foo"),
        ]);
        let config = ScanConfig::default();
        let dir = TempDir::new().unwrap();

        let references = CommunityAnalyzer::new(&scanner, &config)
            .analyze(dir.path())
            .unwrap();
        assert_eq!(
            references,
            vec![
                "changelogs/fragments/1-fix.yml:2:- bump community.crypto",
                "meta/runtime.yml:9:  redirect: community.general.foo",
            ]
        );
    }

    #[test]
    fn test_scanner_failure_means_no_references() {
        let config = ScanConfig::default();
        let dir = TempDir::new().unwrap();

        let references = CommunityAnalyzer::new(&FailingScanner, &config)
            .analyze(dir.path())
            .unwrap();
        assert!(references.is_empty());
    }

    #[test]
    fn test_invalid_include_means_no_references() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("galaxy.yml"), "- community.general\n").unwrap();

        let scanner = crate::scanner::builtin::BuiltinScanner::new();
        let config = ScanConfig {
            include: "[*.yml".to_string(),
            ..ScanConfig::default()
        };
        let references = CommunityAnalyzer::new(&scanner, &config)
            .analyze(dir.path())
            .unwrap();
        assert!(references.is_empty());
    }

    #[test]
    fn test_with_builtin_scanner() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("changelogs")).unwrap();
        std::fs::write(dir.path().join("changelogs/changelog.yml"), "community.general\n").unwrap();
        std::fs::write(dir.path().join("requirements.yml"), "- name: community.aws\n").unwrap();

        let scanner = crate::scanner::builtin::BuiltinScanner::new();
        let config = ScanConfig::default();
        let references = CommunityAnalyzer::new(&scanner, &config)
            .analyze(dir.path())
            .unwrap();
        assert_eq!(references, vec!["requirements.yml:1:- name: community.aws"]);
    }
}
