use std::path::Path;

/// Case-insensitive license file names looked up at the archive root.
pub const LICENSE_FILES: &[&str] = &["license", "license.rst", "license.md", "license.txt", "copying"];

/// Case-insensitive changelog file names looked up at the archive root.
pub const CHANGELOG_FILES: &[&str] = &["changelog", "changelog.rst", "changelog.md", "changelog.txt"];

/// Return the name of the first file in `dir` whose lowercased name equals one of `candidates`.
///
/// Entries are visited in `read_dir` order, so when several candidates exist
/// the winner is whichever the platform lists first. Directories never match,
/// and an unreadable directory is treated as containing no match.
pub fn find_file(dir: &Path, candidates: &[&str]) -> Option<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("cannot list {}: {}", dir.display(), e);
            return None;
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .find(|name| {
            let lower = name.to_lowercase();
            candidates.iter().any(|c| *c == lower)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_matches_any_case() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md"), "readme").unwrap();
        std::fs::write(dir.path().join("License.TXT"), "text").unwrap();

        assert_eq!(
            find_file(dir.path(), LICENSE_FILES).as_deref(),
            Some("License.TXT")
        );
    }

    #[test]
    fn test_no_prefix_matching() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("LICENSE-MIT"), "text").unwrap();
        std::fs::write(dir.path().join("CHANGELOG.yaml"), "text").unwrap();

        assert_eq!(find_file(dir.path(), LICENSE_FILES), None);
        assert_eq!(find_file(dir.path(), CHANGELOG_FILES), None);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("LICENSE")).unwrap();
        std::fs::create_dir(dir.path().join("changelog")).unwrap();
        std::fs::write(dir.path().join("COPYING"), "text").unwrap();

        assert_eq!(find_file(dir.path(), LICENSE_FILES).as_deref(), Some("COPYING"));
        assert_eq!(find_file(dir.path(), CHANGELOG_FILES), None);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(find_file(&dir.path().join("nope"), LICENSE_FILES), None);
    }
}
