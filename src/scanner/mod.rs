//! Recursive literal-substring search over the extracted archive.
//!
//! - [`grep`]: shells out to `grep -rHnF`, the default backend.
//! - [`builtin`]: walks the tree in-process with [`glob`]; needs no external tool.
//!
//! Both report paths relative to the scanned root.

use std::path::Path;

use crate::config::{ScanBackend, ScanConfig};
use crate::error::Result;
use crate::models::ScanHit;

pub mod builtin;
pub mod grep;

pub trait TextScanner {
    /// Find every line containing `needle` (case-sensitive, not a regex) in
    /// files under `root` whose name matches the glob `include`.
    fn scan(&self, root: &Path, needle: &str, include: &str) -> Result<Vec<ScanHit>>;
}

/// Build the scanner selected in the configuration.
pub fn from_config(config: &ScanConfig) -> Box<dyn TextScanner> {
    match config.backend {
        ScanBackend::Grep => Box::new(grep::GrepScanner::new(config.timeout())),
        ScanBackend::Builtin => Box::new(builtin::BuiltinScanner::new()),
    }
}

/// Render `path` relative to `root`, falling back to the full path.
pub(crate) fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
