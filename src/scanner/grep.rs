use std::path::Path;
use std::process::Command;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::ScanHit;
use crate::process;

/// Scanner backed by `grep -rHnF`.
///
/// grep exits 1 when nothing matched; that is reported as an empty result.
/// Any other non-zero status is a [`Error::ToolStatus`].
pub struct GrepScanner {
    timeout: Option<Duration>,
}

impl GrepScanner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl super::TextScanner for GrepScanner {
    fn scan(&self, root: &Path, needle: &str, include: &str) -> Result<Vec<ScanHit>> {
        let mut command = Command::new("grep");
        command
            .current_dir(root)
            .arg("-rHnF")
            .arg("--null")
            .arg(format!("--include={}", include))
            .arg("--")
            .arg(needle)
            .arg(".");

        let output = process::run(command, self.timeout)?;
        match output.code {
            Some(0) => Ok(parse_output(&output.stdout)),
            Some(1) => Ok(Vec::new()),
            code => {
                tracing::debug!("grep stderr: {}", output.stderr.trim());
                Err(Error::ToolStatus {
                    program: "grep".to_string(),
                    code,
                })
            }
        }
    }
}

/// Parse `path\0line:content` records as printed by `grep -Hn --null`.
fn parse_output(stdout: &str) -> Vec<ScanHit> {
    stdout
        .lines()
        .filter_map(|record| {
            let (path, rest) = record.split_once('\0')?;
            let (line, content) = rest.split_once(':')?;
            Some(ScanHit {
                path: path.strip_prefix("./").unwrap_or(path).to_string(),
                line: line.parse().ok()?,
                content: content.trim_end_matches('\r').to_string(),
            })
        })
        .collect()
}
