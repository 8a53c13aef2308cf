use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for collaborator and analyzer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the external collaborators (tar, the registry client,
/// the text scanner) and by the requirements parser.
///
/// Every variant carries a [`Severity`]; analyzers downgrade
/// [`Severity::Degraded`] failures to "no evidence" and propagate the rest.
#[derive(Debug, Error)]
pub enum Error {
    /// A `requirements.txt` entry the parser could not make sense of.
    #[error("invalid requirement on line {line}: `{text}` ({reason})")]
    InvalidRequirement {
        line: usize,
        text: String,
        reason: String,
    },

    /// The collection archive could not be unpacked.
    #[error("failed to extract {path}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    /// An external program could not be started at all.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// An external program exited with a status its adapter does not accept.
    #[error("`{program}` exited with status {}", display_code(.code))]
    ToolStatus { program: String, code: Option<i32> },

    /// An external program did not finish within the configured bound.
    #[error("`{program}` did not finish within {timeout_secs}s")]
    Timeout { program: String, timeout_secs: u64 },

    /// A regular expression or glob failed to compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    Pattern { pattern: String, reason: String },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "signal".to_string(),
    }
}

/// Whether an [`Error`] is allowed to abort the inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Terminates the run with a non-zero exit status.
    Fatal,
    /// Reported as missing evidence; the run continues.
    Degraded,
}

impl Error {
    pub fn severity(&self) -> Severity {
        match self {
            Error::InvalidRequirement { .. } | Error::Extraction { .. } => Severity::Fatal,
            Error::Spawn { .. }
            | Error::ToolStatus { .. }
            | Error::Timeout { .. }
            | Error::Pattern { .. } => Severity::Degraded,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}
