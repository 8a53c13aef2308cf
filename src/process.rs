//! Runs external tools and captures their output.
//!
//! Each call drives the child on a current-thread tokio runtime, so a timeout
//! can drop the pending output future and let `kill_on_drop` reap the child.

use std::process::{Command, Output, Stdio};
use std::time::Duration;

use crate::error::{Error, Result};

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<Output> for ToolOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run `command` to completion, capturing stdout and stderr.
///
/// With a `timeout`, the child is killed once it has run that long and
/// [`Error::Timeout`] is returned. Without one, this waits indefinitely.
pub fn run(mut command: Command, timeout: Option<Duration>) -> Result<ToolOutput> {
    let program = command.get_program().to_string_lossy().into_owned();
    tracing::debug!("running {:?}", command);

    command.stdin(Stdio::null());
    let mut command = tokio::process::Command::from(command);
    command.kill_on_drop(true);

    let spawn_error = |source: std::io::Error| Error::Spawn {
        program: program.clone(),
        source,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(spawn_error)?;

    let output = runtime.block_on(async {
        let pending = command.output();
        match timeout {
            None => pending.await.map_err(spawn_error),
            Some(limit) => match tokio::time::timeout(limit, pending).await {
                Ok(result) => result.map_err(spawn_error),
                Err(_) => Err(Error::Timeout {
                    program: program.clone(),
                    timeout_secs: limit.as_secs(),
                }),
            },
        }
    })?;

    Ok(ToolOutput::from(output))
}
