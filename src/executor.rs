//! Async process executor for shelling out to the container runtime.
//!
//! The runtime itself is treated as a commandable back-end (pull, run,
//! inspect, list, remove, exec, stop, prune) reached through its CLI binary,
//! not as a client of its daemon socket. This module provides the low-level
//! plumbing every [`crate::runtime::RuntimeClient`] verb is built on.

use std::collections::HashMap;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use crate::errors::Error;

/// Configuration for a single command execution.
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Command timeout (`None` for no timeout).
    pub timeout: Option<Duration>,
    /// Environment variables to set on the child process.
    pub environment: HashMap<String, String>,
    /// Input data to send to stdin.
    pub stdin_data: Option<Vec<u8>>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            environment: HashMap::new(),
            stdin_data: None,
        }
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code of the process (-1 if it was killed by a signal).
    pub exit_code: i32,
    /// Captured stdout.
    pub stdout: String,
    /// Captured stderr.
    pub stderr: String,
    /// Whether the command exited with code 0.
    pub success: bool,
}

impl CommandOutput {
    /// Build a new command output, deriving `success` from the exit code.
    pub fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: exit_code == 0,
        }
    }
}

/// Async executor for one runtime binary (`docker`, `podman`, ...).
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    /// Path to the runtime binary.
    pub binary_path: std::path::PathBuf,
    default_config: ExecutionConfig,
}

impl ProcessExecutor {
    /// Create a new executor targeting the given binary.
    pub fn new(binary_path: std::path::PathBuf) -> Self {
        Self {
            binary_path,
            default_config: ExecutionConfig::default(),
        }
    }

    /// Override the default per-command timeout.
    #[must_use]
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_config.timeout = Some(timeout);
        self
    }

    /// Run the binary with `args` and collect its output.
    ///
    /// Returns `Ok` even for a non-zero exit; callers inspect
    /// [`CommandOutput::success`] themselves because the meaning of a
    /// failing exit code differs across call sites (e.g. "not found" probes
    /// intentionally expect failure).
    pub async fn execute(
        &self,
        args: &[String],
        config: Option<ExecutionConfig>,
    ) -> Result<CommandOutput, Error> {
        let config = config.unwrap_or_else(|| self.default_config.clone());
        let command_str = format!("{} {}", self.binary_path.display(), args.join(" "));

        debug!("executing: {}", command_str);

        let mut command = Command::new(&self.binary_path);
        command.args(args);
        command.stdin(if config.stdin_data.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        for (key, value) in &config.environment {
            command.env(key, value);
        }

        let mut child = command
            .spawn()
            .map_err(|e| Error::io(format!("spawn `{command_str}`"), e))?;

        if let Some(stdin_data) = config.stdin_data {
            if let Some(mut stdin) = child.stdin.take() {
                tokio::spawn(async move {
                    if let Err(e) = stdin.write_all(&stdin_data).await {
                        warn!("failed to write to stdin: {}", e);
                    }
                    if let Err(e) = stdin.shutdown().await {
                        warn!("failed to close stdin: {}", e);
                    }
                });
            }
        }

        let output = if let Some(timeout_duration) = config.timeout {
            match timeout(timeout_duration, Self::wait_for_output(child)).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(Error::CommandFailed(format!(
                        "{command_str} timed out after {timeout_duration:?}"
                    )));
                }
            }
        } else {
            Self::wait_for_output(child).await?
        };

        trace!("command finished with exit code {}", output.exit_code);
        Ok(output)
    }

    async fn wait_for_output(mut child: Child) -> Result<CommandOutput, Error> {
        let stdout_handle = child.stdout.take().map(|stdout| {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stdout).lines();
                let mut out = String::new();
                while let Ok(Some(line)) = lines.next_line().await {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(&line);
                }
                out
            })
        });

        let stderr_handle = child.stderr.take().map(|stderr| {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                let mut out = String::new();
                while let Ok(Some(line)) = lines.next_line().await {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(&line);
                }
                out
            })
        });

        let status = child
            .wait()
            .await
            .map_err(|e| Error::io("wait for child process", e))?;

        let stdout = match stdout_handle {
            Some(h) => h
                .await
                .map_err(|e| Error::CommandFailed(format!("stdout collector panicked: {e}")))?,
            None => String::new(),
        };
        let stderr = match stderr_handle {
            Some(h) => h
                .await
                .map_err(|e| Error::CommandFailed(format!("stderr collector panicked: {e}")))?,
            None => String::new(),
        };

        Ok(CommandOutput::new(
            status.code().unwrap_or(-1),
            stdout,
            stderr,
        ))
    }
}

/// Locate the container runtime binary in `PATH`.
pub fn find_runtime_binary(name: &str) -> Result<std::path::PathBuf, Error> {
    which::which(name).map_err(|_| Error::CommandFailed(format!("{name} not found in PATH")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_output_success_follows_exit_code() {
        let ok = CommandOutput::new(0, "out".into(), String::new());
        assert!(ok.success);
        let err = CommandOutput::new(1, String::new(), "boom".into());
        assert!(!err.success);
    }

    #[tokio::test]
    async fn execute_runs_a_real_binary() {
        let executor = ProcessExecutor::new("echo".into());
        let output = executor
            .execute(&["hello".to_string()], None)
            .await
            .expect("echo should run");
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "hello");
    }
}
