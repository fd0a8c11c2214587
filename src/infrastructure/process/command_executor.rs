use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Command executor errors
#[derive(Debug, Error)]
pub enum CommandExecutorError {
    #[error("'{command}' exited with status {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },

    #[error("'{command}' was terminated by a signal")]
    Terminated { command: String },

    #[error("Process spawn failed for '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for command execution
#[derive(Debug, Clone, Default)]
pub struct ExecutionConfig {
    /// Working directory for command execution
    pub working_directory: Option<PathBuf>,
}

impl ExecutionConfig {
    /// Create a new execution config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set working directory
    pub fn with_working_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }
}

/// Runs external programs attached to the operator's terminal
///
/// stdin, stdout and stderr are inherited, so prompts from `gh` or `git`
/// (credentials, host keys) reach the operator directly. Only the exit status
/// is inspected.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    /// Create a new executor
    pub fn new() -> Self {
        Self
    }

    /// Run `program` with `args` and wait for it to exit
    pub async fn execute(
        &self,
        program: &str,
        args: &[&str],
        config: &ExecutionConfig,
    ) -> Result<(), CommandExecutorError> {
        let start_time = Instant::now();
        let command_line = Self::display_command(program, args);

        let mut cmd = TokioCommand::new(program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(working_dir) = &config.working_directory {
            cmd.current_dir(working_dir);
        }

        tracing::debug!(
            "Running '{}' in {}",
            command_line,
            config
                .working_directory
                .as_deref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| ".".to_string())
        );

        let status = cmd
            .status()
            .await
            .map_err(|source| CommandExecutorError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        let exit_code = match status.code() {
            Some(code) => code,
            None => return Err(CommandExecutorError::Terminated { command: command_line }),
        };

        if exit_code != 0 {
            return Err(CommandExecutorError::CommandFailed {
                command: command_line,
                exit_code,
            });
        }

        tracing::debug!(
            "'{}' finished in {} ms",
            command_line,
            start_time.elapsed().as_millis()
        );
        Ok(())
    }

    /// Render a command line for logs and error messages
    pub fn display_command(program: &str, args: &[&str]) -> String {
        std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
