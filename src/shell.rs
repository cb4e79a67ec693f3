//! External tool invocation -- command line construction and shell execution.

use std::io;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch shell: {0}")]
    Spawn(#[source] io::Error),

    #[error("command exited with code {code:?}: {stderr}")]
    Failed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into an error.
    pub fn check(self) -> Result<Self, ExecError> {
        if self.success() {
            Ok(self)
        } else {
            Err(ExecError::Failed {
                code: self.code,
                stdout: self.stdout,
                stderr: self.stderr,
            })
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(out: Output) -> Self {
        Self {
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }
}

/// `"<tool>" -- export <destination>`
///
/// The destination is left unquoted; both paths come from the process
/// itself, never from user input.
pub fn export_command_line(tool: &Path, destination: &Path) -> String {
    format!("\"{}\" -- export {}", tool.display(), destination.display())
}

/// Runs a single shell-interpreted command line to completion.
pub trait CommandExecutor {
    fn execute(&self, command_line: &str) -> Result<CommandOutput, ExecError>;
}

/// Hands the command line to the platform shell and waits for it, with
/// stdout and stderr captured. No timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

#[cfg(windows)]
fn shell(command_line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // With /S, cmd.exe strips exactly one outer pair of quotes and keeps the
    // rest verbatim, so a quoted tool path containing `(x86)` survives.
    let mut cmd = Command::new("cmd");
    cmd.arg("/S").arg("/C").raw_arg(format!("\"{command_line}\""));
    cmd
}

#[cfg(not(windows))]
fn shell(command_line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_line);
    cmd
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command_line: &str) -> Result<CommandOutput, ExecError> {
        let output = shell(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(ExecError::Spawn)?;
        Ok(output.into())
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn execute(&self, command_line: &str) -> Result<CommandOutput, ExecError> {
        (**self).execute(command_line)
    }
}
