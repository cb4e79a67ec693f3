//! Export runner -- privilege check, confirmation, directory preparation,
//! vnetlib invocation, and the console report around it.
//!
//! The workflow is strictly linear. It stops early when the process is not
//! elevated or the user declines; a failing vnetlib run is tolerated unless
//! the config asks for strict handling.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ExportConfig;
use crate::privilege::PrivilegeOracle;
use crate::prompt;
use crate::shell::{self, CommandExecutor, CommandOutput, ExecError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    #[error("failed to create backup directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Not running as administrator; nothing was attempted.
    NotElevated,
    /// The user declined at the prompt.
    Cancelled,
    /// vnetlib exited cleanly; the file is at the contained path.
    Exported(PathBuf),
    /// vnetlib failed but the run still finished normally.
    ExportFailed(ExecError),
    /// vnetlib failed and strict mode stopped the run.
    Aborted(ExecError),
}

impl RunOutcome {
    /// Process exit status for this outcome.
    pub fn exit_status(&self) -> u8 {
        match self {
            RunOutcome::NotElevated | RunOutcome::Aborted(_) => 1,
            RunOutcome::Cancelled | RunOutcome::Exported(_) | RunOutcome::ExportFailed(_) => 0,
        }
    }
}

pub struct ExportRunner<P, E> {
    config: ExportConfig,
    oracle: P,
    executor: E,
}

impl<P: PrivilegeOracle, E: CommandExecutor> ExportRunner<P, E> {
    pub fn new(config: ExportConfig, oracle: P, executor: E) -> Self {
        Self {
            config,
            oracle,
            executor,
        }
    }

    /// Run the export, reading the confirmation from `input` and writing the
    /// console transcript to `out`.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> Result<RunOutcome, ExportError> {
        let destination = self.config.destination();

        if !self.oracle.is_elevated() {
            writeln!(out, "ERROR: This script must be run as Administrator.")?;
            writeln!(out, "Please restart the script with elevated privileges.")?;
            return Ok(RunOutcome::NotElevated);
        }

        info!(destination = %destination.display(), "Starting network settings export");

        if !prompt::confirm(&mut input, &mut out, &destination)? {
            writeln!(out, "Backup operation cancelled.")?;
            return Ok(RunOutcome::Cancelled);
        }

        self.prepare_backup_dir(&mut out)?;

        let command_line = shell::export_command_line(&self.config.tool_path(), &destination);
        writeln!(out, "Running the following command for export:")?;
        writeln!(out, "{command_line}")?;

        let outcome = match self
            .executor
            .execute(&command_line)
            .and_then(CommandOutput::check)
        {
            Ok(output) => {
                debug!(stdout = %output.stdout.trim(), stderr = %output.stderr.trim(), "vnetlib output");
                info!(destination = %destination.display(), "Export finished");
                writeln!(out, "Backup completed successfully: {}", destination.display())?;
                RunOutcome::Exported(destination)
            }
            Err(err) => {
                log_failure(&err);
                if self.config.strict {
                    report_failure(&mut out, &command_line, &err)?;
                    return Ok(RunOutcome::Aborted(err));
                }
                writeln!(out, "{command_line}")?;
                RunOutcome::ExportFailed(err)
            }
        };

        writeln!(out, "Script execution completed.")?;
        Ok(outcome)
    }

    fn prepare_backup_dir<W: Write>(&self, out: &mut W) -> Result<(), ExportError> {
        let dir = self.config.backup_dir.as_path();
        if dir.exists() {
            return Ok(());
        }

        writeln!(out, "Creating backup directory: {}", dir.display())?;
        std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        info!(dir = %dir.display(), "Created backup directory");
        Ok(())
    }
}

fn log_failure(err: &ExecError) {
    match err {
        ExecError::Failed {
            code,
            stdout,
            stderr,
        } => {
            warn!(?code, "vnetlib export failed");
            debug!(stdout = %stdout.trim(), stderr = %stderr.trim(), "vnetlib output");
        }
        ExecError::Spawn(e) => warn!(error = %e, "could not launch vnetlib"),
    }
}

fn report_failure<W: Write>(out: &mut W, command_line: &str, err: &ExecError) -> io::Result<()> {
    let details = match err {
        ExecError::Failed { stderr, .. } => stderr.trim().to_string(),
        ExecError::Spawn(e) => e.to_string(),
    };
    writeln!(out, "ERROR: Failed to export VMware network settings.")?;
    writeln!(out, "Verify the following command works manually:")?;
    writeln!(out, "{command_line}")?;
    writeln!(out, "Error details:\n{details}")
}
