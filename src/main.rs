use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use vnet_export::config::{DEFAULT_BACKUP_DIR, DEFAULT_TOOL_DIR};
use vnet_export::privilege::SystemPrivilege;
use vnet_export::shell::ShellExecutor;
use vnet_export::{ExportConfig, ExportRunner};

#[derive(Parser)]
#[command(
    name = "vnet-export",
    about = "Export VMware Workstation virtual network settings to a timestamped file",
    version,
    long_about = None
)]
struct Cli {
    /// VMware Workstation installation directory (must contain vnetlib64.exe)
    #[arg(long, default_value = DEFAULT_TOOL_DIR)]
    tool_dir: PathBuf,

    /// Directory the export file is written to (created if missing)
    #[arg(long, default_value = DEFAULT_BACKUP_DIR)]
    backup_dir: PathBuf,

    /// Report vnetlib failures in full and exit non-zero
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries the console transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ExportConfig::now(cli.tool_dir, cli.backup_dir).with_strict(cli.strict);
    let runner = ExportRunner::new(config, SystemPrivilege, ShellExecutor);

    let outcome = runner.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    tracing::debug!(?outcome, "run finished");

    Ok(ExitCode::from(outcome.exit_status()))
}
