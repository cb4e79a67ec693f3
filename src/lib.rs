//! vnet-export -- one-shot export of VMware Workstation virtual network settings.
//!
//! The crate drives the `vnetlib64.exe -- export` utility bundled with
//! Workstation: check for administrator rights, confirm with the user,
//! make sure the backup directory exists, then run the tool and report.

pub mod config;
pub mod privilege;
pub mod prompt;
pub mod runner;
pub mod shell;

pub use config::ExportConfig;
pub use runner::{ExportError, ExportRunner, RunOutcome};
