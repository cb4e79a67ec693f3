//! Export configuration -- tool location, backup directory, timestamped file name.
//!
//! Everything here is resolved once, before the workflow touches the
//! filesystem or spawns anything.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

/// Default VMware Workstation installation directory.
pub const DEFAULT_TOOL_DIR: &str = r"C:\Program Files (x86)\VMware\VMware Workstation";

/// Default directory the export file is written to.
pub const DEFAULT_BACKUP_DIR: &str = r"C:\VMwareBackups\vnet";

/// Network library utility shipped with Workstation.
pub const TOOL_EXE: &str = "vnetlib64.exe";

/// File name prefix; the 17 tracks the Workstation major version.
pub const FILE_PREFIX: &str = "WS17_vnet_";

/// `YYYYMMDDHHMMSS`, no separators.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Resolved paths for a single export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub tool_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub file_name: String,
    /// Report external tool failures and exit non-zero instead of carrying on.
    pub strict: bool,
}

impl ExportConfig {
    /// Build a config for an export stamped with `timestamp`.
    pub fn at(
        tool_dir: impl Into<PathBuf>,
        backup_dir: impl Into<PathBuf>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            tool_dir: tool_dir.into(),
            backup_dir: backup_dir.into(),
            file_name: backup_file_name(timestamp),
            strict: false,
        }
    }

    /// Build a config stamped with the local wall clock.
    pub fn now(tool_dir: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self::at(tool_dir, backup_dir, Local::now().naive_local())
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Full path of the vnetlib executable.
    pub fn tool_path(&self) -> PathBuf {
        self.tool_dir.join(TOOL_EXE)
    }

    /// Full path of the file the tool will write.
    pub fn destination(&self) -> PathBuf {
        self.backup_dir.join(&self.file_name)
    }
}

/// `WS17_vnet_<YYYYMMDDHHMMSS>.dat`
pub fn backup_file_name(timestamp: NaiveDateTime) -> String {
    format!("{}{}.dat", FILE_PREFIX, timestamp.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::Path;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap()
    }

    #[test]
    fn test_file_name_is_zero_padded() {
        assert_eq!(backup_file_name(fixed_time()), "WS17_vnet_20240307090502.dat");
    }

    #[test]
    fn test_file_name_shape() {
        let name = backup_file_name(Local::now().naive_local());
        let digits = name
            .strip_prefix("WS17_vnet_")
            .and_then(|rest| rest.strip_suffix(".dat"))
            .unwrap();
        assert_eq!(digits.len(), 14);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_destination_joins_backup_dir() {
        let cfg = ExportConfig::at("/opt/vmware", "/srv/backups", fixed_time());
        assert_eq!(
            cfg.destination(),
            PathBuf::from("/srv/backups").join("WS17_vnet_20240307090502.dat")
        );
        assert_eq!(cfg.tool_path(), PathBuf::from("/opt/vmware").join("vnetlib64.exe"));
        assert!(!cfg.strict);
    }

    #[test]
    fn test_destination_is_stable() {
        let cfg = ExportConfig::now(DEFAULT_TOOL_DIR, DEFAULT_BACKUP_DIR);
        assert_eq!(cfg.destination(), cfg.destination());
        assert_eq!(cfg.backup_dir, Path::new(DEFAULT_BACKUP_DIR));
    }

    #[test]
    fn test_now_stamps_local_wall_clock() {
        let stamp = |t: NaiveDateTime| t.format(TIMESTAMP_FORMAT).to_string();
        let before = stamp(Local::now().naive_local());
        let cfg = ExportConfig::now(DEFAULT_TOOL_DIR, DEFAULT_BACKUP_DIR);
        let after = stamp(Local::now().naive_local());

        let digits = cfg
            .file_name
            .strip_prefix(FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(".dat"))
            .unwrap();

        // Fixed-width digits, so string order is time order.
        assert!(before.as_str() <= digits, "{digits} is earlier than {before}");
        assert!(digits <= after.as_str(), "{digits} is later than {after}");
    }
}
