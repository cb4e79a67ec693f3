//! Administrative privilege detection.

/// Answers whether the current process runs with administrative rights.
pub trait PrivilegeOracle {
    fn is_elevated(&self) -> bool;
}

/// Asks the operating system.
///
/// Unix: effective uid is root. Windows: `IsUserAnAdmin`. Anything else
/// is treated as unprivileged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPrivilege;

impl PrivilegeOracle for SystemPrivilege {
    fn is_elevated(&self) -> bool {
        let elevated = platform_is_elevated();
        tracing::debug!(elevated, "privilege check");
        elevated
    }
}

#[cfg(unix)]
fn platform_is_elevated() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(windows)]
fn platform_is_elevated() -> bool {
    use windows::Win32::UI::Shell::IsUserAnAdmin;

    // SAFETY: takes no arguments and only reads the process token.
    unsafe { IsUserAnAdmin() }.as_bool()
}

#[cfg(not(any(unix, windows)))]
fn platform_is_elevated() -> bool {
    false
}

/// Oracle with a predetermined answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrivilege(pub bool);

impl PrivilegeOracle for FixedPrivilege {
    fn is_elevated(&self) -> bool {
        self.0
    }
}

impl<T: PrivilegeOracle + ?Sized> PrivilegeOracle for &T {
    fn is_elevated(&self) -> bool {
        (**self).is_elevated()
    }
}
