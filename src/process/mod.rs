//! Process existence checks for lock owners.
//!
//! A lock file only names a PID; whether that process is still running is a
//! separate question answered by a [`ProcessChecker`]. Platforms that `sysinfo`
//! supports get [`SysinfoChecker`]; everywhere else the answer is
//! [`Liveness::Unknown`].

#[cfg(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "windows",
    target_os = "freebsd"
))]
mod sysinfo_checker;


use crate::config::Config;
use serde::Serialize;

#[cfg(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "windows",
    target_os = "freebsd"
))]
pub use sysinfo_checker::SysinfoChecker;

/// Result of asking whether a PID belongs to a running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Liveness {
    /// A process with this PID is running.
    Alive,
    /// No running process has this PID (or it is a zombie).
    Dead,
    /// This build cannot tell.
    Unknown,
}

/// Capability to check whether a process exists.
pub trait ProcessChecker {
    /// Report the liveness of `pid`.
    ///
    /// PIDs that cannot name a process (zero, negative, or out of range)
    /// are reported as [`Liveness::Dead`] by every real checker.
    fn liveness(&self, pid: i64) -> Liveness;
}

/// Checker used when no platform support is available or checks are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedChecker;

impl ProcessChecker for UnsupportedChecker {
    fn liveness(&self, _pid: i64) -> Liveness {
        Liveness::Unknown
    }
}

/// Narrow a lock file PID to a value the OS could have issued.
pub(crate) fn os_pid(pid: i64) -> Option<u32> {
    u32::try_from(pid).ok().filter(|&p| p != 0)
}

/// Pick the checker for this build target, honoring `check_liveness`.
pub fn default_checker(config: &Config) -> Box<dyn ProcessChecker> {
    if !config.check_liveness {
        log::debug!("liveness checks disabled by config");
        return Box::new(UnsupportedChecker);
    }

    platform_checker()
}

#[cfg(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "windows",
    target_os = "freebsd"
))]
fn platform_checker() -> Box<dyn ProcessChecker> {
    Box::new(SysinfoChecker::new())
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "windows",
    target_os = "freebsd"
)))]
fn platform_checker() -> Box<dyn ProcessChecker> {
    log::warn!("process liveness checks are not supported on this platform");
    Box::new(UnsupportedChecker)
}
