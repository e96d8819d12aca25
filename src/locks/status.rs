//! Device in-use inspection built on top of the lock file reader.

use super::naming::lock_path;
use super::reader::{NO_OWNER, read_lock_owner};
use crate::config::Config;
use crate::error::Result;
use crate::process::{Liveness, ProcessChecker};
use serde::Serialize;
use std::path::PathBuf;

/// Whether a device is usable, derived from its lock owner and liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceState {
    /// No lock file, or it was invalid and has been removed.
    Free,
    /// Held by a running process.
    Locked,
    /// The lock file names a process that is not running.
    Stale,
    /// The lock file names a process whose state could not be checked.
    Unverified,
}

impl DeviceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceState::Free => "free",
            DeviceState::Locked => "locked",
            DeviceState::Stale => "stale",
            DeviceState::Unverified => "unverified",
        }
    }
}

/// Lock state of a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    /// The device as given by the caller.
    pub device: String,

    /// The lock file that was inspected.
    pub lock_path: PathBuf,

    /// The recorded owner PID, 0 if none.
    pub pid: i64,

    /// Liveness of `pid`; `None` when there is no owner.
    pub liveness: Option<Liveness>,

    /// Derived from `liveness`.
    state: DeviceState,
}

impl DeviceStatus {
    pub fn new(device: &str, lock_path: PathBuf, pid: i64, liveness: Option<Liveness>) -> Self {
        let state = match liveness {
            None => DeviceState::Free,
            Some(Liveness::Alive) => DeviceState::Locked,
            Some(Liveness::Dead) => DeviceState::Stale,
            Some(Liveness::Unknown) => DeviceState::Unverified,
        };

        Self {
            device: device.to_string(),
            lock_path,
            pid,
            liveness,
            state,
        }
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state() {
            DeviceState::Free => write!(f, "{}: free", self.device),
            state => write!(
                f,
                "{}: {} (pid {}, {})",
                self.device,
                state.as_str(),
                self.pid,
                self.lock_path.display()
            ),
        }
    }
}

/// Inspect the lock for `device`.
///
/// Invalid lock files are removed by the reader. A lock owned by a dead
/// process is reported as stale but left in place.
pub fn inspect_device(
    config: &Config,
    checker: &dyn ProcessChecker,
    device: &str,
) -> Result<DeviceStatus> {
    let lock_path = lock_path(config, device)?;
    let pid = read_lock_owner(&lock_path)?;

    let liveness = if pid == NO_OWNER {
        None
    } else {
        let liveness = checker.liveness(pid);
        if liveness == Liveness::Unknown {
            log::warn!("cannot verify whether pid {} holding '{}' is running", pid, device);
        }
        Some(liveness)
    };

    Ok(DeviceStatus::new(device, lock_path, pid, liveness))
}
