//! `sysinfo`-backed process checker.

use super::{Liveness, ProcessChecker, os_pid};
use std::cell::RefCell;
use sysinfo::{Pid, ProcessStatus, ProcessesToUpdate, System};

/// Looks PIDs up in the OS process table.
pub struct SysinfoChecker {
    system: RefCell<System>,
}

impl SysinfoChecker {
    pub fn new() -> Self {
        Self {
            system: RefCell::new(System::new()),
        }
    }
}

impl Default for SysinfoChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessChecker for SysinfoChecker {
    fn liveness(&self, pid: i64) -> Liveness {
        let Some(raw) = os_pid(pid) else {
            return Liveness::Dead;
        };

        let pid = Pid::from_u32(raw);
        let mut system = self.system.borrow_mut();
        // Only refresh the one entry; removing dead processes keeps stale hits out.
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        let alive = system
            .process(pid)
            .map(|p| !matches!(p.status(), ProcessStatus::Zombie | ProcessStatus::Dead))
            .unwrap_or(false);

        log::debug!("pid {} alive: {}", raw, alive);

        if alive {
            Liveness::Alive
        } else {
            Liveness::Dead
        }
    }
}
