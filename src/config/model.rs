//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for lock file lookup.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the device lock files (default: "/var/lock").
    #[serde(default = "default_lock_dir")]
    pub lock_dir: String,

    /// Lock file name prefix placed before the device basename (default: "LCK..").
    #[serde(default = "default_lock_prefix")]
    pub lock_prefix: String,

    /// Whether `status` asks the platform if the owning PID is still running.
    #[serde(default = "default_true")]
    pub check_liveness: bool,
}

impl Config {
    /// The lock directory as a path.
    pub fn lock_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.lock_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_dir: default_lock_dir(),
            lock_prefix: default_lock_prefix(),
            check_liveness: default_true(),
        }
    }
}
