//! Lock file naming per FHS 3.0 section 5.9: `LCK..` followed by the
//! device's base name, inside the lock directory.

use crate::config::Config;
use crate::error::{Result, TtylockError};
use std::path::{Path, PathBuf};

/// Resolve the lock file path for `device`.
///
/// `device` may be a full device path (`/dev/ttyS0`) or a bare name (`ttyS0`).
pub fn lock_path(config: &Config, device: &str) -> Result<PathBuf> {
    let basename = device_basename(device)?;
    let path = config
        .lock_dir_path()
        .join(format!("{}{}", config.lock_prefix, basename));

    log::debug!("device '{}' -> lock file '{}'", device, path.display());
    Ok(path)
}

fn device_basename(device: &str) -> Result<&str> {
    Path::new(device)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            TtylockError::UserError(format!(
                "invalid device '{}': expected a device path like /dev/ttyS0",
                device
            ))
        })
}
