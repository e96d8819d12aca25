//! Lock acquisition and release entry points.
//!
//! Creating or removing a device lock is not implemented. Both calls fail
//! loudly so callers cannot mistake them for working mutual exclusion.

use crate::error::{Result, TtylockError};

/// Acquire the lock for `device`. Always fails with `NotImplemented`.
pub fn acquire_lock(device: &str) -> Result<()> {
    log::debug!("acquire_lock called for '{}'", device);
    Err(TtylockError::NotImplemented(format!(
        "acquiring the lock for '{}'",
        device
    )))
}

/// Release the lock for `device`. Always fails with `NotImplemented`.
pub fn release_lock(device: &str) -> Result<()> {
    log::debug!("release_lock called for '{}'", device);
    Err(TtylockError::NotImplemented(format!(
        "releasing the lock for '{}'",
        device
    )))
}
