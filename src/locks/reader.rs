//! Reading the owner PID out of an HDB UUCP lock file.

use crate::error::{Result, TtylockError};
use std::fs;
use std::io::{self, ErrorKind};
use std::num::IntErrorKind;
use std::path::Path;

/// PID value meaning "no process holds the lock".
pub const NO_OWNER: i64 = 0;

/// Read the PID of the process holding the lock at `path`.
///
/// Lock files hold the owner's PID as ASCII decimal, conventionally padded to
/// ten bytes and newline-terminated. Surrounding whitespace is ignored.
/// Integers beyond the `i64` range saturate to `i64::MAX` / `i64::MIN` and the
/// file is kept. Content that is not valid UTF-8 counts as invalid and is deleted.
///
/// # Returns
///
/// * `Ok(0)` - No lock file (or the path is not a regular file)
/// * `Ok(0)` - The file did not hold a number; it was deleted as stale
/// * `Ok(pid)` - The recorded owner. Whether it is still running is not checked.
/// * `Err(TtylockError::Io)` - The file exists but could not be read
/// * `Err(TtylockError::StaleLockRemoval)` - An invalid file could not be deleted
pub fn read_lock_owner(path: &Path) -> Result<i64> {
    read_lock_owner_with(path, |p| fs::remove_file(p))
}

/// [`read_lock_owner`] with the file removal step supplied by the caller.
pub(crate) fn read_lock_owner_with<F>(path: &Path, remove: F) -> Result<i64>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    if !path.is_file() {
        return Ok(NO_OWNER);
    }

    let content = match fs::read(path) {
        Ok(bytes) => bytes,
        // Removed by its owner between the check and the read.
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(NO_OWNER),
        Err(source) => {
            return Err(TtylockError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if let Some(pid) = parse_pid(&content) {
        return Ok(pid);
    }

    log::info!("lock file '{}' is invalid, removing it", path.display());
    match remove(path) {
        Ok(()) => Ok(NO_OWNER),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(NO_OWNER),
        Err(source) => Err(TtylockError::StaleLockRemoval {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse lock file content as a decimal integer, saturating on overflow.
fn parse_pid(content: &[u8]) -> Option<i64> {
    let text = std::str::from_utf8(content).ok()?.trim();
    match text.parse::<i64>() {
        Ok(pid) => Some(pid),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
