//! HDB UUCP device lock files.
//!
//! A serial device `/dev/ttyS0` is locked by a file `/var/lock/LCK..ttyS0`
//! holding the owner's PID as ASCII decimal with a trailing newline.
//!
//! # Reading
//!
//! [`read_lock_owner`] returns the recorded PID, or 0 when there is no lock.
//! Files that do not hold a number are treated as stale and deleted.
//!
//! # Writing
//!
//! [`acquire_lock`] and [`release_lock`] are entry points only; both return
//! `NotImplemented`.

mod naming;
mod reader;
mod status;
mod stub;


// Re-export public API
pub use naming::lock_path;
pub use reader::{NO_OWNER, read_lock_owner};
pub use status::{DeviceState, DeviceStatus, inspect_device};
pub use stub::{acquire_lock, release_lock};
