//! Exit code constants for the ttylock CLI.
//!
//! - 0: Success (or every inspected device is free)
//! - 1: User error (bad args, bad config, unimplemented command)
//! - 2: I/O failure on a lock file
//! - 3: At least one inspected device is locked by a live process

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or unimplemented command.
pub const USER_ERROR: i32 = 1;

/// I/O failure: a lock file could not be read or an invalid one could not be removed.
pub const IO_FAILURE: i32 = 2;

/// A device reported by `status` is held by a running process.
pub const DEVICE_LOCKED: i32 = 3;
