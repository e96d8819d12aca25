//! Configuration constants and defaults for ttylock.

/// Environment variable that overrides the configured lock directory.
pub const LOCK_DIR_ENV: &str = "TTYLOCK_LOCK_DIR";

// Default value functions for serde
pub(crate) fn default_lock_dir() -> String {
    "/var/lock".to_string()
}
pub(crate) fn default_lock_prefix() -> String {
    "LCK..".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
