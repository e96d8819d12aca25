//! Configuration model for ttylock.
//!
//! Settings come from an optional YAML file, then the `TTYLOCK_LOCK_DIR`
//! environment variable, then command-line flags. Unknown YAML fields are
//! ignored and missing ones fall back to the FHS defaults.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::LOCK_DIR_ENV;
