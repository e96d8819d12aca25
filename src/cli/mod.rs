//! CLI argument parsing for ttylock.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Ttylock: inspect HDB UUCP-style serial device lock files.
///
/// A device such as /dev/ttyS0 is considered locked while
/// /var/lock/LCK..ttyS0 names a running process.
#[derive(Parser, Debug)]
#[command(name = "ttylock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML config file (lock_dir, lock_prefix, check_liveness).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding lock files (overrides config and TTYLOCK_LOCK_DIR).
    #[arg(long, global = true)]
    pub lock_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ttylock.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the PID recorded in a lock file.
    ///
    /// Prints 0 when the file does not exist. A file that does not hold
    /// a number is removed as stale and 0 is printed.
    Owner(OwnerArgs),

    /// Report whether devices are free, locked, or held by a dead process.
    ///
    /// Exits with code 3 when any device is locked by a running process.
    Status(StatusArgs),

    /// Acquire the lock for a device (not implemented).
    Lock(DeviceArgs),

    /// Release the lock for a device (not implemented).
    Unlock(DeviceArgs),
}

/// Arguments for the `owner` command.
#[derive(Parser, Debug)]
pub struct OwnerArgs {
    /// Path to the lock file (e.g., /var/lock/LCK..ttyS0).
    pub path: PathBuf,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Devices to inspect (e.g., /dev/ttyS0 or ttyUSB0).
    #[arg(required = true)]
    pub devices: Vec<String>,

    /// Print a JSON array instead of one line per device.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `lock` and `unlock`.
#[derive(Parser, Debug)]
pub struct DeviceArgs {
    /// Device to lock or unlock (e.g., /dev/ttyS0).
    pub device: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
