//! Command implementations for ttylock.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler returns the process exit code on success.

use crate::cli::{Cli, Command, DeviceArgs, OwnerArgs, StatusArgs};
use crate::config::Config;
use crate::error::{Result, TtylockError};
use crate::exit_codes;
use crate::locks::{self, DeviceState, DeviceStatus};
use crate::process::{self, ProcessChecker};

/// Dispatch a command to its implementation.
///
/// `owner` takes an explicit path and needs no configuration; the other
/// commands resolve the config first.
pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Owner(args) => cmd_owner(args),
        Command::Status(args) => {
            let config = Config::resolve(cli.config.as_deref(), cli.lock_dir.as_deref())?;
            let checker = process::default_checker(&config);
            cmd_status(&config, checker.as_ref(), args)
        }
        Command::Lock(args) => cmd_lock(args),
        Command::Unlock(args) => cmd_unlock(args),
    }
}

fn cmd_owner(args: OwnerArgs) -> Result<i32> {
    let pid = locks::read_lock_owner(&args.path)?;
    println!("{}", pid);
    Ok(exit_codes::SUCCESS)
}

fn cmd_status(config: &Config, checker: &dyn ProcessChecker, args: StatusArgs) -> Result<i32> {
    let statuses = collect_statuses(config, checker, &args.devices)?;

    if args.json {
        let out = serde_json::to_string_pretty(&statuses).map_err(|e| {
            TtylockError::UserError(format!("failed to serialize status: {}", e))
        })?;
        println!("{}", out);
    } else {
        for status in &statuses {
            println!("{}", status);
        }
    }

    Ok(status_exit_code(&statuses))
}

fn cmd_lock(args: DeviceArgs) -> Result<i32> {
    locks::acquire_lock(&args.device)?;
    Ok(exit_codes::SUCCESS)
}

fn cmd_unlock(args: DeviceArgs) -> Result<i32> {
    locks::release_lock(&args.device)?;
    Ok(exit_codes::SUCCESS)
}

/// Inspect every device, stopping at the first error.
fn collect_statuses(
    config: &Config,
    checker: &dyn ProcessChecker,
    devices: &[String],
) -> Result<Vec<DeviceStatus>> {
    devices
        .iter()
        .map(|device| locks::inspect_device(config, checker, device))
        .collect()
}

/// `DEVICE_LOCKED` if any device is held by a running process.
fn status_exit_code(statuses: &[DeviceStatus]) -> i32 {
    if statuses.iter().any(|s| s.state() == DeviceState::Locked) {
        exit_codes::DEVICE_LOCKED
    } else {
        exit_codes::SUCCESS
    }
}
