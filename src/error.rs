//! Error types for ttylock.
//!
//! A missing lock file and a corrupt lock file are not errors; both normalize
//! to "no owner". Only genuine resource failures and user mistakes surface here.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ttylock operations.
#[derive(Error, Debug)]
pub enum TtylockError {
    /// Operation exists as an entry point but has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(String),

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Reading a lock file failed for a reason other than it being absent.
    #[error("failed to read lock file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An invalid lock file was found but could not be deleted.
    #[error("failed to remove invalid lock file '{}': {source}", .path.display())]
    StaleLockRemoval {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TtylockError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TtylockError::NotImplemented(_) => exit_codes::USER_ERROR,
            TtylockError::UserError(_) => exit_codes::USER_ERROR,
            TtylockError::Io { .. } => exit_codes::IO_FAILURE,
            TtylockError::StaleLockRemoval { .. } => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for ttylock operations.
pub type Result<T> = std::result::Result<T, TtylockError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_implemented_error_has_correct_exit_code() {
        let err = TtylockError::NotImplemented("acquire_lock".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = TtylockError::UserError("bad device".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_errors_have_io_exit_code() {
        let err = TtylockError::Io {
            path: PathBuf::from("/var/lock/LCK..ttyS0"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);

        let err = TtylockError::StaleLockRemoval {
            path: PathBuf::from("/var/lock/LCK..ttyS0"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = TtylockError::NotImplemented("ttylock lock".to_string());
        assert_eq!(err.to_string(), "ttylock lock is not implemented");

        let err = TtylockError::StaleLockRemoval {
            path: PathBuf::from("/var/lock/LCK..ttyUSB0"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to remove invalid lock file '/var/lock/LCK..ttyUSB0': denied"
        );
    }
}
