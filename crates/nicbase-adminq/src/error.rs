//! AQ error types and firmware status handling.
//!
//! Firmware reports the outcome of every admin command as a small
//! integer in the response descriptor. This module converts those raw
//! codes into Rust's Result type.

use std::fmt;
use thiserror::Error;

use crate::opcode::Opcode;

/// Firmware return codes carried in an AQ response descriptor.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqStatus {
    Ok = 0,
    NotPermitted = 1,
    NotFound = 2,
    NoMemory = 9,
    Busy = 12,
    InvalidParam = 14,
    FullQueue = 16,
    NotSupported = 23,
    Timeout = 25,
    /// Any code this driver does not model individually.
    Failure = -1,
}

impl AqStatus {
    /// Creates an AqStatus from the raw descriptor value.
    pub fn from_raw(status: i16) -> Self {
        match status {
            0 => AqStatus::Ok,
            1 => AqStatus::NotPermitted,
            2 => AqStatus::NotFound,
            9 => AqStatus::NoMemory,
            12 => AqStatus::Busy,
            14 => AqStatus::InvalidParam,
            16 => AqStatus::FullQueue,
            23 => AqStatus::NotSupported,
            25 => AqStatus::Timeout,
            _ => AqStatus::Failure,
        }
    }

    /// Returns true if the status indicates success.
    pub fn is_success(&self) -> bool {
        *self == AqStatus::Ok
    }

    /// Converts to a Result for the command that produced this status.
    pub fn into_result(self, opcode: Opcode) -> AqResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(AqError::Firmware {
                opcode,
                status: self,
            })
        }
    }
}

impl fmt::Display for AqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AqStatus::Ok => "AQ_RC_OK",
            AqStatus::NotPermitted => "AQ_RC_EPERM",
            AqStatus::NotFound => "AQ_RC_ENOENT",
            AqStatus::NoMemory => "AQ_RC_ENOMEM",
            AqStatus::Busy => "AQ_RC_EBUSY",
            AqStatus::InvalidParam => "AQ_RC_EINVAL",
            AqStatus::FullQueue => "AQ_RC_EFULL",
            AqStatus::NotSupported => "AQ_RC_ENOSYS",
            AqStatus::Timeout => "AQ_RC_ETIMEDOUT",
            AqStatus::Failure => "AQ_RC_FAILURE",
        };
        write!(f, "{}", s)
    }
}

/// Errors that can occur when building or sending an admin command.
#[derive(Debug, Clone, Error)]
pub enum AqError {
    /// Caller passed an out-of-range or missing value. Detected before
    /// any command is sent.
    #[error("Invalid parameter: {message}")]
    Param {
        /// What was wrong with the parameter.
        message: String,
    },

    /// A scoped command buffer could not be allocated.
    #[error("Command buffer allocation failed")]
    NoMemory,

    /// The command was sent and firmware rejected it.
    #[error("Command {opcode} failed: {status}")]
    Firmware {
        /// The opcode of the failed command.
        opcode: Opcode,
        /// The status firmware returned.
        status: AqStatus,
    },

    /// The send/receive path itself failed below the descriptor layer.
    #[error("AQ transport error: {message}")]
    Transport {
        /// Transport-level failure description.
        message: String,
    },

    /// Firmware answered with fewer response bytes than the command's
    /// reply layout requires.
    #[error("Command {opcode} response too short: expected {expected} bytes, got {got}")]
    TooShort {
        /// The opcode of the command.
        opcode: Opcode,
        /// Bytes the reply layout requires.
        expected: usize,
        /// Bytes actually returned.
        got: usize,
    },
}

impl AqError {
    /// Creates a parameter error with a message.
    pub fn param(message: impl Into<String>) -> Self {
        AqError::Param {
            message: message.into(),
        }
    }

    /// Creates a transport error with a message.
    pub fn transport(message: impl Into<String>) -> Self {
        AqError::Transport {
            message: message.into(),
        }
    }

    /// Returns the firmware status if this error came from a sent
    /// command, `None` if the command was never sent.
    pub fn status(&self) -> Option<AqStatus> {
        match self {
            AqError::Firmware { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for AQ operations.
pub type AqResult<T> = Result<T, AqError>;
