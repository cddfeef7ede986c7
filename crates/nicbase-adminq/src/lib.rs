//! Admin command queue (AQ) interface boundary for the nicbase driver.
//!
//! Firmware on the adapter is configured through a blocking
//! request/response command channel. This crate defines the typed
//! boundary in front of that channel so feature code never deals with
//! raw descriptors or raw status integers:
//!
//! - [`error`]: firmware status codes and the AQ error type
//! - [`opcode`]: the opcode newtype and the opcodes this driver sends
//! - [`queue`]: the [`AdminQueue`] transport trait
//!
//! The transport itself (descriptor ring, DMA, timeouts) lives below
//! this crate and is firmware-defined; implementations of
//! [`AdminQueue`] own all of that.

pub mod error;
pub mod opcode;
pub mod queue;

pub use error::{AqError, AqResult, AqStatus};
pub use opcode::Opcode;
pub use queue::AdminQueue;
