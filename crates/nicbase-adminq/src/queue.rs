//! The admin queue transport trait.

use crate::error::AqResult;
use crate::opcode::Opcode;

/// Blocking admin command transport.
///
/// Implementations own the descriptor ring, DMA buffers, and command
/// timeout. `send_command` blocks until firmware answers or the
/// transport gives up; there is no cancellation and callers never
/// retry — a command is attempted exactly once per call site.
///
/// The payload is the command's indirect data buffer, absent for
/// commands that carry everything in the descriptor. The returned
/// bytes are the response buffer, empty for commands that answer in
/// the descriptor alone. A firmware rejection surfaces as
/// [`AqError::Firmware`] with the descriptor status code.
///
/// [`AqError::Firmware`]: crate::error::AqError::Firmware
pub trait AdminQueue: Send + Sync {
    /// Sends one admin command and returns its response payload.
    fn send_command(&self, opcode: Opcode, payload: Option<&[u8]>) -> AqResult<Vec<u8>>;
}

impl<Q: AdminQueue + ?Sized> AdminQueue for &Q {
    fn send_command(&self, opcode: Opcode, payload: Option<&[u8]>) -> AqResult<Vec<u8>> {
        (**self).send_command(opcode, payload)
    }
}

impl<Q: AdminQueue + ?Sized> AdminQueue for std::sync::Arc<Q> {
    fn send_command(&self, opcode: Opcode, payload: Option<&[u8]>) -> AqResult<Vec<u8>> {
        (**self).send_command(opcode, payload)
    }
}
