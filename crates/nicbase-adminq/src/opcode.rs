//! Admin command opcodes.

use std::fmt;

/// A 16-bit admin command opcode.
///
/// Opcode values are firmware-defined. Only the opcodes this driver
/// actually sends are named here; the newtype keeps them from mixing
/// with other u16 wire fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode(u16);

impl Opcode {
    /// Set VLAN Mode Parameters (0x020C).
    pub const SET_VLAN_MODE: Self = Opcode(0x020C);
    /// Get VLAN Mode Parameters (0x020D).
    pub const GET_VLAN_MODE: Self = Opcode(0x020D);
    /// Upload a single profile package section (0x0C41).
    pub const UPLOAD_SECTION: Self = Opcode(0x0C41);

    /// Creates an opcode from a raw value.
    pub const fn from_raw(raw: u16) -> Self {
        Opcode(raw)
    }

    /// Returns the raw opcode value.
    pub const fn as_raw(&self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opcode(0x{:04X})", self.0)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}
