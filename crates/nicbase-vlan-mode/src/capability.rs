//! Profile capability decode: does the downloaded profile support
//! double VLAN mode?
//!
//! The answer lives in one bit of a bit-vector entry in the parser
//! metadata-init section of the profile. Reading it is an ordinary
//! section upload command; the entry comes back as a fixed count of
//! 32-bit little-endian words.

use byteorder::{ByteOrder, LittleEndian};
use nicbase_adminq::{AdminQueue, AqError, AqResult, Opcode};

use crate::types::{
    encode_meta_init_request, META_INIT_DW_CNT, META_VLAN_MODE_BIT,
};

/// Tests one bit of a bit-vector stored as 32-bit words, LSB first.
pub(crate) fn is_bit_set(words: &[u32], bit: usize) -> bool {
    let word = bit / 32;
    word < words.len() && words[word] & (1 << (bit % 32)) != 0
}

/// Reads the profile's DVM-support bit.
///
/// An `Err` means the section could not be read; callers must treat
/// that as "assume unsupported", never as fatal. `Ok(true)` is only
/// possible after a fully successful decode.
pub fn pkg_supports_dvm<Q: AdminQueue>(aq: &Q) -> AqResult<bool> {
    let req = encode_meta_init_request();
    let resp = aq.send_command(Opcode::UPLOAD_SECTION, Some(&req))?;

    let expected = META_INIT_DW_CNT * 4;
    if resp.len() < expected {
        return Err(AqError::TooShort {
            opcode: Opcode::UPLOAD_SECTION,
            expected,
            got: resp.len(),
        });
    }

    let mut entry = [0u32; META_INIT_DW_CNT];
    LittleEndian::read_u32_into(&resp[..expected], &mut entry);

    Ok(is_bit_set(&entry, META_VLAN_MODE_BIT))
}
