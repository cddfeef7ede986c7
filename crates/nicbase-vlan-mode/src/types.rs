//! Wire types and policy tables for VLAN mode configuration.
//!
//! The set/get command buffers use fixed byte offsets defined by the
//! firmware command layout; everything here encodes to and decodes
//! from those layouts explicitly so no struct padding leaks onto the
//! wire.

use byteorder::{ByteOrder, LittleEndian};
use nicbase_adminq::{AqError, AqResult, Opcode};

// ============================================================================
// Profile metadata-init section
// ============================================================================

/// Section id of the parser metadata-init section in the profile.
pub const META_INIT_SECTION_ID: u16 = 0x003A;
/// Entry offset of the VLAN mode bit-vector within the section.
pub const META_VLAN_MODE_ENTRY: u16 = 0;
/// Number of 32-bit little-endian words in one metadata-init entry.
pub const META_INIT_DW_CNT: usize = 6;
/// Bit width of one metadata-init entry.
pub const META_INIT_BITS: usize = META_INIT_DW_CNT * 32;
/// Bit that declares double VLAN mode support in the entry.
pub const META_VLAN_MODE_BIT: usize = 177;

// ============================================================================
// Set/Get VLAN Mode Parameters
// ============================================================================

/// Where the priority tag is expected, `l2tag_prio_tagging` values.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrioTaggingMode {
    NotSupported = 0x0,
    Stag = 0x1,
    OuterCtag = 0x2,
    OuterVlan = 0x3,
    InnerCtag = 0x4,
}

impl PrioTaggingMode {
    /// Highest raw value firmware accepts for the field.
    pub const MAX: u8 = PrioTaggingMode::InnerCtag as u8;

    /// Returns the raw wire value.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// RDMA packet flag settings. Firmware defines exactly two.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdmaPacketSetting {
    /// Flag layout for single VLAN mode.
    Svm = 0x10,
    /// Flag layout for double VLAN mode.
    Dvm = 0x1A,
}

impl RdmaPacketSetting {
    /// Returns the raw wire value.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Which tag carries the management VLAN protocol id.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MngVlanProtoId {
    Inner = 0x1,
    Outer = 0x2,
}

impl MngVlanProtoId {
    /// Returns the raw wire value.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Request buffer for Set VLAN Mode Parameters.
///
/// The fields are raw wire values: the command layout is
/// firmware-defined and validation happens in [`validate`] right
/// before the command is built, never after it was sent.
///
/// [`validate`]: SetVlanModeParams::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetVlanModeParams {
    /// Priority-tag placement, one of [`PrioTaggingMode`].
    pub l2tag_prio_tagging: u8,
    /// RDMA packet flag setting, one of [`RdmaPacketSetting`].
    pub rdma_packet: u8,
    /// Management VLAN protocol-id placement, one of [`MngVlanProtoId`].
    pub mng_vlan_proto_id: u8,
}

impl SetVlanModeParams {
    /// Length of the command buffer.
    pub const WIRE_LEN: usize = 38;

    const PRIO_TAGGING_OFFSET: usize = 1;
    const RDMA_PACKET_OFFSET: usize = 4;
    const MNG_PROTO_ID_OFFSET: usize = 7;

    /// The fixed policy values used when enabling double VLAN mode.
    pub fn dvm() -> Self {
        Self {
            l2tag_prio_tagging: PrioTaggingMode::OuterCtag.as_raw(),
            rdma_packet: RdmaPacketSetting::Dvm.as_raw(),
            mng_vlan_proto_id: MngVlanProtoId::Outer.as_raw(),
        }
    }

    /// The fixed policy values used when falling back to single VLAN
    /// mode.
    pub fn svm() -> Self {
        Self {
            l2tag_prio_tagging: PrioTaggingMode::InnerCtag.as_raw(),
            rdma_packet: RdmaPacketSetting::Svm.as_raw(),
            mng_vlan_proto_id: MngVlanProtoId::Inner.as_raw(),
        }
    }

    /// Validates every field against its closed value set.
    ///
    /// Checks run in field order and stop at the first violation.
    pub fn validate(&self) -> AqResult<()> {
        if self.l2tag_prio_tagging > PrioTaggingMode::MAX {
            return Err(AqError::param(format!(
                "l2tag_prio_tagging 0x{:02X} exceeds max 0x{:02X}",
                self.l2tag_prio_tagging,
                PrioTaggingMode::MAX
            )));
        }

        if self.rdma_packet != RdmaPacketSetting::Svm.as_raw()
            && self.rdma_packet != RdmaPacketSetting::Dvm.as_raw()
        {
            return Err(AqError::param(format!(
                "rdma_packet 0x{:02X} is not a defined setting",
                self.rdma_packet
            )));
        }

        if self.mng_vlan_proto_id != MngVlanProtoId::Outer.as_raw()
            && self.mng_vlan_proto_id != MngVlanProtoId::Inner.as_raw()
        {
            return Err(AqError::param(format!(
                "mng_vlan_proto_id 0x{:02X} is not a defined placement",
                self.mng_vlan_proto_id
            )));
        }

        Ok(())
    }

    /// Encodes the command buffer. Reserved bytes stay zero.
    pub fn encode(&self) -> [u8; Self::WIRE_LEN] {
        let mut buf = [0u8; Self::WIRE_LEN];
        buf[Self::PRIO_TAGGING_OFFSET] = self.l2tag_prio_tagging;
        buf[Self::RDMA_PACKET_OFFSET] = self.rdma_packet;
        buf[Self::MNG_PROTO_ID_OFFSET] = self.mng_vlan_proto_id;
        buf
    }

    /// Reads the fields back out of a command buffer.
    pub fn decode(buf: &[u8]) -> AqResult<Self> {
        if buf.len() < Self::WIRE_LEN {
            return Err(AqError::TooShort {
                opcode: Opcode::SET_VLAN_MODE,
                expected: Self::WIRE_LEN,
                got: buf.len(),
            });
        }
        Ok(Self {
            l2tag_prio_tagging: buf[Self::PRIO_TAGGING_OFFSET],
            rdma_packet: buf[Self::RDMA_PACKET_OFFSET],
            mng_vlan_proto_id: buf[Self::MNG_PROTO_ID_OFFSET],
        })
    }
}

/// Response buffer of Get VLAN Mode Parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetVlanModeParams {
    /// Mode flags; see [`GetVlanModeParams::DVM_ENA`].
    pub vlan_mode: u8,
    /// Priority-tag placement currently configured.
    pub l2tag_prio_tagging: u8,
}

impl GetVlanModeParams {
    /// Length of the response buffer.
    pub const WIRE_LEN: usize = 16;

    /// `vlan_mode` flag bit: double VLAN mode is enabled.
    pub const DVM_ENA: u8 = 1 << 2;

    /// Decodes a response buffer, rejecting short replies.
    pub fn decode(buf: &[u8]) -> AqResult<Self> {
        if buf.len() < Self::WIRE_LEN {
            return Err(AqError::TooShort {
                opcode: Opcode::GET_VLAN_MODE,
                expected: Self::WIRE_LEN,
                got: buf.len(),
            });
        }
        Ok(Self {
            vlan_mode: buf[0],
            l2tag_prio_tagging: buf[1],
        })
    }

    /// Encodes a response buffer (mode reporting side).
    pub fn encode(&self) -> [u8; Self::WIRE_LEN] {
        let mut buf = [0u8; Self::WIRE_LEN];
        buf[0] = self.vlan_mode;
        buf[1] = self.l2tag_prio_tagging;
        buf
    }

    /// Returns true if firmware reports double VLAN mode enabled.
    pub fn dvm_enabled(&self) -> bool {
        self.vlan_mode & Self::DVM_ENA != 0
    }
}

/// Builds the single-entry upload request for the metadata-init
/// section: section id, entry count (always 1), entry offset, all
/// little-endian 16-bit.
pub(crate) fn encode_meta_init_request() -> [u8; 6] {
    let mut req = [0u8; 6];
    LittleEndian::write_u16(&mut req[0..2], META_INIT_SECTION_ID);
    LittleEndian::write_u16(&mut req[2..4], 1);
    LittleEndian::write_u16(&mut req[4..6], META_VLAN_MODE_ENTRY);
    req
}

// ============================================================================
// Recipe lookup-index updates
// ============================================================================

/// Default switch recipe ids touched by the DVM update table.
pub const RECIPE_SW_LKUP_VLAN: u8 = 3;
pub const RECIPE_SW_LKUP_PROMISC_VLAN: u8 = 7;

/// Field-vector index of the outer/single VLAN id.
pub const EXTERNAL_VLAN_ID_FV_IDX: u8 = 11;
/// Field-vector index of packet flags 0..15.
pub const PKT_FLAGS_0_TO_15_FV_IDX: u8 = 1;
/// Mask selecting the VLAN flags within packet flags 0..15.
pub const PKT_FLAGS_0_TO_15_VLAN_FLAGS_MASK: u16 = 0xD000;

const SW_LKUP_VLAN_LOC_LKUP_IDX: u8 = 1;
const SW_LKUP_VLAN_PKT_FLAGS_LKUP_IDX: u8 = 2;
const SW_LKUP_PROMISC_VLAN_LOC_LKUP_IDX: u8 = 2;

/// One lookup-index adjustment to an existing switch recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeLookupIdxUpdate {
    /// Target recipe.
    pub recipe_id: u8,
    /// Field-vector index to bind into the lookup slot.
    pub fv_idx: u8,
    /// Which lookup slot of the recipe to update.
    pub lkup_idx: u8,
    /// Mask override for the slot; `None` keeps the pre-existing mask.
    pub mask: Option<u16>,
    /// Skip the check that the slot is currently occupied.
    pub ignore_valid: bool,
}

/// Lookup-index updates that make the default recipes VLAN-ethertype-
/// and tag-position-aware under double VLAN mode.
///
/// Applied in order; the packet-flags entry assumes the VLAN location
/// entry for the same recipe has already been applied.
pub const DVM_DFLT_RECIPE_UPDATES: [RecipeLookupIdxUpdate; 3] = [
    // Filter the VLAN recipe on the outer/single VLAN id.
    RecipeLookupIdxUpdate {
        recipe_id: RECIPE_SW_LKUP_VLAN,
        fv_idx: EXTERNAL_VLAN_ID_FV_IDX,
        lkup_idx: SW_LKUP_VLAN_LOC_LKUP_IDX,
        mask: None,
        ignore_valid: true,
    },
    // Match the VLAN packet flags so filtering covers both VLAN
    // ethertypes (0x8100 and 0x88a8).
    RecipeLookupIdxUpdate {
        recipe_id: RECIPE_SW_LKUP_VLAN,
        fv_idx: PKT_FLAGS_0_TO_15_FV_IDX,
        lkup_idx: SW_LKUP_VLAN_PKT_FLAGS_LKUP_IDX,
        mask: Some(PKT_FLAGS_0_TO_15_VLAN_FLAGS_MASK),
        ignore_valid: false,
    },
    // Filter the promiscuous VLAN recipe on the outer/single VLAN id.
    RecipeLookupIdxUpdate {
        recipe_id: RECIPE_SW_LKUP_PROMISC_VLAN,
        fv_idx: EXTERNAL_VLAN_ID_FV_IDX,
        lkup_idx: SW_LKUP_PROMISC_VLAN_LOC_LKUP_IDX,
        mask: None,
        ignore_valid: true,
    },
];
