//! VLAN tag-handling mode negotiation for the nicbase driver.
//!
//! An adapter runs in one of two VLAN modes, fixed at initialization:
//! Single VLAN Mode (SVM, one tag recognized per frame) or Double VLAN
//! Mode (DVM, outer + inner tag). Whether DVM is available depends on
//! the downloaded device profile and on firmware; programming it also
//! requires updating the default switch filtering recipes, the port
//! parameters, and the boost TCAM entries. This crate owns that whole
//! negotiation:
//!
//! - [`capability`]: decode the profile's DVM-support bit
//! - [`commands`]: the get/set VLAN mode admin command pair
//! - [`recipes`]: the DVM lookup-index updates for the default recipes
//! - [`orch`]: the configuration state machine with SVM fallback
//! - [`cache`]: the device-wide mode cache every logical port reads
//! - [`hw`]: the seam to the port/recipe/TCAM primitives
//!
//! # Configuration flow
//!
//! One physical function downloads the profile and, while holding the
//! global configuration lock, runs [`orch::VlanModeOrch::configure_vlan_mode`].
//! After the lock is released every function (including the one that
//! configured) calls [`orch::VlanModeOrch::post_download_cfg`] once to
//! cache the resolved mode; runtime classification code then only ever
//! reads the cache through [`cache::DeviceVlanMode::is_dvm_enabled`].

pub mod cache;
pub mod capability;
pub mod commands;
pub mod error;
pub mod hw;
pub mod orch;
pub mod recipes;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use cache::DeviceVlanMode;
pub use error::{VlanModeError, VlanModeResult};
pub use hw::VlanModeCallbacks;
pub use orch::VlanModeOrch;
pub use types::{
    GetVlanModeParams, MngVlanProtoId, PrioTaggingMode, RdmaPacketSetting, RecipeLookupIdxUpdate,
    SetVlanModeParams,
};
