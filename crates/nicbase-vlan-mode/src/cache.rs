//! Device-wide VLAN mode cache.
//!
//! The VLAN mode is a property of the physical device, fixed after
//! initialization, but it is read by every logical port sharing the
//! device. Only one function configures the mode; the others must be
//! able to read it without touching firmware. The cache is a
//! write-once cell owned by the device-level context and handed to
//! every port by `Arc`, so the single-writer-before-readers ordering
//! is explicit in the type instead of relying on bring-up call order.

use once_cell::sync::OnceCell;
use tracing::warn;

/// Cached VLAN mode of one physical device.
#[derive(Debug, Default)]
pub struct DeviceVlanMode {
    dvm_ena: OnceCell<bool>,
}

impl DeviceVlanMode {
    /// Creates an unset cache. Reads report single VLAN mode until the
    /// post-download caching step runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the device runs in double VLAN mode.
    ///
    /// Pure cache read; never queries firmware. Before the cache is
    /// populated this is `false`, the hardware default.
    pub fn is_dvm_enabled(&self) -> bool {
        self.dvm_ena.get().copied().unwrap_or(false)
    }

    /// Returns true once the post-download caching step has run.
    pub fn is_cached(&self) -> bool {
        self.dvm_ena.get().is_some()
    }

    /// Stores the resolved mode. Called exactly once per profile
    /// download cycle; a second write is a sequencing bug and is
    /// ignored, keeping the first value.
    pub(crate) fn cache(&self, dvm_ena: bool) {
        if self.dvm_ena.set(dvm_ena).is_err() {
            debug_assert!(false, "VLAN mode cached twice");
            warn!(dvm_ena, "VLAN mode already cached, keeping first value");
        }
    }
}
