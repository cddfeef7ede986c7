//! VLAN mode configuration orchestration.
//!
//! One attempt per initialization cycle: if the profile and firmware
//! support double VLAN mode, try to program it end to end; if any step
//! of that fails, fall back to an independent single VLAN mode
//! sequence. There is no retry loop and no rollback — the mode set is
//! a full overwrite, so the fallback is safe after a partial DVM
//! attempt.

use std::sync::Arc;

use nicbase_adminq::{AdminQueue, AqResult};
use tracing::{debug, info, warn};

use crate::cache::DeviceVlanMode;
use crate::capability::pkg_supports_dvm;
use crate::commands::{get_vlan_mode, query_dvm_enabled, set_vlan_mode};
use crate::error::{VlanModeError, VlanModeResult};
use crate::hw::VlanModeCallbacks;
use crate::recipes::update_dflt_recipes;
use crate::types::SetVlanModeParams;

/// Orchestrates VLAN mode negotiation for one function of a device.
pub struct VlanModeOrch<Q: AdminQueue, C: VlanModeCallbacks> {
    aq: Arc<Q>,
    hw: Arc<C>,
    mode: Arc<DeviceVlanMode>,
    query_only: bool,
}

impl<Q: AdminQueue, C: VlanModeCallbacks> VlanModeOrch<Q, C> {
    /// Creates an orchestrator for a function that may configure the
    /// mode. The `mode` cache is the device-wide cell shared by every
    /// logical port of the physical device.
    pub fn new(aq: Arc<Q>, hw: Arc<C>, mode: Arc<DeviceVlanMode>) -> Self {
        Self {
            aq,
            hw,
            mode,
            query_only: false,
        }
    }

    /// Marks this function as capability-limited: it may only read the
    /// mode, never configure it. `configure_vlan_mode` becomes a
    /// successful no-op.
    pub fn with_query_only(mut self) -> Self {
        self.query_only = true;
        self
    }

    /// Returns the device-wide mode cache this orchestrator writes.
    pub fn mode(&self) -> &Arc<DeviceVlanMode> {
        &self.mode
    }

    /// Returns the cached VLAN mode. Never queries firmware.
    pub fn is_dvm_enabled(&self) -> bool {
        self.mode.is_dvm_enabled()
    }

    /// Configures the device's VLAN mode. Called once during bring-up
    /// by the function holding the global configuration lock, after
    /// the profile download.
    ///
    /// If double VLAN mode is unsupported the device stays in its
    /// hardware default and this returns success without sending any
    /// set command. If the DVM attempt fails mid-sequence, the single
    /// VLAN mode fallback runs; only both failing is an error, which
    /// aborts bring-up for this function.
    pub fn configure_vlan_mode(&self) -> VlanModeResult<()> {
        // Capability-limited functions can query the mode but the
        // configuring function owns the set.
        if self.query_only {
            return Ok(());
        }

        if !self.is_dvm_supported() {
            return Ok(());
        }

        match self.set_dvm() {
            Ok(()) => Ok(()),
            Err(dvm) => {
                warn!(error = %dvm, "Double VLAN mode setup failed, falling back to single VLAN mode");
                match self.set_svm() {
                    Ok(()) => Ok(()),
                    Err(svm) => Err(VlanModeError::ModeConfigFailed { dvm, svm }),
                }
            }
        }
    }

    /// Runs the post-download configuration for this function: caches
    /// the resolved mode, then switches the downstream protocol-id
    /// table if the device ended up in double VLAN mode.
    ///
    /// Called once per function after the profile download and after
    /// the global configuration lock has been released, which is why
    /// it re-queries firmware instead of trusting local state: every
    /// other function on the device went through no configuration at
    /// all.
    pub fn post_download_cfg(&self) {
        self.mode.cache(query_dvm_enabled(&*self.aq));

        if self.mode.is_dvm_enabled() {
            self.hw.change_proto_id_to_dvm();
        }
    }

    /// Checks whether double VLAN mode can be attempted: the profile
    /// must declare it and firmware must answer the mode query. Every
    /// failure downgrades to "unsupported".
    fn is_dvm_supported(&self) -> bool {
        match pkg_supports_dvm(&*self.aq) {
            Ok(false) => return false,
            Ok(true) => {}
            Err(e) => {
                debug!(error = %e, "Failed to read supported VLAN mode from profile");
                return false;
            }
        }

        // Liveness check: firmware that answers the query supports
        // the mode commands at all.
        if let Err(e) = get_vlan_mode(&*self.aq) {
            debug!(error = %e, "Firmware rejected VLAN mode query");
            return false;
        }

        true
    }

    /// Sets up software and hardware for double VLAN mode.
    fn set_dvm(&self) -> AqResult<()> {
        set_vlan_mode(&*self.aq, &SetVlanModeParams::dvm()).map_err(|e| {
            debug!(error = %e, "Failed to set double VLAN mode parameters");
            e
        })?;

        update_dflt_recipes(&*self.hw).map_err(|e| {
            debug!(error = %e, "Failed to update default recipes for double VLAN mode");
            e
        })?;

        self.hw.set_port_params(true).map_err(|e| {
            debug!(error = %e, "Failed to set port in double VLAN mode");
            e
        })?;

        self.hw.set_dvm_boost_entries().map_err(|e| {
            debug!(error = %e, "Failed to set boost TCAM entries for double VLAN mode");
            e
        })?;

        info!("Device configured in double VLAN mode");
        Ok(())
    }

    /// Sets up single VLAN mode.
    fn set_svm(&self) -> AqResult<()> {
        self.hw.set_port_params(false).map_err(|e| {
            debug!(error = %e, "Failed to set port parameters for single VLAN mode");
            e
        })?;

        set_vlan_mode(&*self.aq, &SetVlanModeParams::svm()).map_err(|e| {
            debug!(error = %e, "Failed to configure port in single VLAN mode");
            e
        })?;

        info!("Device configured in single VLAN mode");
        Ok(())
    }
}
