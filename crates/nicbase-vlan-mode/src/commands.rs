//! The get/set VLAN mode admin command pair.

use nicbase_adminq::{AdminQueue, AqResult, Opcode};
use tracing::debug;

use crate::types::{GetVlanModeParams, SetVlanModeParams};

/// Reads the device's current VLAN mode parameters.
pub fn get_vlan_mode<Q: AdminQueue>(aq: &Q) -> AqResult<GetVlanModeParams> {
    let resp = aq.send_command(Opcode::GET_VLAN_MODE, None)?;
    GetVlanModeParams::decode(&resp)
}

/// Programs the device's VLAN mode parameters.
///
/// Every field is validated against its closed value set before the
/// command is built; on rejection nothing is sent. The mode set is a
/// full overwrite on the firmware side, not an increment.
pub fn set_vlan_mode<Q: AdminQueue>(aq: &Q, params: &SetVlanModeParams) -> AqResult<()> {
    params.validate()?;

    let buf = params.encode();
    aq.send_command(Opcode::SET_VLAN_MODE, Some(&buf))?;
    Ok(())
}

/// Best-effort probe: is firmware currently in double VLAN mode?
///
/// Returns false on any failure, including firmware that does not
/// implement the query at all. Only support detection and the
/// post-download cache use this; runtime code reads the cache.
pub fn query_dvm_enabled<Q: AdminQueue>(aq: &Q) -> bool {
    match get_vlan_mode(aq) {
        Ok(params) => params.dvm_enabled(),
        Err(e) => {
            debug!(error = %e, "Failed to get VLAN mode, assuming single VLAN mode");
            false
        }
    }
}
