//! Seam to the switch/port primitives the mode change depends on.

use nicbase_adminq::AqResult;

use crate::types::RecipeLookupIdxUpdate;

/// Hardware primitives invoked while switching VLAN modes.
///
/// These live in other driver components (switch recipe engine, port
/// configuration, boost TCAM, protocol-id table); the orchestrator
/// only needs them as blocking success/failure calls.
pub trait VlanModeCallbacks: Send + Sync {
    /// Applies one lookup-index adjustment to an existing recipe.
    fn update_recipe_lkup_idx(&self, update: &RecipeLookupIdxUpdate) -> AqResult<()>;

    /// Programs the port parameters for double (`true`) or single
    /// (`false`) VLAN framing.
    fn set_port_params(&self, double_vlan: bool) -> AqResult<()>;

    /// Programs the boost TCAM entries that recognize the additional
    /// VLAN ethertypes under double VLAN mode.
    fn set_dvm_boost_entries(&self) -> AqResult<()>;

    /// Switches the protocol-id table used by downstream
    /// classification from single- to double-tag semantics.
    fn change_proto_id_to_dvm(&self);
}
