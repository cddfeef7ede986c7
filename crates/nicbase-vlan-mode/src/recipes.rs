//! Applies the DVM lookup-index updates to the default switch recipes.

use nicbase_adminq::AqResult;
use tracing::debug;

use crate::hw::VlanModeCallbacks;
use crate::types::DVM_DFLT_RECIPE_UPDATES;

/// Updates the default recipes for double VLAN mode.
///
/// Entries are applied in table order and the first failure is
/// returned as-is. Earlier updates are not rolled back: the caller
/// falls back to single VLAN mode on any failure here, and that path
/// does not depend on the recipes being in any particular partial
/// state.
pub fn update_dflt_recipes<C: VlanModeCallbacks>(hw: &C) -> AqResult<()> {
    for update in &DVM_DFLT_RECIPE_UPDATES {
        if let Err(e) = hw.update_recipe_lkup_idx(update) {
            debug!(
                recipe_id = update.recipe_id,
                lkup_idx = update.lkup_idx,
                fv_idx = update.fv_idx,
                mask = ?update.mask,
                error = %e,
                "Failed to update recipe lookup index"
            );
            return Err(e);
        }
    }

    Ok(())
}
