//! Mock firmware for unit tests.
//!
//! One object plays both the admin queue and the hardware primitives,
//! capturing everything the code under test issues. Its mode-set
//! handler models the firmware contract the fallback design relies
//! on: a set is a full overwrite of the current mode.

use std::sync::Mutex;

use nicbase_adminq::{AdminQueue, AqError, AqResult, AqStatus, Opcode};

use crate::hw::VlanModeCallbacks;
use crate::types::{
    GetVlanModeParams, RdmaPacketSetting, RecipeLookupIdxUpdate, SetVlanModeParams,
    META_INIT_DW_CNT, META_VLAN_MODE_BIT,
};

#[derive(Default)]
struct MockState {
    meta_init_words: [u32; META_INIT_DW_CNT],
    dvm_ena: bool,

    fail_upload_section: bool,
    truncate_section_reply: Option<usize>,
    fail_get_vlan_mode: bool,
    fail_set_dvm: bool,
    fail_set_svm: bool,
    fail_recipe_update_at: Option<usize>,
    fail_port_params_dvm: bool,
    fail_port_params_svm: bool,
    fail_boost_entries: bool,

    sent: Vec<(Opcode, Option<Vec<u8>>)>,
    recipe_updates: Vec<RecipeLookupIdxUpdate>,
    port_params: Vec<bool>,
    boost_entry_calls: u32,
    proto_id_dvm_calls: u32,
}

/// Scriptable firmware double with captured commands and counters.
#[derive(Default)]
pub(crate) struct MockFirmware {
    state: Mutex<MockState>,
}

impl MockFirmware {
    /// Firmware behind a profile without DVM support, mode at the
    /// hardware default (SVM).
    pub fn new() -> Self {
        Self::default()
    }

    /// Firmware behind a profile that declares DVM support.
    pub fn supporting_dvm() -> Self {
        let mut words = [0u32; META_INIT_DW_CNT];
        words[META_VLAN_MODE_BIT / 32] |= 1 << (META_VLAN_MODE_BIT % 32);
        Self::new().with_meta_init_words(words)
    }

    fn with<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    // --- scripting ---------------------------------------------------------

    pub fn with_meta_init_words(self, words: [u32; META_INIT_DW_CNT]) -> Self {
        self.with(|s| s.meta_init_words = words);
        self
    }

    /// Puts firmware itself in DVM before any command runs.
    pub fn dvm_enabled_in_fw(self) -> Self {
        self.with(|s| s.dvm_ena = true);
        self
    }

    pub fn fail_upload_section(self) -> Self {
        self.with(|s| s.fail_upload_section = true);
        self
    }

    pub fn truncate_section_reply(self, len: usize) -> Self {
        self.with(|s| s.truncate_section_reply = Some(len));
        self
    }

    pub fn fail_get_vlan_mode(self) -> Self {
        self.with(|s| s.fail_get_vlan_mode = true);
        self
    }

    /// Rejects mode sets carrying the DVM RDMA setting.
    pub fn fail_set_dvm(self) -> Self {
        self.with(|s| s.fail_set_dvm = true);
        self
    }

    /// Rejects mode sets carrying the SVM RDMA setting.
    pub fn fail_set_svm(self) -> Self {
        self.with(|s| s.fail_set_svm = true);
        self
    }

    /// Rejects the recipe update with the given table index.
    pub fn fail_recipe_update_at(self, index: usize) -> Self {
        self.with(|s| s.fail_recipe_update_at = Some(index));
        self
    }

    pub fn fail_port_params_dvm(self) -> Self {
        self.with(|s| s.fail_port_params_dvm = true);
        self
    }

    pub fn fail_port_params_svm(self) -> Self {
        self.with(|s| s.fail_port_params_svm = true);
        self
    }

    pub fn fail_boost_entries(self) -> Self {
        self.with(|s| s.fail_boost_entries = true);
        self
    }

    // --- inspection --------------------------------------------------------

    pub fn sent_commands(&self) -> Vec<(Opcode, Option<Vec<u8>>)> {
        self.with(|s| s.sent.clone())
    }

    /// Number of mode-set commands that reached the transport.
    pub fn set_command_count(&self) -> usize {
        self.with(|s| {
            s.sent
                .iter()
                .filter(|(op, _)| *op == Opcode::SET_VLAN_MODE)
                .count()
        })
    }

    pub fn recipe_updates(&self) -> Vec<RecipeLookupIdxUpdate> {
        self.with(|s| s.recipe_updates.clone())
    }

    pub fn port_params_calls(&self) -> Vec<bool> {
        self.with(|s| s.port_params.clone())
    }

    pub fn boost_entry_calls(&self) -> u32 {
        self.with(|s| s.boost_entry_calls)
    }

    pub fn proto_id_dvm_calls(&self) -> u32 {
        self.with(|s| s.proto_id_dvm_calls)
    }

    /// Firmware's current mode.
    pub fn dvm_ena(&self) -> bool {
        self.with(|s| s.dvm_ena)
    }
}

impl AdminQueue for MockFirmware {
    fn send_command(&self, opcode: Opcode, payload: Option<&[u8]>) -> AqResult<Vec<u8>> {
        self.with(|s| {
            s.sent.push((opcode, payload.map(<[u8]>::to_vec)));

            match opcode {
                Opcode::UPLOAD_SECTION => {
                    if s.fail_upload_section {
                        return Err(AqError::Firmware {
                            opcode,
                            status: AqStatus::NotSupported,
                        });
                    }
                    let mut resp = Vec::with_capacity(META_INIT_DW_CNT * 4);
                    for word in s.meta_init_words {
                        resp.extend_from_slice(&word.to_le_bytes());
                    }
                    if let Some(len) = s.truncate_section_reply {
                        resp.truncate(len);
                    }
                    Ok(resp)
                }
                Opcode::GET_VLAN_MODE => {
                    if s.fail_get_vlan_mode {
                        return Err(AqError::Firmware {
                            opcode,
                            status: AqStatus::NotSupported,
                        });
                    }
                    let params = GetVlanModeParams {
                        vlan_mode: if s.dvm_ena {
                            GetVlanModeParams::DVM_ENA
                        } else {
                            0
                        },
                        l2tag_prio_tagging: 0,
                    };
                    Ok(params.encode().to_vec())
                }
                Opcode::SET_VLAN_MODE => {
                    let buf = payload.ok_or_else(|| AqError::param("missing set payload"))?;
                    let params = SetVlanModeParams::decode(buf)?;
                    let wants_dvm = params.rdma_packet == RdmaPacketSetting::Dvm.as_raw();

                    if wants_dvm && s.fail_set_dvm || !wants_dvm && s.fail_set_svm {
                        return Err(AqError::Firmware {
                            opcode,
                            status: AqStatus::Busy,
                        });
                    }

                    // Full overwrite, never an increment.
                    s.dvm_ena = wants_dvm;
                    Ok(Vec::new())
                }
                other => Err(AqError::Firmware {
                    opcode: other,
                    status: AqStatus::NotFound,
                }),
            }
        })
    }
}

impl VlanModeCallbacks for MockFirmware {
    fn update_recipe_lkup_idx(&self, update: &RecipeLookupIdxUpdate) -> AqResult<()> {
        self.with(|s| {
            if s.fail_recipe_update_at == Some(s.recipe_updates.len()) {
                return Err(AqError::transport("recipe lookup index update rejected"));
            }
            s.recipe_updates.push(*update);
            Ok(())
        })
    }

    fn set_port_params(&self, double_vlan: bool) -> AqResult<()> {
        self.with(|s| {
            s.port_params.push(double_vlan);
            if double_vlan && s.fail_port_params_dvm || !double_vlan && s.fail_port_params_svm {
                return Err(AqError::transport("port parameter update rejected"));
            }
            Ok(())
        })
    }

    fn set_dvm_boost_entries(&self) -> AqResult<()> {
        self.with(|s| {
            s.boost_entry_calls += 1;
            if s.fail_boost_entries {
                return Err(AqError::transport("boost TCAM entry programming failed"));
            }
            Ok(())
        })
    }

    fn change_proto_id_to_dvm(&self) {
        self.with(|s| s.proto_id_dvm_calls += 1);
    }
}
