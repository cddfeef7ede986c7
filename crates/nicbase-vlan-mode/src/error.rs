//! Error types for VLAN mode configuration.

use nicbase_adminq::AqError;
use thiserror::Error;

/// Result type alias for VLAN mode operations.
pub type VlanModeResult<T> = Result<T, VlanModeError>;

/// Errors surfaced by the VLAN mode subsystem.
#[derive(Debug, Clone, Error)]
pub enum VlanModeError {
    /// An admin command or primitive failed.
    #[error(transparent)]
    Aq(#[from] AqError),

    /// The double VLAN mode attempt failed and the single VLAN mode
    /// fallback failed as well. Device bring-up cannot continue for
    /// this function.
    #[error("VLAN mode configuration failed: DVM attempt: {dvm}; SVM fallback: {svm}")]
    ModeConfigFailed {
        /// The failure that ended the DVM attempt.
        dvm: AqError,
        /// The failure of the SVM fallback sequence.
        svm: AqError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use nicbase_adminq::{AqStatus, Opcode};

    #[test]
    fn test_mode_config_failed_keeps_both_failures() {
        let err = VlanModeError::ModeConfigFailed {
            dvm: AqError::Firmware {
                opcode: Opcode::SET_VLAN_MODE,
                status: AqStatus::NotSupported,
            },
            svm: AqError::Firmware {
                opcode: Opcode::SET_VLAN_MODE,
                status: AqStatus::Busy,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("DVM attempt"));
        assert!(msg.contains("AQ_RC_ENOSYS"));
        assert!(msg.contains("AQ_RC_EBUSY"));
    }

    #[test]
    fn test_aq_error_converts() {
        let err: VlanModeError = AqError::NoMemory.into();
        assert!(matches!(err, VlanModeError::Aq(AqError::NoMemory)));
    }
}
