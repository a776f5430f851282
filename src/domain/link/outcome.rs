//! Per-send outcome reporting

use thiserror::Error;

/// Why a send did not go through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendFailure {
    #[error("no connected peripheral with a resolved write characteristic")]
    NotConnected,

    #[error("required service or characteristic not found on the peripheral")]
    ServiceOrCharacteristicMissing,

    #[error("transport rejected the write")]
    TransportRejected,
}

/// Result of one `send` call. Ephemeral; `accepted` reports transport-level
/// dispatch, not business-level acceptance by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOutcome {
    pub attempted: bool,
    pub accepted: bool,
    pub failure: Option<SendFailure>,
}

impl SendOutcome {
    /// The write was handed to the transport with response requested
    pub const fn sent() -> Self {
        Self {
            attempted: true,
            accepted: true,
            failure: None,
        }
    }

    /// Precondition failed before any write was issued
    pub const fn not_attempted(failure: SendFailure) -> Self {
        Self {
            attempted: false,
            accepted: false,
            failure: Some(failure),
        }
    }

    /// The write was issued but the transport refused it
    pub const fn rejected() -> Self {
        Self {
            attempted: true,
            accepted: false,
            failure: Some(SendFailure::TransportRejected),
        }
    }
}
