//! Event payloads for each topic.

use raid_core::engine::TransitionPhase;
use raid_core::{Action, ClaimRejection, ExecuteError, GameError, GameEvent};
use serde::{Deserialize, Serialize};

/// A single game event from a committed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Nonce of the commit that produced the event.
    pub nonce: u64,
    pub event: GameEvent,
}

/// A request the engine refused. State is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// State nonce at the time of the rejection.
    pub nonce: u64,
    pub action: Action,
    pub phase: TransitionPhase,
    pub error_code: String,
    pub message: String,
    /// Diagnostic detail for refused claims; not part of `message`.
    pub claim_rejection: Option<ClaimRejection>,
}

impl Rejection {
    pub fn new(nonce: u64, action: Action, error: &ExecuteError) -> Self {
        Self {
            nonce,
            action,
            phase: error.phase(),
            error_code: error.error_code().to_string(),
            message: error.error().to_string(),
            claim_rejection: error.error().claim_rejection(),
        }
    }
}
