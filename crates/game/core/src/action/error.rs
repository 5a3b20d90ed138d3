//! Action execution errors.
//!
//! Every rejection a caller can receive. Messages are descriptive; the
//! [`GameError::error_code`] is the stable identifier.

use crate::env::Capability;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BossInstanceId, Identity, StateError};

/// Why a reward claim was refused.
///
/// Callers only see [`ActionError::ClaimNotAllowed`]; the reason is kept for
/// logs and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ClaimRejection {
    /// No boss instance with that id was ever created.
    UnknownBoss,
    /// The boss still has hit points left.
    BossAlive,
    /// The boss is dead but the caller did not deal the killing blow.
    NotKiller,
    /// The caller's kill record was already consumed.
    AlreadyClaimed,
}

/// Errors that can occur during action execution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Caller lacks the capability the action requires.
    #[error("caller {caller} is not allowed to perform this action (requires {required})")]
    Unauthorized {
        caller: Identity,
        required: Capability,
    },

    /// Caller already owns a character.
    #[error("only 1 character per user is allowed ({owner} already has one)")]
    DuplicateCharacter { owner: Identity },

    /// Caller has no character.
    #[error("no character found for {owner}")]
    CharacterNotFound { owner: Identity },

    /// Caller's character is dead and must be healed first.
    #[error("cannot execute this action when dead, ask for heal first")]
    CharacterDead { owner: Identity },

    /// Spell casting requires a higher level.
    #[error("you need to have at least level {required} to use spells (current level {level})")]
    InsufficientLevel { level: u32, required: u32 },

    /// A dead caller tried to heal themselves.
    #[error("cannot heal yourself while dead, ask another player for a heal")]
    SelfHealForbidden { owner: Identity },

    /// Heal target does not exist or is not dead.
    #[error("the player {target} doesn't exist or it's not dead")]
    InvalidHealTarget { target: Identity },

    /// The proposed operator identity is empty.
    #[error("operator identity must not be empty")]
    InvalidOperator,

    /// No boss has been created yet.
    #[error("there is no active boss")]
    NoActiveBoss,

    /// The active boss is already dead.
    #[error("boss instance {boss_instance} is already defeated")]
    BossDefeated { boss_instance: BossInstanceId },

    /// No claimable kill record for the caller and boss instance.
    #[error("the player is not allowed to claim rewards for boss instance {boss_instance}")]
    ClaimNotAllowed {
        boss_instance: BossInstanceId,
        reason: ClaimRejection,
    },

    /// State bookkeeping failed (e.g. an exhausted counter).
    #[error(transparent)]
    State(#[from] StateError),
}

impl ActionError {
    /// Internal reason of a refused claim, if this is one.
    pub fn claim_rejection(&self) -> Option<ClaimRejection> {
        match self {
            ActionError::ClaimNotAllowed { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::State(error) => error.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            Unauthorized { .. } => "ACTION_UNAUTHORIZED",
            DuplicateCharacter { .. } => "ACTION_DUPLICATE_CHARACTER",
            CharacterNotFound { .. } => "ACTION_CHARACTER_NOT_FOUND",
            CharacterDead { .. } => "ACTION_CHARACTER_DEAD",
            InsufficientLevel { .. } => "ACTION_INSUFFICIENT_LEVEL",
            SelfHealForbidden { .. } => "ACTION_SELF_HEAL_FORBIDDEN",
            InvalidHealTarget { .. } => "ACTION_INVALID_HEAL_TARGET",
            InvalidOperator => "ACTION_INVALID_OPERATOR",
            NoActiveBoss => "ACTION_NO_ACTIVE_BOSS",
            BossDefeated { .. } => "ACTION_BOSS_DEFEATED",
            ClaimNotAllowed { .. } => "ACTION_CLAIM_NOT_ALLOWED",
            State(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Counter;

    #[test]
    fn claim_message_hides_reason() {
        let already = ActionError::ClaimNotAllowed {
            boss_instance: BossInstanceId(1),
            reason: ClaimRejection::AlreadyClaimed,
        };
        let alive = ActionError::ClaimNotAllowed {
            boss_instance: BossInstanceId(1),
            reason: ClaimRejection::BossAlive,
        };

        assert_eq!(already.to_string(), alive.to_string());
        assert_eq!(already.error_code(), alive.error_code());
        assert_eq!(already.claim_rejection(), Some(ClaimRejection::AlreadyClaimed));
    }

    #[test]
    fn counter_overflow_is_fatal() {
        let error = ActionError::from(StateError::CounterOverflow {
            counter: Counter::Token,
        });
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
        assert_eq!(error.error_code(), "STATE_COUNTER_OVERFLOW");
    }
}
