//! Error types for the action execution pipeline.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    /// Capability and precondition checks on the untouched state.
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
///
/// One variant per action kind, so callers know which request was refused
/// without carrying the action around.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("create or update boss failed: {0}")]
    CreateOrUpdateBoss(TransitionPhaseError<ActionError>),

    #[error("create character failed: {0}")]
    CreateCharacter(TransitionPhaseError<ActionError>),

    #[error("grant experience failed: {0}")]
    GrantExperience(TransitionPhaseError<ActionError>),

    #[error("attack failed: {0}")]
    Attack(TransitionPhaseError<ActionError>),

    #[error("heal failed: {0}")]
    Heal(TransitionPhaseError<ActionError>),

    #[error("claim rewards failed: {0}")]
    ClaimRewards(TransitionPhaseError<ActionError>),

    #[error("transfer operator failed: {0}")]
    TransferOperator(TransitionPhaseError<ActionError>),
}

impl ExecuteError {
    fn inner(&self) -> &TransitionPhaseError<ActionError> {
        match self {
            ExecuteError::CreateOrUpdateBoss(inner)
            | ExecuteError::CreateCharacter(inner)
            | ExecuteError::GrantExperience(inner)
            | ExecuteError::Attack(inner)
            | ExecuteError::Heal(inner)
            | ExecuteError::ClaimRewards(inner)
            | ExecuteError::TransferOperator(inner) => inner,
        }
    }

    /// The rejection reason.
    pub fn error(&self) -> &ActionError {
        &self.inner().error
    }

    pub fn phase(&self) -> TransitionPhase {
        self.inner().phase
    }

    /// Consumes the wrapper and returns the rejection reason.
    pub fn into_error(self) -> ActionError {
        match self {
            ExecuteError::CreateOrUpdateBoss(inner)
            | ExecuteError::CreateCharacter(inner)
            | ExecuteError::GrantExperience(inner)
            | ExecuteError::Attack(inner)
            | ExecuteError::Heal(inner)
            | ExecuteError::ClaimRewards(inner)
            | ExecuteError::TransferOperator(inner) => inner.error,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.error().severity()
    }

    fn error_code(&self) -> &'static str {
        self.error().error_code()
    }
}
