//! State management errors.
//!
//! Errors related to counter allocation and state encoding.

use crate::error::{ErrorSeverity, GameError};

/// Counters owned by the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Counter {
    BossInstance,
    Token,
    KillSequence,
}

/// Errors that occur during game state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// A sequential counter ran out of values.
    #[error("{counter} counter overflow")]
    CounterOverflow {
        /// The exhausted counter.
        counter: Counter,
    },

    /// The state could not be encoded for hashing.
    #[error("failed to encode game state: {0}")]
    Encoding(String),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::CounterOverflow { .. } => ErrorSeverity::Fatal,
            StateError::Encoding(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::CounterOverflow { .. } => "STATE_COUNTER_OVERFLOW",
            StateError::Encoding(_) => "STATE_ENCODING",
        }
    }
}
