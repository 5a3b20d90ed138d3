//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine rejections, worker coordination failures and repository or
//! ledger errors so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use raid_core::{ActionError, ExecuteError, StateError};

pub use crate::ledger::LedgerError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The engine refused the action. State is unchanged.
    #[error(transparent)]
    Rejected(#[from] ExecuteError),

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("simulation worker returned an unexpected result for {action}")]
    UnexpectedResult { action: &'static str },

    #[error("no initial state provided and the repository is empty")]
    MissingState,
}

impl RuntimeError {
    /// The engine rejection, if this error is one.
    pub fn rejection(&self) -> Option<&ActionError> {
        match self {
            RuntimeError::Rejected(error) => Some(error.error()),
            _ => None,
        }
    }
}
