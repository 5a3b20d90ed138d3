//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("state repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Another writer already stored a state under this nonce.
    #[error("state {nonce} was already committed by another writer")]
    Conflict { nonce: u64 },

    #[error("corrupted state file {path}: {reason}")]
    CorruptedData { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
