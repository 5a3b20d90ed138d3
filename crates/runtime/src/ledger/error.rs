use raid_core::TokenId;
use thiserror::Error;

/// Errors surfaced by token ledger implementations.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("token ledger lock was poisoned")]
    LockPoisoned,

    #[error("token {0} was already minted")]
    AlreadyMinted(TokenId),
}
