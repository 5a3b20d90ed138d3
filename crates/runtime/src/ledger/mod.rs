//! Token ownership ledger.
//!
//! The game state is the source of truth for minted rewards; the ledger is the
//! external view other systems query for `balance_of` / `owner_of`. The
//! simulation worker mirrors every committed mint into it.

mod error;
mod memory;

pub use error::LedgerError;
pub use memory::InMemoryTokenLedger;

use raid_core::{Identity, RewardToken, TokenId};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Ownership records for minted reward tokens.
pub trait TokenLedger: Send + Sync {
    /// Records a freshly minted token. Token ids are never reused.
    fn mint(&self, token: &RewardToken) -> Result<()>;

    /// Number of tokens held by `owner`.
    fn balance_of(&self, owner: &Identity) -> Result<usize>;

    fn owner_of(&self, token: TokenId) -> Result<Option<Identity>>;
}
