use std::collections::BTreeMap;
use std::sync::RwLock;

use raid_core::{GameState, Identity, RewardToken, TokenId};

use super::{LedgerError, Result, TokenLedger};

/// Ledger held in memory, rebuilt from the persisted state on startup.
#[derive(Debug, Default)]
pub struct InMemoryTokenLedger {
    owners: RwLock<BTreeMap<TokenId, Identity>>,
}

impl InMemoryTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the ledger with every token already minted in `state`.
    pub fn from_state(state: &GameState) -> Self {
        let owners = state
            .rewards
            .tokens
            .values()
            .map(|token| (token.id, token.owner.clone()))
            .collect();
        Self {
            owners: RwLock::new(owners),
        }
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn mint(&self, token: &RewardToken) -> Result<()> {
        let mut owners = self.owners.write().map_err(|_| LedgerError::LockPoisoned)?;
        if owners.contains_key(&token.id) {
            return Err(LedgerError::AlreadyMinted(token.id));
        }
        owners.insert(token.id, token.owner.clone());
        Ok(())
    }

    fn balance_of(&self, owner: &Identity) -> Result<usize> {
        let owners = self.owners.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(owners.values().filter(|holder| *holder == owner).count())
    }

    fn owner_of(&self, token: TokenId) -> Result<Option<Identity>> {
        let owners = self.owners.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(owners.get(&token).cloned())
    }
}
