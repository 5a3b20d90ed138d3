//! Authoritative game state representation.
//!
//! This module owns the boss registry, the character roster and the reward
//! book. Runtime layers clone or query this state but mutate it exclusively
//! through the engine.
pub mod error;
pub mod types;

pub use error::{Counter, StateError};
pub use types::{
    BossInstanceId, BossKey, BossRegistry, BossState, BossView, CharacterState, CharactersState,
    Identity, KillKey, KillRecord, KillSequence, LevelChange, LifeStatus, RewardToken,
    RewardsState, TokenId,
};

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Identity allowed to manage bosses and grant experience.
    pub operator: Identity,
    /// Number of committed actions. Incremented by the engine after each success.
    pub nonce: u64,
    pub bosses: BossRegistry,
    pub characters: CharactersState,
    pub rewards: RewardsState,
}

impl GameState {
    /// Creates an empty world administered by `operator`.
    pub fn new(operator: Identity) -> Self {
        Self {
            operator,
            nonce: 0,
            bosses: BossRegistry::new(),
            characters: CharactersState::default(),
            rewards: RewardsState::new(),
        }
    }

    pub fn is_operator(&self, identity: &Identity) -> bool {
        &self.operator == identity
    }

    /// Active boss projection, or the zeroed sentinel if no boss exists.
    pub fn active_boss(&self) -> BossView {
        self.bosses
            .active()
            .map(BossState::view)
            .unwrap_or_else(BossView::sentinel)
    }

    pub fn character(&self, owner: &Identity) -> Option<&CharacterState> {
        self.characters.get(owner)
    }

    pub fn token(&self, id: TokenId) -> Option<&RewardToken> {
        self.rewards.token(id)
    }

    pub fn owner_of(&self, id: TokenId) -> Option<&Identity> {
        self.rewards.token(id).map(|token| &token.owner)
    }

    pub fn balance_of(&self, owner: &Identity) -> usize {
        self.rewards.tokens_of(owner).count()
    }

    /// SHA-256 over the bincode encoding of the state.
    ///
    /// All collections are ordered maps, so equal states hash equally.
    #[cfg(feature = "serde")]
    pub fn state_root(&self) -> Result<[u8; 32], StateError> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self).map_err(|e| StateError::Encoding(e.to_string()))?;
        Ok(Sha256::digest(&bytes).into())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Identity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_reports_sentinel_boss() {
        let state = GameState::new(Identity::new("0xowner"));
        assert_eq!(state.active_boss(), BossView::sentinel());
        assert_eq!(state.active_boss().key.as_str(), BossKey::ZERO);
    }

    #[test]
    fn operator_check_is_case_insensitive() {
        let state = GameState::new(Identity::new("0xOwner"));
        assert!(state.is_operator(&Identity::new("0xOWNER")));
        assert!(!state.is_operator(&Identity::new("0xother")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn state_root_is_deterministic() {
        let state = GameState::new(Identity::new("0xowner"));
        let first = state.state_root().unwrap();
        let second = state.clone().state_root().unwrap();
        assert_eq!(hex::encode(first), hex::encode(second));

        let mut changed = state.clone();
        changed.nonce += 1;
        assert_ne!(changed.state_root().unwrap(), first);
    }
}
