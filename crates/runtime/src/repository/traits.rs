//! Repository contract for committed game states.

use raid_core::GameState;

use super::Result;

/// Persistence for committed states, indexed by nonce.
///
/// The simulation worker saves every state before it becomes visible, so the
/// highest stored nonce is always the latest committed state.
pub trait StateRepository: Send + Sync {
    /// Save a game state indexed by nonce.
    ///
    /// Fails with [`RepositoryError::Conflict`](super::RepositoryError::Conflict)
    /// when a state is already stored under `nonce`.
    fn save(&self, nonce: u64, state: &GameState) -> Result<()>;

    /// Load a game state by nonce
    fn load(&self, nonce: u64) -> Result<Option<GameState>>;

    fn exists(&self, nonce: u64) -> bool;

    fn delete(&self, nonce: u64) -> Result<()>;

    /// List all stored nonces in ascending order
    fn list_nonces(&self) -> Result<Vec<u64>>;

    /// Load the state with the highest nonce, if any.
    fn latest(&self) -> Result<Option<GameState>> {
        match self.list_nonces()?.last() {
            Some(&nonce) => self.load(nonce),
            None => Ok(None),
        }
    }

    /// Delete all states in a range [start, end]
    fn delete_range(&self, start: u64, end: u64) -> Result<usize> {
        let mut deleted = 0;
        for nonce in start..=end {
            if self.exists(nonce) {
                self.delete(nonce)?;
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}
