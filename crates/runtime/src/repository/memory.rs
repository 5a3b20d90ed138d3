//! In-memory StateRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::RwLock;

use raid_core::GameState;

use super::{RepositoryError, Result, StateRepository};

/// Keeps every committed state in a nonce-ordered map.
#[derive(Default)]
pub struct InMemoryStateRepo {
    states: RwLock<BTreeMap<u64, GameState>>,
}

impl InMemoryStateRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, nonce: u64, state: &GameState) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        match states.entry(nonce) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict { nonce }),
            Entry::Vacant(slot) => {
                slot.insert(state.clone());
                Ok(())
            }
        }
    }

    fn load(&self, nonce: u64) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.get(&nonce).cloned())
    }

    fn exists(&self, nonce: u64) -> bool {
        self.states
            .read()
            .map(|states| states.contains_key(&nonce))
            .unwrap_or(false)
    }

    fn delete(&self, nonce: u64) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.remove(&nonce);
        Ok(())
    }

    fn list_nonces(&self) -> Result<Vec<u64>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.keys().copied().collect())
    }
}
