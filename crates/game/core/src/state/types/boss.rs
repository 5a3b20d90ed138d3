use std::collections::BTreeMap;

use crate::state::StateError;
use crate::state::error::Counter;

use super::{BossInstanceId, BossKey};

/// One boss instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossState {
    pub instance: BossInstanceId,
    pub key: BossKey,
    pub name: String,
    pub hp: u64,
    pub damage: u64,
    pub reward: u64,
}

impl BossState {
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Applies incoming damage and returns the remaining hit points.
    pub fn take_damage(&mut self, amount: u64) -> u64 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    pub fn view(&self) -> BossView {
        BossView {
            key: self.key.clone(),
            name: self.name.clone(),
            hp: self.hp,
            damage: self.damage,
            reward: self.reward,
        }
    }
}

/// Public projection of the active boss.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossView {
    pub key: BossKey,
    pub name: String,
    pub hp: u64,
    pub damage: u64,
    pub reward: u64,
}

impl BossView {
    /// Zeroed record reported before any boss has been created.
    pub fn sentinel() -> Self {
        Self {
            key: BossKey::zero(),
            name: String::new(),
            hp: 0,
            damage: 0,
            reward: 0,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

/// All boss instances ever created plus the active slot.
///
/// Replaced instances stay in the registry so kill records that reference
/// them remain claimable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossRegistry {
    pub active: Option<BossInstanceId>,
    pub instances: BTreeMap<BossInstanceId, BossState>,
    next_instance: u64,
}

impl BossRegistry {
    pub fn new() -> Self {
        Self {
            active: None,
            instances: BTreeMap::new(),
            next_instance: BossInstanceId::FIRST.get(),
        }
    }

    pub fn active(&self) -> Option<&BossState> {
        self.active.and_then(|id| self.instances.get(&id))
    }

    pub fn active_mut(&mut self) -> Option<&mut BossState> {
        let id = self.active?;
        self.instances.get_mut(&id)
    }

    pub fn get(&self, instance: BossInstanceId) -> Option<&BossState> {
        self.instances.get(&instance)
    }

    /// Reserves a fresh instance id.
    pub fn allocate_instance(&mut self) -> Result<BossInstanceId, StateError> {
        let id = BossInstanceId(self.next_instance);
        self.next_instance = self
            .next_instance
            .checked_add(1)
            .ok_or(StateError::CounterOverflow {
                counter: Counter::BossInstance,
            })?;
        Ok(id)
    }

    /// Stores `boss` and makes it the active instance.
    pub fn activate(&mut self, boss: BossState) -> Option<BossInstanceId> {
        let id = boss.instance;
        self.instances.insert(id, boss);
        self.active.replace(id)
    }
}

impl Default for BossRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss(instance: BossInstanceId, hp: u64) -> BossState {
        BossState {
            instance,
            key: BossKey::new("0xboss"),
            name: "Punk".into(),
            hp,
            damage: 5,
            reward: 50,
        }
    }

    #[test]
    fn damage_saturates_at_zero() {
        let mut state = boss(BossInstanceId::FIRST, 5);
        assert_eq!(state.take_damage(10), 0);
        assert!(state.is_defeated());
    }

    #[test]
    fn replacing_keeps_previous_instance() {
        let mut registry = BossRegistry::new();

        let first = registry.allocate_instance().unwrap();
        registry.activate(boss(first, 10));
        let second = registry.allocate_instance().unwrap();
        let previous = registry.activate(boss(second, 20));

        assert_eq!(first, BossInstanceId(1));
        assert_eq!(second, BossInstanceId(2));
        assert_eq!(previous, Some(first));
        assert_eq!(registry.active().map(|b| b.hp), Some(20));
        assert_eq!(registry.get(first).map(|b| b.hp), Some(10));
    }

    #[test]
    fn empty_registry_has_no_active_boss() {
        let registry = BossRegistry::new();
        assert!(registry.active().is_none());
        assert!(BossView::sentinel().is_sentinel());
    }
}
