use std::collections::{BTreeMap, BTreeSet};

use crate::config::GameConfig;

use super::{BossInstanceId, Identity};

/// Whether a character can act.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LifeStatus {
    #[default]
    Alive,
    Dead,
}

/// Player character, one per identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterState {
    pub owner: Identity,
    pub name: String,
    pub hp: u64,
    pub max_hp: u64,
    pub experience: u64,
    pub level: u32,
    pub status: LifeStatus,
    /// Boss instances whose rewards this character already claimed.
    pub claimed: BTreeSet<BossInstanceId>,
}

/// Level transition produced by an experience grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelChange {
    pub experience: u64,
    pub previous_level: u32,
    pub level: u32,
}

impl LevelChange {
    pub fn leveled_up(&self) -> bool {
        self.level > self.previous_level
    }
}

impl CharacterState {
    pub fn new(owner: Identity, name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            owner,
            name: name.into(),
            hp: config.base_hp,
            max_hp: config.base_hp,
            experience: 0,
            level: 1,
            status: LifeStatus::Alive,
            claimed: BTreeSet::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == LifeStatus::Alive
    }

    pub fn is_dead(&self) -> bool {
        self.status == LifeStatus::Dead
    }

    /// Applies incoming damage. Returns `true` when the hit was lethal.
    pub fn take_damage(&mut self, amount: u64) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        if self.hp == 0 && self.is_alive() {
            self.status = LifeStatus::Dead;
            return true;
        }
        false
    }

    /// Brings a dead character back at full health.
    pub fn revive(&mut self) {
        self.hp = self.max_hp;
        self.status = LifeStatus::Alive;
    }

    /// Adds experience and recomputes the level. The level never decreases.
    pub fn grant_experience(&mut self, amount: u64, config: &GameConfig) -> LevelChange {
        let previous_level = self.level;
        self.experience = self.experience.saturating_add(amount);
        self.level = self.level.max(config.level_for(self.experience));
        LevelChange {
            experience: self.experience,
            previous_level,
            level: self.level,
        }
    }
}

/// Character registry keyed by owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharactersState {
    by_owner: BTreeMap<Identity, CharacterState>,
}

impl CharactersState {
    pub fn get(&self, owner: &Identity) -> Option<&CharacterState> {
        self.by_owner.get(owner)
    }

    pub fn get_mut(&mut self, owner: &Identity) -> Option<&mut CharacterState> {
        self.by_owner.get_mut(owner)
    }

    pub fn contains(&self, owner: &Identity) -> bool {
        self.by_owner.contains_key(owner)
    }

    /// Inserts a character unless its owner already has one.
    pub fn insert(&mut self, character: CharacterState) -> Result<(), CharacterState> {
        if self.contains(&character.owner) {
            return Err(character);
        }
        self.by_owner.insert(character.owner.clone(), character);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterState> {
        self.by_owner.values()
    }

    pub fn len(&self) -> usize {
        self.by_owner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_owner.is_empty()
    }
}
