use std::collections::BTreeMap;

use crate::state::StateError;
use crate::state::error::Counter;

use super::{BossInstanceId, Identity, KillSequence, TokenId};

/// Key of a kill record: who dealt the killing blow to which instance.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillKey {
    pub killer: Identity,
    pub boss_instance: BossInstanceId,
}

impl KillKey {
    pub fn new(killer: Identity, boss_instance: BossInstanceId) -> Self {
        Self {
            killer,
            boss_instance,
        }
    }
}

/// Unclaimed proof that `killer` defeated `boss_instance`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillRecord {
    pub killer: Identity,
    pub boss_instance: BossInstanceId,
    pub kill_sequence: KillSequence,
}

impl KillRecord {
    pub fn key(&self) -> KillKey {
        KillKey::new(self.killer.clone(), self.boss_instance)
    }
}

/// Minted reward. Never mutated after issuance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardToken {
    pub id: TokenId,
    pub owner: Identity,
    pub boss_instance: BossInstanceId,
    pub reward: u64,
    pub kill_sequence: KillSequence,
}

/// Kill records, minted tokens and the counters that number them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardsState {
    pub kills: BTreeMap<KillKey, KillRecord>,
    pub tokens: BTreeMap<TokenId, RewardToken>,
    kill_count: u64,
    next_token: u64,
}

impl RewardsState {
    pub fn new() -> Self {
        Self {
            kills: BTreeMap::new(),
            tokens: BTreeMap::new(),
            kill_count: 0,
            next_token: TokenId::FIRST.get(),
        }
    }

    /// Number of bosses killed so far.
    pub fn kill_count(&self) -> u64 {
        self.kill_count
    }

    pub fn next_kill_sequence(&mut self) -> Result<KillSequence, StateError> {
        self.kill_count = self
            .kill_count
            .checked_add(1)
            .ok_or(StateError::CounterOverflow {
                counter: Counter::KillSequence,
            })?;
        Ok(KillSequence(self.kill_count))
    }

    pub fn allocate_token(&mut self) -> Result<TokenId, StateError> {
        let id = TokenId(self.next_token);
        self.next_token = self
            .next_token
            .checked_add(1)
            .ok_or(StateError::CounterOverflow {
                counter: Counter::Token,
            })?;
        Ok(id)
    }

    pub fn record_kill(&mut self, record: KillRecord) {
        self.kills.insert(record.key(), record);
    }

    pub fn take_kill(&mut self, key: &KillKey) -> Option<KillRecord> {
        self.kills.remove(key)
    }

    pub fn has_kill(&self, key: &KillKey) -> bool {
        self.kills.contains_key(key)
    }

    pub fn token(&self, id: TokenId) -> Option<&RewardToken> {
        self.tokens.get(&id)
    }

    /// Tokens held by `owner`, in mint order.
    pub fn tokens_of<'a>(&'a self, owner: &'a Identity) -> impl Iterator<Item = &'a RewardToken> {
        self.tokens.values().filter(move |token| &token.owner == owner)
    }
}

impl Default for RewardsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_one() {
        let mut rewards = RewardsState::new();
        assert_eq!(rewards.next_kill_sequence().unwrap(), KillSequence(1));
        assert_eq!(rewards.allocate_token().unwrap(), TokenId(1));
        assert_eq!(rewards.allocate_token().unwrap(), TokenId(2));
        assert_eq!(rewards.kill_count(), 1);
    }

    #[test]
    fn kill_records_are_consumed_once() {
        let mut rewards = RewardsState::new();
        let record = KillRecord {
            killer: Identity::new("0xa"),
            boss_instance: BossInstanceId(1),
            kill_sequence: KillSequence(1),
        };
        let key = record.key();
        rewards.record_kill(record.clone());

        assert_eq!(rewards.take_kill(&key), Some(record));
        assert_eq!(rewards.take_kill(&key), None);
    }
}
