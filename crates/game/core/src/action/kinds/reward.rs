use crate::action::{ActionError, ActionTransition, ClaimRejection};
use crate::env::GameEnv;
use crate::event::{EventSink, GameEvent};
use crate::state::{BossInstanceId, GameState, Identity, KillKey, RewardToken};

/// Redeems the caller's kill record for a boss instance into a reward token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaimRewardsAction {
    pub boss_instance: BossInstanceId,
}

impl ClaimRewardsAction {
    fn key(&self, caller: &Identity) -> KillKey {
        KillKey::new(caller.clone(), self.boss_instance)
    }

    fn rejected(&self, reason: ClaimRejection) -> ActionError {
        ActionError::ClaimNotAllowed {
            boss_instance: self.boss_instance,
            reason,
        }
    }

    fn rejection_reason(&self, state: &GameState, caller: &Identity) -> ClaimRejection {
        let already_claimed = state
            .character(caller)
            .is_some_and(|character| character.claimed.contains(&self.boss_instance));

        match state.bosses.get(self.boss_instance) {
            None => ClaimRejection::UnknownBoss,
            Some(_) if already_claimed => ClaimRejection::AlreadyClaimed,
            Some(boss) if !boss.is_defeated() => ClaimRejection::BossAlive,
            Some(_) => ClaimRejection::NotKiller,
        }
    }
}

impl ActionTransition for ClaimRewardsAction {
    type Result = RewardToken;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let caller = &env.call().caller;
        if state.character(caller).is_some_and(|character| character.is_dead()) {
            return Err(ActionError::CharacterDead {
                owner: caller.clone(),
            });
        }
        if state.rewards.has_kill(&self.key(caller)) {
            return Ok(());
        }
        Err(self.rejected(self.rejection_reason(state, caller)))
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut EventSink,
    ) -> Result<Self::Result, ActionError> {
        let caller = &env.call().caller;
        let record = state
            .rewards
            .take_kill(&self.key(caller))
            .ok_or_else(|| self.rejected(ClaimRejection::AlreadyClaimed))?;
        let reward = state
            .bosses
            .get(record.boss_instance)
            .map(|boss| boss.reward)
            .ok_or_else(|| self.rejected(ClaimRejection::UnknownBoss))?;

        let token = RewardToken {
            id: state.rewards.allocate_token()?,
            owner: caller.clone(),
            boss_instance: record.boss_instance,
            reward,
            kill_sequence: record.kill_sequence,
        };
        state.rewards.tokens.insert(token.id, token.clone());

        if let Some(character) = state.characters.get_mut(caller) {
            character.claimed.insert(record.boss_instance);
        }

        events.emit(GameEvent::RewardGranted {
            owner: caller.clone(),
            token_id: token.id,
            reward,
            kill_sequence: record.kill_sequence,
        });

        Ok(token)
    }
}
