use crate::action::{ActionError, ActionTransition};
use crate::env::{Capability, GameEnv};
use crate::event::{EventSink, GameEvent};
use crate::state::{BossInstanceId, BossKey, BossState, GameState};

/// Replaces the active boss with a fresh instance. Operator only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateOrUpdateBossAction {
    pub key: BossKey,
    pub name: String,
    pub hp: u64,
    pub damage: u64,
    pub reward: u64,
}

impl ActionTransition for CreateOrUpdateBossAction {
    type Result = BossInstanceId;

    fn required_capability(&self) -> Capability {
        Capability::Operator
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        events: &mut EventSink,
    ) -> Result<Self::Result, ActionError> {
        let instance = state.bosses.allocate_instance()?;
        state.bosses.activate(BossState {
            instance,
            key: self.key.clone(),
            name: self.name.clone(),
            hp: self.hp,
            damage: self.damage,
            reward: self.reward,
        });

        events.emit(GameEvent::BossCreatedOrUpdated {
            boss_key: self.key.clone(),
            boss_instance: instance,
        });

        Ok(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testing::{OTHER, OWNER, run, state};
    use crate::state::BossView;

    fn punk(hp: u64) -> CreateOrUpdateBossAction {
        CreateOrUpdateBossAction {
            key: BossKey::new("0x16F5A35647D6F03D5D3da7b35409D65ba03aF3B2"),
            name: "Punk".into(),
            hp,
            damage: 20,
            reward: 75,
        }
    }

    #[test]
    fn operator_creates_active_boss() {
        let mut state = state();

        let (instance, events) = run(&punk(150), &mut state, OWNER).unwrap();

        assert_eq!(instance, BossInstanceId(1));
        assert_eq!(
            state.active_boss(),
            BossView {
                key: BossKey::new("0x16F5A35647D6F03D5D3da7b35409D65ba03aF3B2"),
                name: "Punk".into(),
                hp: 150,
                damage: 20,
                reward: 75,
            }
        );
        assert_eq!(
            events,
            vec![GameEvent::BossCreatedOrUpdated {
                boss_key: BossKey::new("0x16F5A35647D6F03D5D3da7b35409D65ba03aF3B2"),
                boss_instance: instance,
            }]
        );
    }

    #[test]
    fn non_operator_is_rejected() {
        let mut state = state();

        let result = run(&punk(150), &mut state, OTHER);

        assert!(matches!(result, Err(ActionError::Unauthorized { .. })));
        assert!(state.active_boss().is_sentinel());
    }

    #[test]
    fn last_write_wins() {
        let mut state = state();
        run(&punk(150), &mut state, OWNER).unwrap();
        let (second, _) = run(&punk(300), &mut state, OWNER).unwrap();

        assert_eq!(second, BossInstanceId(2));
        assert_eq!(state.active_boss().hp, 300);
        assert_eq!(state.bosses.get(BossInstanceId(1)).map(|b| b.hp), Some(150));
    }
}
