use crate::action::{ActionError, ActionTransition};
use crate::env::GameEnv;
use crate::event::{EventSink, GameEvent};
use crate::state::{GameState, Identity};

/// Revives a dead character. The healer must be alive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealAction {
    pub target: Identity,
}

impl ActionTransition for HealAction {
    type Result = ();

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let healer = &env.call().caller;
        let character = state
            .characters
            .get(healer)
            .ok_or_else(|| ActionError::CharacterNotFound {
                owner: healer.clone(),
            })?;

        if character.is_dead() {
            if &self.target == healer {
                return Err(ActionError::SelfHealForbidden {
                    owner: healer.clone(),
                });
            }
            return Err(ActionError::CharacterDead {
                owner: healer.clone(),
            });
        }

        match state.characters.get(&self.target) {
            Some(target) if target.is_dead() => Ok(()),
            _ => Err(ActionError::InvalidHealTarget {
                target: self.target.clone(),
            }),
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut EventSink,
    ) -> Result<Self::Result, ActionError> {
        let target =
            state
                .characters
                .get_mut(&self.target)
                .ok_or_else(|| ActionError::InvalidHealTarget {
                    target: self.target.clone(),
                })?;
        target.revive();

        events.emit(GameEvent::CharacterRevived {
            healer: env.call().caller.clone(),
            healed: self.target.clone(),
        });
        Ok(())
    }
}
