use crate::action::{ActionError, ActionTransition};
use crate::env::{Capability, GameEnv};
use crate::event::{EventSink, GameEvent};
use crate::state::{CharacterState, GameState, Identity, LevelChange};

/// Creates the caller's character. One per identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateCharacterAction {
    pub name: String,
}

impl ActionTransition for CreateCharacterAction {
    type Result = ();

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let owner = &env.call().caller;
        if state.characters.contains(owner) {
            return Err(ActionError::DuplicateCharacter {
                owner: owner.clone(),
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut EventSink,
    ) -> Result<Self::Result, ActionError> {
        let owner = env.call().caller.clone();
        let character = CharacterState::new(owner.clone(), self.name.clone(), env.config());

        state
            .characters
            .insert(character)
            .map_err(|existing| ActionError::DuplicateCharacter {
                owner: existing.owner,
            })?;

        events.emit(GameEvent::CharacterCreated { owner });
        Ok(())
    }
}

/// Adds experience to a character. Operator only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrantExperienceAction {
    pub target: Identity,
    pub amount: u64,
}

impl ActionTransition for GrantExperienceAction {
    type Result = LevelChange;

    fn required_capability(&self) -> Capability {
        Capability::Operator
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        if !state.characters.contains(&self.target) {
            return Err(ActionError::CharacterNotFound {
                owner: self.target.clone(),
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut EventSink,
    ) -> Result<Self::Result, ActionError> {
        let character =
            state
                .characters
                .get_mut(&self.target)
                .ok_or_else(|| ActionError::CharacterNotFound {
                    owner: self.target.clone(),
                })?;

        let change = character.grant_experience(self.amount, env.config());

        events.emit(GameEvent::ExperienceGranted {
            owner: self.target.clone(),
            amount: self.amount,
            experience: change.experience,
            level: change.level,
        });
        if change.leveled_up() {
            events.emit(GameEvent::LevelUp {
                owner: self.target.clone(),
                level: change.level,
            });
        }

        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testing::{OTHER, OWNER, add_character, run, state};

    fn give(target: &str, amount: u64) -> GrantExperienceAction {
        GrantExperienceAction {
            target: Identity::new(target),
            amount,
        }
    }

    #[test]
    fn creates_character_at_baseline() {
        let mut state = state();
        let action = CreateCharacterAction {
            name: "Alice".into(),
        };

        let (_, events) = run(&action, &mut state, OWNER).unwrap();

        let character = state.character(&Identity::new(OWNER)).unwrap();
        assert_eq!(character.name, "Alice");
        assert_eq!(character.hp, 100);
        assert_eq!(character.level, 1);
        assert!(character.is_alive());
        assert_eq!(
            events,
            vec![GameEvent::CharacterCreated {
                owner: Identity::new(OWNER)
            }]
        );
    }

    #[test]
    fn second_character_is_duplicate() {
        let mut state = state();
        add_character(&mut state, OWNER);

        let action = CreateCharacterAction {
            name: "Alice, The Second".into(),
        };
        let result = run(&action, &mut state, OWNER);

        assert!(matches!(
            result,
            Err(ActionError::DuplicateCharacter { owner }) if owner == Identity::new(OWNER)
        ));
    }

    #[test]
    fn operator_grants_experience_and_levels() {
        let mut state = state();
        add_character(&mut state, OTHER);

        let (change, events) = run(&give(OTHER, 100), &mut state, OWNER).unwrap();

        assert_eq!(change.level, 2);
        assert_eq!(state.character(&Identity::new(OTHER)).unwrap().level, 2);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            GameEvent::LevelUp {
                owner: Identity::new(OTHER),
                level: 2
            }
        );
    }

    #[test]
    fn player_cannot_grant_experience() {
        let mut state = state();
        add_character(&mut state, OTHER);

        let result = run(&give(OTHER, 100), &mut state, OTHER);

        assert!(matches!(result, Err(ActionError::Unauthorized { .. })));
        assert_eq!(state.character(&Identity::new(OTHER)).unwrap().level, 1);
    }

    #[test]
    fn granting_to_missing_character_fails() {
        let mut state = state();
        let result = run(&give(OTHER, 100), &mut state, OWNER);
        assert!(matches!(result, Err(ActionError::CharacterNotFound { .. })));
    }
}
