use crate::action::{ActionError, ActionTransition};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::event::{EventSink, GameEvent};
use crate::state::{BossInstanceId, GameState, KillRecord, KillSequence};

/// One combat round against the active boss.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub style: AttackStyle,
}

impl AttackAction {
    pub fn melee() -> Self {
        Self {
            style: AttackStyle::Melee,
        }
    }

    pub fn spell() -> Self {
        Self {
            style: AttackStyle::Spell,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackStyle {
    /// Base damage, no requirements.
    Melee,
    /// Multiplied damage, gated by character level.
    Spell,
}

impl AttackStyle {
    pub fn damage(self, config: &GameConfig) -> u64 {
        match self {
            AttackStyle::Melee => config.base_damage,
            AttackStyle::Spell => config.spell_damage(),
        }
    }
}

/// Result of a resolved combat round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub boss_instance: BossInstanceId,
    /// Damage dealt to the boss.
    pub damage: u64,
    /// Boss hit points after the round.
    pub boss_hp: u64,
    /// Damage dealt back to the attacker.
    pub boss_damage: u64,
    /// Set when this round killed the boss.
    pub kill_sequence: Option<KillSequence>,
    pub attacker_died: bool,
}

impl ActionTransition for AttackAction {
    type Result = AttackOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let caller = &env.call().caller;
        let character = state
            .characters
            .get(caller)
            .ok_or_else(|| ActionError::CharacterNotFound {
                owner: caller.clone(),
            })?;

        // Level gate comes first: it must hold regardless of boss state.
        if self.style == AttackStyle::Spell {
            let required = env.config().spell_min_level;
            if character.level < required {
                return Err(ActionError::InsufficientLevel {
                    level: character.level,
                    required,
                });
            }
        }

        if character.is_dead() {
            return Err(ActionError::CharacterDead {
                owner: caller.clone(),
            });
        }

        let boss = state.bosses.active().ok_or(ActionError::NoActiveBoss)?;
        if boss.is_defeated() {
            return Err(ActionError::BossDefeated {
                boss_instance: boss.instance,
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
        let attacker = env.call().caller.clone();
        let damage = self.style.damage(env.config());

        let boss = state.bosses.active_mut().ok_or(ActionError::NoActiveBoss)?;
        let hp_before = boss.hp;
        let boss_hp = boss.take_damage(damage);
        let boss_instance = boss.instance;
        let boss_damage = boss.damage;
        let killed = hp_before > 0 && boss_hp == 0;

        // The boss strikes back in the same round, even on its killing blow.
        let character =
            state
                .characters
                .get_mut(&attacker)
                .ok_or_else(|| ActionError::CharacterNotFound {
                    owner: attacker.clone(),
                })?;
        let attacker_died = character.take_damage(boss_damage);

        events.emit(GameEvent::AttackRound {
            boss_instance,
            boss_hp,
            damage,
            attacker: attacker.clone(),
            boss_damage,
        });

        let kill_sequence = if killed {
            let kill_sequence = state.rewards.next_kill_sequence()?;
            state.rewards.record_kill(KillRecord {
                killer: attacker.clone(),
                boss_instance,
                kill_sequence,
            });
            events.emit(GameEvent::BossKilled {
                boss_instance,
                kill_sequence,
                killer: attacker.clone(),
            });
            Some(kill_sequence)
        } else {
            None
        };

        if attacker_died {
            events.emit(GameEvent::CharacterDied { owner: attacker });
        }

        Ok(AttackOutcome {
            boss_instance,
            damage,
            boss_hp,
            boss_damage,
            kill_sequence,
            attacker_died,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::GrantExperienceAction;
    use crate::action::testing::{OTHER, OWNER, add_character, run, state, with_boss};
    use crate::state::{Identity, KillKey};

    fn level_up(state: &mut GameState, owner: &str) {
        let action = GrantExperienceAction {
            target: Identity::new(owner),
            amount: 100,
        };
        run(&action, state, OWNER).unwrap();
    }

    #[test]
    fn attack_damages_boss_and_takes_retaliation() {
        let mut state = with_boss(200, 15, 75);
        add_character(&mut state, OWNER);

        let (outcome, events) = run(&AttackAction::melee(), &mut state, OWNER).unwrap();

        assert_eq!(outcome.damage, 10);
        assert_eq!(outcome.boss_hp, 190);
        assert_eq!(outcome.kill_sequence, None);
        assert_eq!(state.character(&Identity::new(OWNER)).unwrap().hp, 85);
        assert_eq!(
            events,
            vec![GameEvent::AttackRound {
                boss_instance: BossInstanceId(1),
                boss_hp: 190,
                damage: 10,
                attacker: Identity::new(OWNER),
                boss_damage: 15,
            }]
        );
    }

    #[test]
    fn killing_blow_records_kill_and_keeps_boss_fields() {
        let mut state = with_boss(5, 15, 75);
        add_character(&mut state, OWNER);

        let (outcome, events) = run(&AttackAction::melee(), &mut state, OWNER).unwrap();

        assert_eq!(outcome.boss_hp, 0);
        assert_eq!(outcome.kill_sequence, Some(KillSequence(1)));
        assert!(
            state
                .rewards
                .has_kill(&KillKey::new(Identity::new(OWNER), BossInstanceId(1)))
        );
        assert!(events.contains(&GameEvent::BossKilled {
            boss_instance: BossInstanceId(1),
            kill_sequence: KillSequence(1),
            killer: Identity::new(OWNER),
        }));

        let boss = state.active_boss();
        assert_eq!(boss.hp, 0);
        assert_eq!(boss.damage, 15);
        assert_eq!(boss.reward, 75);
        assert_eq!(boss.name, "Punk");
    }

    #[test]
    fn lethal_retaliation_kills_character_without_negative_hp() {
        let mut state = with_boss(5_000, 2_000, 75);
        add_character(&mut state, OTHER);

        let (outcome, events) = run(&AttackAction::melee(), &mut state, OTHER).unwrap();

        let character = state.character(&Identity::new(OTHER)).unwrap();
        assert!(outcome.attacker_died);
        assert_eq!(character.hp, 0);
        assert!(character.is_dead());
        assert_eq!(
            events.last(),
            Some(&GameEvent::CharacterDied {
                owner: Identity::new(OTHER)
            })
        );
    }

    #[test]
    fn dead_character_cannot_attack() {
        let mut state = with_boss(5_000, 2_000, 75);
        add_character(&mut state, OTHER);
        run(&AttackAction::melee(), &mut state, OTHER).unwrap();

        let result = run(&AttackAction::melee(), &mut state, OTHER);
        assert!(matches!(result, Err(ActionError::CharacterDead { .. })));
    }

    #[test]
    fn defeated_boss_cannot_be_attacked() {
        let mut state = with_boss(5, 1, 75);
        add_character(&mut state, OWNER);
        run(&AttackAction::melee(), &mut state, OWNER).unwrap();

        let result = run(&AttackAction::melee(), &mut state, OWNER);
        assert!(matches!(
            result,
            Err(ActionError::BossDefeated {
                boss_instance: BossInstanceId(1)
            })
        ));
    }

    #[test]
    fn attack_without_boss_fails() {
        let mut state = state();
        add_character(&mut state, OWNER);

        let result = run(&AttackAction::melee(), &mut state, OWNER);
        assert!(matches!(result, Err(ActionError::NoActiveBoss)));
    }

    #[test]
    fn spell_requires_level_two_regardless_of_boss() {
        // No boss at all.
        let mut state = state();
        add_character(&mut state, OWNER);
        let result = run(&AttackAction::spell(), &mut state, OWNER);
        assert!(matches!(
            result,
            Err(ActionError::InsufficientLevel {
                level: 1,
                required: 2
            })
        ));

        // Defeated boss.
        let mut state = with_boss(5, 1, 75);
        add_character(&mut state, OWNER);
        add_character(&mut state, OTHER);
        run(&AttackAction::melee(), &mut state, OTHER).unwrap();
        let result = run(&AttackAction::spell(), &mut state, OWNER);
        assert!(matches!(result, Err(ActionError::InsufficientLevel { .. })));
    }

    #[test]
    fn spell_deals_double_damage() {
        let mut state = with_boss(10, 15, 75);
        add_character(&mut state, OWNER);
        level_up(&mut state, OWNER);

        let (outcome, events) = run(&AttackAction::spell(), &mut state, OWNER).unwrap();

        assert_eq!(outcome.damage, 20);
        assert_eq!(outcome.boss_hp, 0);
        assert_eq!(outcome.kill_sequence, Some(KillSequence(1)));
        assert!(matches!(
            events.first(),
            Some(GameEvent::AttackRound { damage: 20, .. })
        ));
    }
}
