//! Notifications emitted by committed transitions.
//!
//! Transitions push events into an [`EventSink`]; the engine hands them back
//! only when the whole action committed, so observers never see events of a
//! rejected request.

use crate::state::{BossInstanceId, BossKey, Identity, KillSequence, TokenId};

/// Structured notification describing a state change.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GameEvent {
    BossCreatedOrUpdated {
        boss_key: BossKey,
        boss_instance: BossInstanceId,
    },
    CharacterCreated {
        owner: Identity,
    },
    ExperienceGranted {
        owner: Identity,
        amount: u64,
        experience: u64,
        level: u32,
    },
    LevelUp {
        owner: Identity,
        level: u32,
    },
    AttackRound {
        boss_instance: BossInstanceId,
        boss_hp: u64,
        damage: u64,
        attacker: Identity,
        boss_damage: u64,
    },
    BossKilled {
        boss_instance: BossInstanceId,
        kill_sequence: KillSequence,
        killer: Identity,
    },
    CharacterDied {
        owner: Identity,
    },
    CharacterRevived {
        healer: Identity,
        healed: Identity,
    },
    RewardGranted {
        owner: Identity,
        token_id: TokenId,
        reward: u64,
        kill_sequence: KillSequence,
    },
    OperatorTransferred {
        previous: Identity,
        new: Identity,
    },
}

impl GameEvent {
    /// Snake-case event name.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Ordered buffer of events produced while executing one action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSink {
    events: Vec<GameEvent>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn into_vec(self) -> Vec<GameEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_snake_case() {
        let event = GameEvent::BossCreatedOrUpdated {
            boss_key: BossKey::new("0x1"),
            boss_instance: BossInstanceId(1),
        };
        assert_eq!(event.name(), "boss_created_or_updated");
    }

    #[test]
    fn sink_preserves_emission_order() {
        let mut sink = EventSink::new();
        sink.emit(GameEvent::CharacterCreated {
            owner: Identity::new("0xa"),
        });
        sink.emit(GameEvent::CharacterDied {
            owner: Identity::new("0xa"),
        });

        let names: Vec<_> = sink.events().iter().map(GameEvent::name).collect();
        assert_eq!(names, ["character_created", "character_died"]);
    }
}
