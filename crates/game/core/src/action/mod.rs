//! Action domain.
//!
//! An [`Action`] pairs the caller identity with an [`ActionKind`]. Each kind
//! is a transition type implementing [`ActionTransition`]; the engine drives
//! it through `pre_validate → apply → post_validate` on a working copy of the
//! state and commits only if all phases succeed.
//!
//! # Module Structure
//!
//! - `error`: rejection taxonomy (`ActionError`, `ClaimRejection`)
//! - `kinds`: concrete transitions (boss, character, combat, heal, reward, operator)

pub mod error;
pub mod kinds;

pub use error::{ActionError, ClaimRejection};
pub use kinds::{
    AttackAction, AttackOutcome, AttackStyle, ClaimRewardsAction, CreateCharacterAction,
    CreateOrUpdateBossAction, GrantExperienceAction, HealAction, TransferOperatorAction,
};

use crate::env::{Capability, GameEnv};
use crate::event::EventSink;
use crate::state::{BossInstanceId, BossKey, GameState, Identity, LevelChange, RewardToken};

/// Defines how a concrete action variant mutates game state.
///
/// The engine checks [`ActionTransition::required_capability`] before
/// `pre_validate`. `apply` may leave the state half-mutated when it fails;
/// the engine discards the working copy in that case.
pub trait ActionTransition {
    type Result;

    /// Capability the caller must hold.
    fn required_capability(&self) -> Capability {
        Capability::Player
    }

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the game state and emitting notifications.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut EventSink,
    ) -> Result<Self::Result, ActionError>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        Ok(())
    }
}

/// All request kinds understood by the engine.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    CreateOrUpdateBoss(CreateOrUpdateBossAction),
    CreateCharacter(CreateCharacterAction),
    GrantExperience(GrantExperienceAction),
    Attack(AttackAction),
    Heal(HealAction),
    ClaimRewards(ClaimRewardsAction),
    TransferOperator(TransferOperatorAction),
}

/// A caller-identified request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub caller: Identity,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(caller: impl Into<Identity>, kind: ActionKind) -> Self {
        Self {
            caller: caller.into(),
            kind,
        }
    }

    pub fn create_or_update_boss(
        caller: impl Into<Identity>,
        key: impl Into<String>,
        name: impl Into<String>,
        hp: u64,
        damage: u64,
        reward: u64,
    ) -> Self {
        Self::new(
            caller,
            ActionKind::CreateOrUpdateBoss(CreateOrUpdateBossAction {
                key: BossKey::new(key),
                name: name.into(),
                hp,
                damage,
                reward,
            }),
        )
    }

    pub fn create_character(caller: impl Into<Identity>, name: impl Into<String>) -> Self {
        Self::new(
            caller,
            ActionKind::CreateCharacter(CreateCharacterAction { name: name.into() }),
        )
    }

    pub fn give_xp(caller: impl Into<Identity>, target: impl Into<Identity>, amount: u64) -> Self {
        Self::new(
            caller,
            ActionKind::GrantExperience(GrantExperienceAction {
                target: target.into(),
                amount,
            }),
        )
    }

    pub fn attack(caller: impl Into<Identity>) -> Self {
        Self::new(caller, ActionKind::Attack(AttackAction::melee()))
    }

    pub fn cast_spell(caller: impl Into<Identity>) -> Self {
        Self::new(caller, ActionKind::Attack(AttackAction::spell()))
    }

    pub fn heal(caller: impl Into<Identity>, target: impl Into<Identity>) -> Self {
        Self::new(
            caller,
            ActionKind::Heal(HealAction {
                target: target.into(),
            }),
        )
    }

    pub fn claim_rewards(caller: impl Into<Identity>, boss_instance: BossInstanceId) -> Self {
        Self::new(
            caller,
            ActionKind::ClaimRewards(ClaimRewardsAction { boss_instance }),
        )
    }

    pub fn transfer_operator(
        caller: impl Into<Identity>,
        new_operator: impl Into<Identity>,
    ) -> Self {
        Self::new(
            caller,
            ActionKind::TransferOperator(TransferOperatorAction {
                new_operator: new_operator.into(),
            }),
        )
    }

    /// Snake-case name of the action kind, for logs and rejection reports.
    pub fn name(&self) -> &'static str {
        (&self.kind).into()
    }
}

/// Action-specific result returned by a committed transition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    BossCreated(BossInstanceId),
    CharacterCreated,
    ExperienceGranted(LevelChange),
    Attack(AttackOutcome),
    Healed,
    RewardClaimed(RewardToken),
    OperatorTransferred,
}
