//! Deterministic rules of the boss raid.
//!
//! `raid-core` owns the canonical state (boss registry, character roster,
//! reward book) and the transitions that mutate it. Every mutation flows
//! through [`engine::GameEngine`], which validates, applies and commits an
//! [`Action`] atomically and hands back the emitted [`GameEvent`]s. The crate
//! has no I/O; persistence, ordering and notification fan-out live in
//! `raid-runtime`.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use action::{
    Action, ActionError, ActionKind, ActionResult, ActionTransition, AttackAction, AttackOutcome,
    AttackStyle, ClaimRejection, ClaimRewardsAction, CreateCharacterAction,
    CreateOrUpdateBossAction, GrantExperienceAction, HealAction, TransferOperatorAction,
};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError,
};
pub use env::{CallContext, Capability, GameEnv};
pub use error::{ErrorSeverity, GameError};
pub use event::{EventSink, GameEvent};
pub use state::{
    BossInstanceId, BossKey, BossState, BossView, CharacterState, Counter, GameState, Identity,
    KillKey, KillRecord, KillSequence, LevelChange, LifeStatus, RewardToken, StateError, TokenId,
};
