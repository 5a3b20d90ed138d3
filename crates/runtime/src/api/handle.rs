//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers one async method per
//! raid operation, plus read-only queries and topic subscriptions.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use raid_core::{
    Action, ActionResult, AttackOutcome, BossInstanceId, BossView, CharacterState,
    ExecutionOutcome, GameState, Identity, LevelChange, RewardToken, TokenId,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::ledger::TokenLedger;
use crate::utils::hash;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    ledger: Arc<dyn TokenLedger>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        ledger: Arc<dyn TokenLedger>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            ledger,
        }
    }

    /// Submit an action and wait until it is committed or rejected.
    pub async fn execute(&self, action: Action) -> Result<ExecutionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Execute {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Creates a boss and makes it the active one. Operator only.
    pub async fn create_or_update_boss(
        &self,
        caller: impl Into<Identity>,
        key: impl Into<String>,
        name: impl Into<String>,
        hp: u64,
        damage: u64,
        reward: u64,
    ) -> Result<BossInstanceId> {
        let action = Action::create_or_update_boss(caller, key, name, hp, damage, reward);
        match self.execute(action).await?.action_result {
            ActionResult::BossCreated(instance) => Ok(instance),
            _ => Err(RuntimeError::UnexpectedResult {
                action: "create_or_update_boss",
            }),
        }
    }

    pub async fn create_character(
        &self,
        caller: impl Into<Identity>,
        name: impl Into<String>,
    ) -> Result<()> {
        self.execute(Action::create_character(caller, name)).await?;
        Ok(())
    }

    /// Grants experience to `target`. Operator only.
    pub async fn give_xp(
        &self,
        caller: impl Into<Identity>,
        target: impl Into<Identity>,
        amount: u64,
    ) -> Result<LevelChange> {
        match self.execute(Action::give_xp(caller, target, amount)).await?.action_result {
            ActionResult::ExperienceGranted(change) => Ok(change),
            _ => Err(RuntimeError::UnexpectedResult {
                action: "grant_experience",
            }),
        }
    }

    /// One melee round against the active boss.
    pub async fn attack(&self, caller: impl Into<Identity>) -> Result<AttackOutcome> {
        self.execute_attack(Action::attack(caller)).await
    }

    /// One spell round against the active boss. Requires level 2.
    pub async fn cast_spell(&self, caller: impl Into<Identity>) -> Result<AttackOutcome> {
        self.execute_attack(Action::cast_spell(caller)).await
    }

    async fn execute_attack(&self, action: Action) -> Result<AttackOutcome> {
        match self.execute(action).await?.action_result {
            ActionResult::Attack(outcome) => Ok(outcome),
            _ => Err(RuntimeError::UnexpectedResult { action: "attack" }),
        }
    }

    pub async fn heal(
        &self,
        caller: impl Into<Identity>,
        target: impl Into<Identity>,
    ) -> Result<()> {
        self.execute(Action::heal(caller, target)).await?;
        Ok(())
    }

    pub async fn claim_rewards(
        &self,
        caller: impl Into<Identity>,
        boss_instance: BossInstanceId,
    ) -> Result<RewardToken> {
        match self
            .execute(Action::claim_rewards(caller, boss_instance))
            .await?
            .action_result
        {
            ActionResult::RewardClaimed(token) => Ok(token),
            _ => Err(RuntimeError::UnexpectedResult {
                action: "claim_rewards",
            }),
        }
    }

    /// Hands the operator role to `new_operator`. Operator only.
    pub async fn transfer_operator(
        &self,
        caller: impl Into<Identity>,
        new_operator: impl Into<Identity>,
    ) -> Result<()> {
        self.execute(Action::transfer_operator(caller, new_operator))
            .await?;
        Ok(())
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Active boss, or the zeroed sentinel when none exists.
    pub async fn active_boss(&self) -> Result<BossView> {
        Ok(self.query_state().await?.active_boss())
    }

    pub async fn character(&self, owner: impl Into<Identity>) -> Result<Option<CharacterState>> {
        let owner = owner.into();
        Ok(self.query_state().await?.character(&owner).cloned())
    }

    pub async fn token(&self, id: TokenId) -> Result<Option<RewardToken>> {
        Ok(self.query_state().await?.token(id).cloned())
    }

    /// Current operator identity.
    pub async fn owner(&self) -> Result<Identity> {
        Ok(self.query_state().await?.operator)
    }

    /// Hex-encoded state root of the latest committed state.
    pub async fn state_root(&self) -> Result<String> {
        let state = self.query_state().await?;
        Ok(hash::state_root_hex(&state)?)
    }

    /// Token balance according to the ownership ledger.
    pub fn balance_of(&self, owner: impl Into<Identity>) -> Result<usize> {
        Ok(self.ledger.balance_of(&owner.into())?)
    }

    /// Token owner according to the ownership ledger.
    pub fn owner_of(&self, id: TokenId) -> Result<Option<Identity>> {
        Ok(self.ledger.owner_of(id)?)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Notifications` - game events of committed actions
    /// - `Topic::Rejections` - refused requests
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
