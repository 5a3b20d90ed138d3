//! Simulation worker that owns the authoritative [`raid_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], executes actions via
//! [`raid_core::GameEngine`], persists the result and publishes events to the
//! [`EventBus`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use raid_core::{
    Action, ActionResult, ExecutionOutcome, GameConfig, GameEngine, GameError, GameState,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, Notification, Rejection};
use crate::ledger::TokenLedger;
use crate::repository::StateRepository;
use crate::utils::hash;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Execute an action and reply once it is committed or rejected.
    Execute {
        action: Action,
        reply: oneshot::Sender<Result<ExecutionOutcome>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes commands one at a time.
pub struct SimulationWorker {
    state: GameState,
    config: GameConfig,
    repository: Arc<dyn StateRepository>,
    ledger: Arc<dyn TokenLedger>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        config: GameConfig,
        repository: Arc<dyn StateRepository>,
        ledger: Arc<dyn TokenLedger>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            "SimulationWorker initialized at nonce {} (operator: {}, characters: {}, root: {})",
            state.nonce,
            state.operator,
            state.characters.len(),
            hash::short_state_root(&state)
        );

        Self {
            state,
            config,
            repository,
            ledger,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends when every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!("SimulationWorker stopped at nonce {}", self.state.nonce);
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { action, reply } => {
                let result = self.execute_action(action);
                if reply.send(result).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Executes, persists and commits an action, then publishes its events.
    ///
    /// The live state is replaced only after the repository accepted the new
    /// state, so a failed save behaves like a rejection.
    fn execute_action(&mut self, action: Action) -> Result<ExecutionOutcome> {
        let mut working = self.state.clone();

        let outcome = match GameEngine::new(&mut working).execute(&self.config, &action) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    action = action.name(),
                    caller = %action.caller,
                    code = error.error_code(),
                    phase = error.phase().as_str(),
                    reason = ?error.error().claim_rejection(),
                    "Action rejected: {}",
                    error.error()
                );
                self.event_bus.publish(Event::Rejection(Rejection::new(
                    self.state.nonce,
                    action,
                    &error,
                )));
                return Err(RuntimeError::Rejected(error));
            }
        };

        if let Err(error) = self.repository.save(outcome.nonce, &working) {
            error!(
                action = action.name(),
                nonce = outcome.nonce,
                "Failed to persist state, discarding commit: {}",
                error
            );
            return Err(error.into());
        }

        self.state = working;
        debug!(
            action = action.name(),
            caller = %action.caller,
            nonce = outcome.nonce,
            root = %hash::short_state_root(&self.state),
            "Action committed"
        );

        if let ActionResult::RewardClaimed(token) = &outcome.action_result
            && let Err(error) = self.ledger.mint(token)
        {
            // The state already owns the token; the ledger can be rebuilt from it.
            error!("Failed to mirror token {} into ledger: {}", token.id, error);
        }

        for event in &outcome.events {
            self.event_bus.publish(Event::Notification(Notification {
                nonce: outcome.nonce,
                event: event.clone(),
            }));
        }

        Ok(outcome)
    }
}
