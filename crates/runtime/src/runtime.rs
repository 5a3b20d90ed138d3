//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command and event
//! channels, and exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use raid_core::{GameConfig, GameState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::ledger::{InMemoryTokenLedger, TokenLedger};
use crate::repository::{InMemoryStateRepo, StateRepository};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Running raid host.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// The worker drains queued commands and stops once every outstanding
    /// handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    repository: Option<Arc<dyn StateRepository>>,
    ledger: Option<Arc<dyn TokenLedger>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            repository: None,
            ledger: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from `state` instead of the repository's latest state.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Persist committed states here (default: in memory).
    pub fn repository(mut self, repository: Arc<dyn StateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Mirror minted tokens here (default: in-memory ledger seeded from state).
    pub fn ledger(mut self, ledger: Arc<dyn TokenLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// An explicit initial state is saved to the repository before the
    /// worker starts; otherwise the latest stored state is resumed.
    pub async fn build(self) -> Result<Runtime> {
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemoryStateRepo::new()));

        let initial_state = match self.state {
            Some(state) => {
                repository.save(state.nonce, &state)?;
                state
            }
            None => repository.latest()?.ok_or(RuntimeError::MissingState)?,
        };

        let ledger = self
            .ledger
            .unwrap_or_else(|| Arc::new(InMemoryTokenLedger::from_state(&initial_state)));

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone(), Arc::clone(&ledger));

        let sim_worker = SimulationWorker::new(
            initial_state,
            self.config.game_config,
            repository,
            ledger,
            command_rx,
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
