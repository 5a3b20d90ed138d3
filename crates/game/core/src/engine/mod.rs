//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Each
//! call to [`GameEngine::execute`] is atomic: the action runs against a
//! working copy, and the copy replaces the live state only when every phase
//! succeeded. A rejected action leaves no trace, not even a nonce bump.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
#[cfg(test)]
pub(crate) use transition::drive_transition;

use crate::action::{Action, ActionResult};
use crate::config::GameConfig;
use crate::env::{CallContext, GameEnv};
use crate::event::{EventSink, GameEvent};
use crate::state::GameState;

/// Complete outcome of a committed action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State nonce after the commit.
    pub nonce: u64,
    pub action_result: ActionResult,
    /// Notifications in emission order.
    pub events: Vec<GameEvent>,
}

/// Game engine that validates and commits actions against a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action and commits it if all transition phases succeed.
    ///
    /// The caller's capability is resolved against the state as it was
    /// before the action.
    pub fn execute(
        &mut self,
        config: &GameConfig,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let call = CallContext::resolve(&*self.state, &action.caller);
        let env = GameEnv::new(config, &call);

        let mut working = self.state.clone();
        let mut events = EventSink::new();
        let action_result =
            transition::execute_transition(&action.kind, &mut working, &env, &mut events)?;

        working.nonce += 1;
        *self.state = working;

        Ok(ExecutionOutcome {
            nonce: self.state.nonce,
            action_result,
            events: events.into_vec(),
        })
    }
}
