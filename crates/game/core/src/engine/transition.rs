//! Action transition dispatch and execution logic.

use crate::action::{ActionError, ActionKind, ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::event::EventSink;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Drives a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - capability check, then preconditions before mutation
/// 2. `apply` - mutate the state and emit notifications
/// 3. `post_validate` - verify postconditions after mutation
///
/// The caller owns rollback: on error `state` and `events` may be partially
/// written and must be discarded.
#[inline]
pub(crate) fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    events: &mut EventSink,
) -> Result<T::Result, TransitionPhaseError<ActionError>>
where
    T: ActionTransition,
{
    let pre = |error: ActionError| TransitionPhaseError::new(TransitionPhase::PreValidate, error);

    let call = env.call();
    let required = transition.required_capability();
    if !call.capability.allows(required) {
        return Err(pre(ActionError::Unauthorized {
            caller: call.caller.clone(),
            required,
        }));
    }

    transition.pre_validate(state, env).map_err(pre)?;

    let result = transition
        .apply(state, env, events)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes an action kind to its transition and wraps the result.
pub(super) fn execute_transition(
    kind: &ActionKind,
    state: &mut GameState,
    env: &GameEnv<'_>,
    events: &mut EventSink,
) -> Result<ActionResult, ExecuteError> {
    match kind {
        ActionKind::CreateOrUpdateBoss(transition) => {
            let instance = drive_transition(transition, state, env, events)
                .map_err(ExecuteError::CreateOrUpdateBoss)?;
            Ok(ActionResult::BossCreated(instance))
        }
        ActionKind::CreateCharacter(transition) => {
            drive_transition(transition, state, env, events)
                .map_err(ExecuteError::CreateCharacter)?;
            Ok(ActionResult::CharacterCreated)
        }
        ActionKind::GrantExperience(transition) => {
            let change = drive_transition(transition, state, env, events)
                .map_err(ExecuteError::GrantExperience)?;
            Ok(ActionResult::ExperienceGranted(change))
        }
        ActionKind::Attack(transition) => {
            let outcome =
                drive_transition(transition, state, env, events).map_err(ExecuteError::Attack)?;
            Ok(ActionResult::Attack(outcome))
        }
        ActionKind::Heal(transition) => {
            drive_transition(transition, state, env, events).map_err(ExecuteError::Heal)?;
            Ok(ActionResult::Healed)
        }
        ActionKind::ClaimRewards(transition) => {
            let token = drive_transition(transition, state, env, events)
                .map_err(ExecuteError::ClaimRewards)?;
            Ok(ActionResult::RewardClaimed(token))
        }
        ActionKind::TransferOperator(transition) => {
            drive_transition(transition, state, env, events)
                .map_err(ExecuteError::TransferOperator)?;
            Ok(ActionResult::OperatorTransferred)
        }
    }
}
