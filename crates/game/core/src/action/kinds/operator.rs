use crate::action::{ActionError, ActionTransition};
use crate::env::{Capability, GameEnv};
use crate::event::{EventSink, GameEvent};
use crate::state::{GameState, Identity};

/// Hands the operator role to another identity. Operator only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferOperatorAction {
    pub new_operator: Identity,
}

impl ActionTransition for TransferOperatorAction {
    type Result = ();

    fn required_capability(&self) -> Capability {
        Capability::Operator
    }

    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        if self.new_operator.is_empty() {
            return Err(ActionError::InvalidOperator);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        events: &mut EventSink,
    ) -> Result<Self::Result, ActionError> {
        let previous = std::mem::replace(&mut state.operator, self.new_operator.clone());
        events.emit(GameEvent::OperatorTransferred {
            previous,
            new: self.new_operator.clone(),
        });
        Ok(())
    }
}
