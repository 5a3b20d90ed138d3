use crate::state::{GameState, Identity};

/// What a caller is allowed to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// Any identity: character, combat, healing and claim actions.
    Player,
    /// The operator: additionally manages bosses and grants experience.
    Operator,
}

impl Capability {
    /// Returns true if a holder of `self` may perform an action requiring `required`.
    pub const fn allows(self, required: Capability) -> bool {
        match required {
            Capability::Player => true,
            Capability::Operator => matches!(self, Capability::Operator),
        }
    }
}

/// Caller identity together with the capability resolved for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Identity,
    pub capability: Capability,
}

impl CallContext {
    /// Resolves the caller's capability against the current operator.
    pub fn resolve(state: &GameState, caller: &Identity) -> Self {
        let capability = if state.is_operator(caller) {
            Capability::Operator
        } else {
            Capability::Player
        };

        Self {
            caller: caller.clone(),
            capability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_allows_everything() {
        assert!(Capability::Operator.allows(Capability::Operator));
        assert!(Capability::Operator.allows(Capability::Player));
        assert!(Capability::Player.allows(Capability::Player));
        assert!(!Capability::Player.allows(Capability::Operator));
    }

    #[test]
    fn resolves_operator_from_state() {
        let state = GameState::new(Identity::new("0xowner"));

        let owner = CallContext::resolve(&state, &Identity::new("0xOWNER"));
        let other = CallContext::resolve(&state, &Identity::new("0xother"));

        assert_eq!(owner.capability, Capability::Operator);
        assert_eq!(other.capability, Capability::Player);
    }
}
