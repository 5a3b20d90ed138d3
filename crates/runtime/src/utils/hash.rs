//! Hashing utilities for game state.

use raid_core::{GameState, StateError};

/// Hex-encoded SHA-256 state root.
pub fn state_root_hex(state: &GameState) -> Result<String, StateError> {
    Ok(hex::encode(state.state_root()?))
}

/// First 8 bytes of the state root, for compact logging.
pub fn short_state_root(state: &GameState) -> String {
    match state.state_root() {
        Ok(root) => hex::encode(&root[..8]),
        Err(_) => "<unencodable>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raid_core::Identity;

    #[test]
    fn root_is_stable_and_hex() {
        let state = GameState::new(Identity::new("0xowner"));
        let first = state_root_hex(&state).unwrap();
        let second = state_root_hex(&state).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(short_state_root(&state), first[..16]);
    }
}
