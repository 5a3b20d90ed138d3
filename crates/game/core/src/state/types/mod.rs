pub mod boss;
pub mod character;
pub mod identity;
pub mod reward;

// Re-export identity and sequence types
pub use identity::{BossInstanceId, BossKey, Identity, KillSequence, TokenId};

// Re-export boss types
pub use boss::{BossRegistry, BossState, BossView};

// Re-export character types
pub use character::{CharacterState, CharactersState, LevelChange, LifeStatus};

// Re-export reward types
pub use reward::{KillKey, KillRecord, RewardToken, RewardsState};
