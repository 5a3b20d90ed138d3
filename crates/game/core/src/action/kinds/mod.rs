mod boss;
mod character;
mod combat;
mod heal;
mod operator;
mod reward;

pub use boss::CreateOrUpdateBossAction;
pub use character::{CreateCharacterAction, GrantExperienceAction};
pub use combat::{AttackAction, AttackOutcome, AttackStyle};
pub use heal::HealAction;
pub use operator::TransferOperatorAction;
pub use reward::ClaimRewardsAction;
