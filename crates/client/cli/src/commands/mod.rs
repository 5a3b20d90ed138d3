//! Subcommands of the `raid` binary.

mod actions;
mod init;
mod query;

use anyhow::Result;
use clap::Subcommand;

use crate::config::CliConfig;

pub use actions::{Claim, CreateBoss, CreateCharacter, GiveXp, Heal, TransferOperator};
pub use init::Init;
pub use query::{Balance, CharacterQuery, OwnerOf, TokenQuery};

#[derive(Subcommand)]
pub enum Command {
    /// Create a fresh raid administered by an operator
    Init(Init),

    /// Create a boss and make it the active one (operator only)
    CreateBoss(CreateBoss),

    /// Create the caller's character
    CreateCharacter(CreateCharacter),

    /// Grant experience to a character (operator only)
    GiveXp(GiveXp),

    /// Attack the active boss
    Attack,

    /// Cast a spell on the active boss (level 2 and above)
    CastSpell,

    /// Revive a dead character
    Heal(Heal),

    /// Claim the reward for a boss instance the caller killed
    Claim(Claim),

    /// Hand the operator role to another identity (operator only)
    TransferOperator(TransferOperator),

    /// Show the active boss
    Boss,

    /// Show a character (defaults to the caller's)
    Character(CharacterQuery),

    /// Show a reward token
    Token(TokenQuery),

    /// Number of reward tokens held by an identity
    Balance(Balance),

    /// Holder of a reward token
    OwnerOf(OwnerOf),

    /// Current operator identity
    Owner,

    /// Hex state root of the latest committed state
    Root,
}

impl Command {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        match self {
            Command::Init(cmd) => cmd.execute(config),
            Command::CreateBoss(cmd) => cmd.execute(config).await,
            Command::CreateCharacter(cmd) => cmd.execute(config).await,
            Command::GiveXp(cmd) => cmd.execute(config).await,
            Command::Attack => actions::attack(config).await,
            Command::CastSpell => actions::cast_spell(config).await,
            Command::Heal(cmd) => cmd.execute(config).await,
            Command::Claim(cmd) => cmd.execute(config).await,
            Command::TransferOperator(cmd) => cmd.execute(config).await,
            Command::Boss => query::boss(config).await,
            Command::Character(cmd) => cmd.execute(config).await,
            Command::Token(cmd) => cmd.execute(config).await,
            Command::Balance(cmd) => cmd.execute(config).await,
            Command::OwnerOf(cmd) => cmd.execute(config).await,
            Command::Owner => query::owner(config).await,
            Command::Root => query::root(config).await,
        }
    }
}
