//! State-changing subcommands.

use anyhow::{Result, bail};
use clap::Parser;

use raid_core::{Action, BossInstanceId, Identity};
use raid_runtime::{RepositoryError, RuntimeError};

use crate::config::CliConfig;
use crate::{output, session};

/// Submits one action for the configured caller and prints the outcome.
async fn submit(config: &CliConfig, build: impl FnOnce(Identity) -> Action) -> Result<()> {
    let action = build(session::caller(config)?);
    let runtime = session::open(config).await?;
    let handle = runtime.handle();

    let result = handle.execute(action).await;
    drop(handle);
    runtime.shutdown().await?;

    match result {
        Ok(outcome) => output::print_outcome(config.output, &outcome),
        Err(RuntimeError::Repository(RepositoryError::Conflict { nonce })) => bail!(
            "Another command committed state {} first; nothing was applied\n\nHint: run the command again",
            nonce
        ),
        Err(error) => Err(error.into()),
    }
}

/// Create a boss and make it the active one (operator only)
#[derive(Parser)]
pub struct CreateBoss {
    /// Boss key (e.g. the NFT contract address it stands for)
    #[arg(value_name = "KEY")]
    key: String,

    #[arg(value_name = "NAME")]
    name: String,

    /// Starting hit points
    #[arg(long)]
    hp: u64,

    /// Damage dealt back to each attacker
    #[arg(long)]
    damage: u64,

    /// Reward pool granted to the killer
    #[arg(long)]
    reward: u64,
}

impl CreateBoss {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        submit(config, |caller| {
            Action::create_or_update_boss(
                caller,
                self.key,
                self.name,
                self.hp,
                self.damage,
                self.reward,
            )
        })
        .await
    }
}

/// Create the caller's character
#[derive(Parser)]
pub struct CreateCharacter {
    #[arg(value_name = "NAME")]
    name: String,
}

impl CreateCharacter {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        submit(config, |caller| Action::create_character(caller, self.name)).await
    }
}

/// Grant experience to a character (operator only)
#[derive(Parser)]
pub struct GiveXp {
    #[arg(value_name = "TARGET")]
    target: String,

    #[arg(value_name = "AMOUNT")]
    amount: u64,
}

impl GiveXp {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        submit(config, |caller| {
            Action::give_xp(caller, self.target, self.amount)
        })
        .await
    }
}

pub async fn attack(config: &CliConfig) -> Result<()> {
    submit(config, Action::attack).await
}

pub async fn cast_spell(config: &CliConfig) -> Result<()> {
    submit(config, Action::cast_spell).await
}

/// Revive a dead character
#[derive(Parser)]
pub struct Heal {
    #[arg(value_name = "TARGET")]
    target: String,
}

impl Heal {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        submit(config, |caller| Action::heal(caller, self.target)).await
    }
}

/// Claim the reward for a boss instance the caller killed
#[derive(Parser)]
pub struct Claim {
    /// Boss instance id
    #[arg(value_name = "INSTANCE")]
    boss_instance: u64,
}

impl Claim {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let instance = BossInstanceId(self.boss_instance);
        submit(config, |caller| Action::claim_rewards(caller, instance)).await
    }
}

/// Hand the operator role to another identity (operator only)
#[derive(Parser)]
pub struct TransferOperator {
    #[arg(value_name = "NEW_OPERATOR")]
    new_operator: String,
}

impl TransferOperator {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        submit(config, |caller| {
            Action::transfer_operator(caller, self.new_operator)
        })
        .await
    }
}
