//! Read-only subcommands.

use anyhow::{Result, bail};
use clap::Parser;

use raid_core::{Identity, TokenId};
use raid_runtime::{Runtime, RuntimeHandle};

use crate::config::{CliConfig, OutputFormat};
use crate::{output, session};

/// Runs `query` against the latest state and shuts the runtime down again.
async fn with_handle<T, F, Fut>(config: &CliConfig, query: F) -> Result<T>
where
    F: FnOnce(RuntimeHandle) -> Fut,
    Fut: Future<Output = raid_runtime::Result<T>>,
{
    let runtime: Runtime = session::open(config).await?;
    let result = query(runtime.handle()).await;
    runtime.shutdown().await?;
    Ok(result?)
}

fn print_value<T>(format: OutputFormat, label: &str, value: T) -> Result<()>
where
    T: serde::Serialize + std::fmt::Display,
{
    if format == OutputFormat::Json {
        return output::print_json(&value);
    }
    println!("{label}: {value}");
    Ok(())
}

pub async fn boss(config: &CliConfig) -> Result<()> {
    let boss = with_handle(config, |handle| async move { handle.active_boss().await }).await?;
    output::print_boss(config.output, &boss)
}

pub async fn owner(config: &CliConfig) -> Result<()> {
    let owner = with_handle(config, |handle| async move { handle.owner().await }).await?;
    print_value(config.output, "operator", owner)
}

pub async fn root(config: &CliConfig) -> Result<()> {
    let root = with_handle(config, |handle| async move { handle.state_root().await }).await?;
    print_value(config.output, "state root", root)
}

/// Show a character (defaults to the caller's)
#[derive(Parser)]
pub struct CharacterQuery {
    #[arg(value_name = "OWNER")]
    owner: Option<String>,
}

impl CharacterQuery {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let owner = match self.owner {
            Some(owner) => Identity::new(owner),
            None => session::caller(config)?,
        };
        let query = owner.clone();
        let character =
            with_handle(config, |handle| async move { handle.character(query).await }).await?;

        match character {
            Some(character) => output::print_character(config.output, &character),
            None => bail!("{owner} has no character"),
        }
    }
}

/// Show a reward token
#[derive(Parser)]
pub struct TokenQuery {
    #[arg(value_name = "TOKEN_ID")]
    id: u64,
}

impl TokenQuery {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let id = TokenId(self.id);
        let token = with_handle(config, |handle| async move { handle.token(id).await }).await?;

        match token {
            Some(token) => output::print_token(config.output, &token),
            None => bail!("token #{id} does not exist"),
        }
    }
}

/// Number of reward tokens held by an identity
#[derive(Parser)]
pub struct Balance {
    /// Holder (defaults to the caller)
    #[arg(value_name = "OWNER")]
    owner: Option<String>,
}

impl Balance {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let owner = match self.owner {
            Some(owner) => Identity::new(owner),
            None => session::caller(config)?,
        };
        let label = format!("balance of {owner}");
        let balance =
            with_handle(config, |handle| async move { handle.balance_of(owner) }).await?;
        print_value(config.output, &label, balance)
    }
}

/// Holder of a reward token
#[derive(Parser)]
pub struct OwnerOf {
    #[arg(value_name = "TOKEN_ID")]
    id: u64,
}

impl OwnerOf {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let id = TokenId(self.id);
        let owner = with_handle(config, |handle| async move { handle.owner_of(id) }).await?;

        match owner {
            Some(owner) => print_value(config.output, &format!("owner of #{id}"), owner),
            None => bail!("token #{id} does not exist"),
        }
    }
}
