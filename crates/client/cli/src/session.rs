//! Opens the runtime over a save directory.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use raid_core::Identity;
use raid_runtime::{FileStateRepository, Runtime, RuntimeError};

use crate::config::CliConfig;

pub fn repository(config: &CliConfig) -> Result<FileStateRepository> {
    let dir = config.states_dir();
    FileStateRepository::new(&dir)
        .with_context(|| format!("Failed to open save directory {}", dir.display()))
}

/// Resumes the latest committed state in the save directory.
pub async fn open(config: &CliConfig) -> Result<Runtime> {
    let repository = repository(config)?;

    match Runtime::builder()
        .config(config.runtime.clone())
        .repository(Arc::new(repository))
        .build()
        .await
    {
        Ok(runtime) => Ok(runtime),
        Err(RuntimeError::MissingState) => bail!(
            "No raid found in {}\n\nHint: run `raid init --operator <IDENTITY>` first",
            config.save_dir.display()
        ),
        Err(error) => Err(error.into()),
    }
}

/// The caller identity, required for every state-changing command.
pub fn caller(config: &CliConfig) -> Result<Identity> {
    config
        .caller
        .clone()
        .context("No caller identity: pass --caller or set RAID_CALLER")
}
