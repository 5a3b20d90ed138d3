//! Creates a fresh raid in the save directory.

use anyhow::{Context, Result, bail};
use clap::Parser;

use raid_core::{GameState, Identity};
use raid_runtime::StateRepository;

use crate::config::CliConfig;
use crate::session;

/// Create a fresh raid administered by an operator
#[derive(Parser)]
pub struct Init {
    /// Operator identity (defaults to the caller)
    #[arg(long, value_name = "IDENTITY")]
    operator: Option<String>,

    /// Discard an existing raid in the save directory
    #[arg(long)]
    force: bool,
}

impl Init {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let operator = match self.operator {
            Some(operator) => Identity::new(operator),
            None => session::caller(config).context("Pass --operator or a caller identity")?,
        };
        if operator.is_empty() {
            bail!("Operator identity must not be empty");
        }

        let repository = session::repository(config)?;
        let nonces = repository.list_nonces()?;
        if let Some(&last) = nonces.last() {
            if !self.force {
                bail!(
                    "A raid already exists in {} (nonce {})\n\nHint: pass --force to discard it",
                    config.save_dir.display(),
                    last
                );
            }
            let deleted = repository.delete_range(0, last)?;
            tracing::info!("Discarded {} stored states", deleted);
        }

        let state = GameState::new(operator);
        repository.save(state.nonce, &state)?;

        println!(
            "initialised raid in {} with operator {}",
            config.save_dir.display(),
            state.operator
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path) -> CliConfig {
        CliConfig {
            caller: Some(Identity::new("0xowner")),
            save_dir: dir.to_path_buf(),
            ..CliConfig::default()
        }
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        Init {
            operator: None,
            force: false,
        }
        .execute(&config)
        .unwrap();

        let again = Init {
            operator: Some("0xother".into()),
            force: false,
        }
        .execute(&config);
        assert!(again.is_err());

        Init {
            operator: Some("0xother".into()),
            force: true,
        }
        .execute(&config)
        .unwrap();

        let state = session::repository(&config)
            .unwrap()
            .latest()
            .unwrap()
            .unwrap();
        assert_eq!(state.operator, Identity::new("0xother"));
    }
}
