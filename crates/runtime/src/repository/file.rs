//! File-based StateRepository implementation.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use raid_core::GameState;

use super::{RepositoryError, Result, StateRepository};

/// Stores each committed state as `state_{nonce}.bin` (bincode).
///
/// Writes go to a private temp file first and are linked into place without
/// replacing an existing file, so a crash never leaves a truncated state behind
/// and two writers cannot both publish the same nonce.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn state_path(&self, nonce: u64) -> PathBuf {
        self.base_dir.join(format!("state_{nonce}.bin"))
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, nonce: u64, state: &GameState) -> Result<()> {
        let path = self.state_path(nonce);

        let bytes =
            bincode::serialize(state).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let mut temp = NamedTempFile::new_in(&self.base_dir)?;
        temp.write_all(&bytes)?;
        temp.as_file().sync_all()?;
        temp.persist_noclobber(&path).map_err(|e| match e.error.kind() {
            ErrorKind::AlreadyExists => RepositoryError::Conflict { nonce },
            _ => RepositoryError::Io(e.error),
        })?;

        tracing::debug!("Saved state[{}] to {}", nonce, path.display());
        Ok(())
    }

    fn load(&self, nonce: u64) -> Result<Option<GameState>> {
        let path = self.state_path(nonce);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let state: GameState =
            bincode::deserialize(&bytes).map_err(|e| RepositoryError::CorruptedData {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Loaded state[{}] from {}", nonce, path.display());
        Ok(Some(state))
    }

    fn exists(&self, nonce: u64) -> bool {
        self.state_path(nonce).exists()
    }

    fn delete(&self, nonce: u64) -> Result<()> {
        let path = self.state_path(nonce);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted state[{}]", nonce);
        }
        Ok(())
    }

    fn list_nonces(&self) -> Result<Vec<u64>> {
        let mut nonces = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(nonce_str) = filename
                    .strip_prefix("state_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(nonce) = nonce_str.parse::<u64>()
            {
                nonces.push(nonce);
            }
        }

        nonces.sort_unstable();
        Ok(nonces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raid_core::Identity;

    #[test]
    fn saving_an_existing_nonce_keeps_the_first_state() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileStateRepository::new(dir.path()).unwrap();
        let first = GameState::new(Identity::new("0xfirst"));
        let second = GameState::new(Identity::new("0xsecond"));

        repository.save(0, &first).unwrap();
        let result = repository.save(0, &second);

        assert!(matches!(result, Err(RepositoryError::Conflict { nonce: 0 })));
        assert_eq!(repository.load(0).unwrap(), Some(first));
        assert_eq!(repository.list_nonces().unwrap(), vec![0]);
    }
}
