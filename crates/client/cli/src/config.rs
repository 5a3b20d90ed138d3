//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use raid_core::{GameConfig, Identity};
use raid_runtime::RuntimeConfig;

/// Configuration required to open a save directory and act in it.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Identity requests are submitted for.
    pub caller: Option<Identity>,
    /// Directory holding `states/state_{nonce}.bin`.
    pub save_dir: PathBuf,
    pub runtime: RuntimeConfig,
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per event
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            caller: None,
            save_dir: default_save_dir(),
            runtime: RuntimeConfig::default(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RAID_CALLER` - Identity to act as
    /// - `RAID_SAVE_DIR` - Save directory (default: platform data dir)
    /// - `RAID_OUTPUT` - `text` or `json` (default: text)
    /// - `RAID_BASE_HP` - Starting hit points of new characters (default: 100)
    /// - `RAID_BASE_DAMAGE` - Melee damage (default: 10)
    /// - `RAID_XP_PER_LEVEL` - Experience per level (default: 100)
    /// - `RAID_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.caller = env::var("RAID_CALLER").ok().and_then(parse_caller);

        if let Ok(dir) = env::var("RAID_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Ok(format) = env::var("RAID_OUTPUT")
            && format.eq_ignore_ascii_case("json")
        {
            config.output = OutputFormat::Json;
        }

        let mut game = GameConfig::default();
        if let Some(hp) = read_env::<u64>("RAID_BASE_HP") {
            game = game.with_base_hp(hp);
        }
        if let Some(damage) = read_env::<u64>("RAID_BASE_DAMAGE") {
            game = game.with_base_damage(damage);
        }
        if let Some(xp) = read_env::<u64>("RAID_XP_PER_LEVEL") {
            game = game.with_experience_per_level(xp);
        }
        config.runtime.game_config = game;

        if let Some(capacity) = read_env::<usize>("RAID_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        config
    }

    pub fn states_dir(&self) -> PathBuf {
        self.save_dir.join("states")
    }
}

/// Platform data directory, e.g. `~/.local/share/raid` on Linux.
/// Normalizes a caller identity; blank input means no caller.
pub fn parse_caller(raw: impl AsRef<str>) -> Option<Identity> {
    Some(Identity::new(raw)).filter(|caller| !caller.is_empty())
}

fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "raid")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
