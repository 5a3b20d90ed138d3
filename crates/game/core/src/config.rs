/// Game rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Hit points (and max hit points) of a freshly created character.
    pub base_hp: u64,
    /// Damage dealt to the active boss by a melee attack.
    pub base_damage: u64,
    /// Multiplier applied to `base_damage` when casting a spell.
    pub spell_multiplier: u64,
    /// Minimum character level required to cast spells.
    pub spell_min_level: u32,
    /// Experience needed per level step: `level = xp / experience_per_level + 1`.
    pub experience_per_level: u64,
}

impl GameConfig {
    pub const DEFAULT_BASE_HP: u64 = 100;
    pub const DEFAULT_BASE_DAMAGE: u64 = 10;
    pub const DEFAULT_SPELL_MULTIPLIER: u64 = 2;
    pub const DEFAULT_SPELL_MIN_LEVEL: u32 = 2;
    pub const DEFAULT_EXPERIENCE_PER_LEVEL: u64 = 100;

    pub fn new() -> Self {
        Self {
            base_hp: Self::DEFAULT_BASE_HP,
            base_damage: Self::DEFAULT_BASE_DAMAGE,
            spell_multiplier: Self::DEFAULT_SPELL_MULTIPLIER,
            spell_min_level: Self::DEFAULT_SPELL_MIN_LEVEL,
            experience_per_level: Self::DEFAULT_EXPERIENCE_PER_LEVEL,
        }
    }

    pub fn with_base_hp(mut self, base_hp: u64) -> Self {
        self.base_hp = base_hp;
        self
    }

    pub fn with_base_damage(mut self, base_damage: u64) -> Self {
        self.base_damage = base_damage;
        self
    }

    pub fn with_experience_per_level(mut self, experience_per_level: u64) -> Self {
        self.experience_per_level = experience_per_level;
        self
    }

    /// Damage dealt by a spell cast.
    pub fn spell_damage(&self) -> u64 {
        self.base_damage.saturating_mul(self.spell_multiplier)
    }

    /// Level reached with the given amount of accumulated experience.
    ///
    /// A zero `experience_per_level` pins every character at level 1.
    pub fn level_for(&self, experience: u64) -> u32 {
        let steps = experience.checked_div(self.experience_per_level).unwrap_or(0);
        u32::try_from(steps).unwrap_or(u32::MAX).saturating_add(1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_steps_every_hundred_experience() {
        let config = GameConfig::default();

        assert_eq!(config.level_for(0), 1);
        assert_eq!(config.level_for(99), 1);
        assert_eq!(config.level_for(100), 2);
        assert_eq!(config.level_for(250), 3);
    }

    #[test]
    fn zero_step_keeps_level_one() {
        let config = GameConfig::default().with_experience_per_level(0);
        assert_eq!(config.level_for(u64::MAX), 1);
    }

    #[test]
    fn spell_damage_doubles_base_damage() {
        assert_eq!(GameConfig::default().spell_damage(), 20);
    }
}
