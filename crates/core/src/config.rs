//! World configuration.
//!
//! `WorldConfig` serializes into headless reports and deserializes from a
//! partial table, with missing keys taking the compact preset's values. The
//! binary's layered config file goes through `settings::ConfigFile` instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Preset, BASE_MARGIN, DROP_START_TICKS, MAX_LOAD, SHAPE_COLS, SHAPE_ROWS};

/// Tunables for a single world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    /// Ticks between shape spawns.
    pub drop_start: i32,
    pub max_load: u32,
    /// Starting ammo; `None` means half of `max_load`.
    pub initial_load: Option<u32>,
    /// Closest the base may get to either side wall.
    pub base_margin: i32,
    /// Drop spent bullets and deleted particles every tick.
    pub purge_spent: bool,
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

/// Reasons a [`WorldConfig`] cannot host a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("playfield {width}x{height} is too small (need at least {min_width}x{min_height})")]
    TooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
    #[error("drop_start must not be negative (got {0})")]
    NegativeDropStart(i32),
    #[error("base_margin must not be negative (got {0})")]
    NegativeMargin(i32),
    #[error("initial_load {initial} exceeds max_load {max}")]
    LoadOverCapacity { initial: u32, max: u32 },
}

impl WorldConfig {
    /// Defaults for a named playfield size.
    pub fn preset(preset: Preset) -> Self {
        let (width, height) = preset.dimensions();
        Self {
            width,
            height,
            drop_start: DROP_START_TICKS,
            max_load: MAX_LOAD,
            initial_load: None,
            base_margin: BASE_MARGIN,
            purge_spent: true,
            seed: 42,
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn starting_load(&self) -> u32 {
        self.initial_load.unwrap_or(self.max_load / 2)
    }

    /// Smallest playfield that fits a shape template and the base's travel.
    pub fn min_size(&self) -> (i32, i32) {
        let min_width = (2 * self.base_margin).max(SHAPE_COLS as i32);
        // Room for a freshly spawned shape plus the base glyph.
        let min_height = 2 * SHAPE_ROWS as i32 + 2;
        (min_width, min_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_margin < 0 {
            return Err(ConfigError::NegativeMargin(self.base_margin));
        }
        let (min_width, min_height) = self.min_size();
        if self.width < min_width || self.height < min_height {
            return Err(ConfigError::TooSmall {
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        if self.drop_start < 0 {
            return Err(ConfigError::NegativeDropStart(self.drop_start));
        }
        if self.starting_load() > self.max_load {
            return Err(ConfigError::LoadOverCapacity {
                initial: self.starting_load(),
                max: self.max_load,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for preset in [Preset::Compact, Preset::Tetvaders, Preset::Faller] {
            assert_eq!(WorldConfig::preset(preset).validate(), Ok(()));
        }
    }

    #[test]
    fn default_load_is_half_capacity() {
        assert_eq!(WorldConfig::default().starting_load(), 10);
    }

    #[test]
    fn rejects_narrow_playfield() {
        let cfg = WorldConfig::default().with_size(15, 100);
        assert!(matches!(cfg.validate(), Err(ConfigError::TooSmall { .. })));
    }

    #[test]
    fn rejects_overfull_load() {
        let cfg = WorldConfig {
            initial_load: Some(30),
            ..WorldConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::LoadOverCapacity { initial: 30, max: 20 })
        );
    }

    #[test]
    fn rejects_negative_drop_start() {
        let cfg = WorldConfig {
            drop_start: -1,
            ..WorldConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NegativeDropStart(-1)));
    }
}
