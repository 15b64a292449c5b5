//! Command-line arguments and config-file layering.
//!
//! Precedence, lowest first: preset defaults, then the TOML config file, then
//! individual command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::core::WorldConfig;
use crate::types::{Controls, Preset};

/// Falling-shapes terminal arcade game.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Playfield size preset: compact, tetvaders or faller.
    #[arg(long)]
    pub preset: Option<Preset>,

    /// TOML file with world settings.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Playfield width in pixels.
    #[arg(long)]
    pub width: Option<i32>,

    /// Playfield height in pixels.
    #[arg(long)]
    pub height: Option<i32>,

    /// RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ticks between shape spawns.
    #[arg(long)]
    pub drop_start: Option<i32>,

    /// Keep spent bullets and deleted particles around forever.
    #[arg(long)]
    pub keep_spent: bool,

    /// Write logs to this file (logging is off otherwise).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run without a terminal and print the final world snapshot as JSON.
    #[arg(long)]
    pub headless: bool,

    /// Ticks to simulate in headless mode.
    #[arg(long, default_value_t = 1000)]
    pub ticks: u64,

    /// Headless input script, one step per tick, cycled:
    /// `l` left, `r` right, `f` fire, anything else idle.
    #[arg(long, default_value = ".")]
    pub input: String,
}

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub preset: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub drop_start: Option<i32>,
    pub max_load: Option<u32>,
    pub initial_load: Option<u32>,
    pub base_margin: Option<i32>,
    pub purge_spent: Option<bool>,
    pub seed: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn preset(&self) -> Result<Option<Preset>> {
        self.preset
            .as_deref()
            .map(|s| s.parse::<Preset>().map_err(anyhow::Error::msg))
            .transpose()
    }

    fn apply(&self, cfg: &mut WorldConfig) {
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.drop_start {
            cfg.drop_start = v;
        }
        if let Some(v) = self.max_load {
            cfg.max_load = v;
        }
        if self.initial_load.is_some() {
            cfg.initial_load = self.initial_load;
        }
        if let Some(v) = self.base_margin {
            cfg.base_margin = v;
        }
        if let Some(v) = self.purge_spent {
            cfg.purge_spent = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
    }
}

impl Args {
    /// Resolve the final, validated world configuration.
    pub fn world_config(&self) -> Result<WorldConfig> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        self.world_config_with(&file)
    }

    /// Same as [`world_config`](Self::world_config) with an already-loaded file.
    pub fn world_config_with(&self, file: &ConfigFile) -> Result<WorldConfig> {
        let preset = match self.preset {
            Some(p) => p,
            None => file.preset()?.unwrap_or_default(),
        };

        let mut cfg = WorldConfig::preset(preset);
        file.apply(&mut cfg);

        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        if let Some(v) = self.drop_start {
            cfg.drop_start = v;
        }
        if self.keep_spent {
            cfg.purge_spent = false;
        }

        cfg.validate().context("invalid world configuration")?;
        Ok(cfg)
    }

    pub fn input_script(&self) -> Vec<Controls> {
        parse_script(&self.input)
    }
}

/// Decode an input script. An empty script means "always idle".
pub fn parse_script(pattern: &str) -> Vec<Controls> {
    let steps: Vec<Controls> = pattern.chars().map(Controls::from_char).collect();
    if steps.is_empty() {
        vec![Controls::none()]
    } else {
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Control;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["tetvaders"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_to_compact_preset() {
        let cfg = args(&[]).world_config().unwrap();
        assert_eq!((cfg.width, cfg.height), Preset::Compact.dimensions());
        assert!(cfg.purge_spent);
    }

    #[test]
    fn cli_beats_file_beats_preset() {
        let file = ConfigFile::parse("preset = \"faller\"\nheight = 200\nseed = 5\n").unwrap();

        let cfg = args(&[]).world_config_with(&file).unwrap();
        assert_eq!((cfg.width, cfg.height, cfg.seed), (240, 200, 5));

        let cfg = args(&["--height", "150", "--keep-spent"])
            .world_config_with(&file)
            .unwrap();
        assert_eq!((cfg.width, cfg.height), (240, 150));
        assert!(!cfg.purge_spent);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("speed = 3").is_err());
    }

    #[test]
    fn bad_preset_in_file_is_an_error() {
        let file = ConfigFile::parse("preset = \"giant\"").unwrap();
        assert!(args(&[]).world_config_with(&file).is_err());
    }

    #[test]
    fn invalid_dimensions_fail_validation() {
        assert!(args(&["--width", "8"]).world_config().is_err());
    }

    #[test]
    fn world_config_fills_missing_keys_from_defaults() {
        let cfg: WorldConfig = toml::from_str("width = 100\nseed = 9\n").unwrap();
        assert_eq!(cfg.width, 100);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.height, WorldConfig::default().height);
        assert_eq!(cfg.drop_start, WorldConfig::default().drop_start);
        assert!(cfg.purge_spent);
    }

    #[test]
    fn script_parsing() {
        let steps = parse_script("lf.");
        assert_eq!(
            steps,
            vec![
                Controls::only(Control::Left),
                Controls::only(Control::Fire),
                Controls::none()
            ]
        );
        assert_eq!(parse_script(""), vec![Controls::none()]);
    }
}
