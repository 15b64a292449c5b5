//! Shared types and constants.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the core simulation, the input layer and the terminal renderer
//! alike.
//!
//! # Timing and gameplay constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 ticks per second) |
//! | `DROP_START_TICKS` | 100 | Ticks between shape spawns |
//! | `MAX_LOAD` | 20 | Ammo capacity of the base |
//! | `BASE_MARGIN` | 10 | Closest the base may get to either side wall |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Held-key expiry for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use tetvaders_types::{Control, Controls, InputSource, Preset};
//!
//! let controls = Controls::from_char('f');
//! assert!(controls.is_pressed(Control::Fire));
//! assert!(!controls.is_pressed(Control::Left));
//!
//! let preset: Preset = "tetvaders".parse().unwrap();
//! assert_eq!(preset.dimensions(), (128, 128));
//! ```

use std::fmt;
use std::str::FromStr;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 ticks per second)
pub const TICK_MS: u32 = 16;

/// Spawn countdown reset value, in ticks
pub const DROP_START_TICKS: i32 = 100;

/// Ammo capacity of the base
pub const MAX_LOAD: u32 = 20;

/// Minimum distance between the base and either side wall
pub const BASE_MARGIN: i32 = 10;

/// How long a pressed key counts as held without a refresh, for terminals
/// that never report key releases.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Rows in a shape template
pub const SHAPE_ROWS: usize = 3;

/// Columns in a shape template
pub const SHAPE_COLS: usize = 5;

/// Upper bound on the particles a single shape can shatter into
pub const SHAPE_CELLS: usize = SHAPE_ROWS * SHAPE_COLS;

/// Player controls that can be queried once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Fire,
}

/// Mutations the player can apply to the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the base one column left
    MoveLeft,
    /// Move the base one column right
    MoveRight,
    /// Spend one unit of load on a bullet
    Fire,
}

/// Anything that can answer "is this control pressed right now".
///
/// The world polls this exactly once per control per tick; there is no event
/// queue and no debouncing.
pub trait InputSource {
    fn is_pressed(&self, control: Control) -> bool;
}

/// A plain set of pressed controls.
///
/// Used for scripted input (tests, headless runs) and as the resolved state of
/// a keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Controls {
    /// No control pressed.
    pub const fn none() -> Self {
        Self {
            left: false,
            right: false,
            fire: false,
        }
    }

    /// Exactly one control pressed.
    pub fn only(control: Control) -> Self {
        let mut controls = Self::none();
        controls.set(control, true);
        controls
    }

    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Left => self.left = pressed,
            Control::Right => self.right = pressed,
            Control::Fire => self.fire = pressed,
        }
    }

    /// Decode a one-character input script step.
    ///
    /// `l` left, `r` right, `f` fire; anything else is idle.
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            'l' => Self::only(Control::Left),
            'r' => Self::only(Control::Right),
            'f' => Self::only(Control::Fire),
            _ => Self::none(),
        }
    }
}

impl InputSource for Controls {
    fn is_pressed(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Fire => self.fire,
        }
    }
}

/// Named playfield dimensions.
///
/// `Tetvaders` and `Faller` are the two window sizes the game historically
/// shipped with; `Compact` fits a regular terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Compact,
    Tetvaders,
    Faller,
}

impl Preset {
    /// Playfield `(width, height)` in pixels.
    pub fn dimensions(&self) -> (i32, i32) {
        match self {
            Preset::Compact => (80, 44),
            Preset::Tetvaders => (128, 128),
            Preset::Faller => (240, 240),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Compact => "compact",
            Preset::Tetvaders => "tetvaders",
            Preset::Faller => "faller",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Preset::Compact),
            "tetvaders" => Ok(Preset::Tetvaders),
            "faller" => Ok(Preset::Faller),
            other => Err(format!(
                "unknown preset '{other}' (expected compact, tetvaders or faller)"
            )),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gameplay_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(DROP_START_TICKS, 100);
        assert_eq!(MAX_LOAD, 20);
        assert_eq!(BASE_MARGIN, 10);
        assert_eq!(SHAPE_CELLS, 15);
    }

    #[test]
    fn controls_only_sets_one_flag() {
        let c = Controls::only(Control::Right);
        assert!(c.is_pressed(Control::Right));
        assert!(!c.is_pressed(Control::Left));
        assert!(!c.is_pressed(Control::Fire));
    }

    #[test]
    fn script_chars_decode() {
        assert_eq!(Controls::from_char('L'), Controls::only(Control::Left));
        assert_eq!(Controls::from_char('r'), Controls::only(Control::Right));
        assert_eq!(Controls::from_char('f'), Controls::only(Control::Fire));
        assert_eq!(Controls::from_char('.'), Controls::none());
    }

    #[test]
    fn preset_round_trips_through_display() {
        for preset in [Preset::Compact, Preset::Tetvaders, Preset::Faller] {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
        assert!("huge".parse::<Preset>().is_err());
    }
}
