//! The player's base and the bullets it fires.

use serde::Serialize;

/// A vertical projectile. Moves up one row per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
}

impl Bullet {
    /// Move up one row, stopping at the top edge.
    pub fn step(&mut self) {
        if self.y > 0 {
            self.y -= 1;
        }
    }

    /// A bullet resting on the top row has nowhere left to go.
    pub fn is_spent(&self) -> bool {
        self.y <= 0
    }
}

/// Player avatar at the bottom of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Base {
    pub x: i32,
    pub y: i32,
    /// Remaining ammo. Never replenished.
    pub load: u32,
    pub max_load: u32,
}

impl Base {
    pub fn new(x: i32, y: i32, load: u32, max_load: u32) -> Self {
        Self {
            x,
            y,
            load: load.min(max_load),
            max_load,
        }
    }

    /// Step one column left unless already at `min_x`.
    pub fn move_left(&mut self, min_x: i32) {
        if self.x > min_x {
            self.x -= 1;
        }
    }

    /// Step one column right unless already at `max_x`.
    pub fn move_right(&mut self, max_x: i32) {
        if self.x < max_x {
            self.x += 1;
        }
    }

    /// Spend one unit of load on a bullet just above the base.
    ///
    /// Returns `None` (and changes nothing) when the base is empty.
    pub fn fire(&mut self) -> Option<Bullet> {
        if self.load == 0 {
            return None;
        }
        self.load -= 1;
        Some(Bullet {
            x: self.x,
            y: self.y - 1,
        })
    }

    /// Pixels of the base glyph: a three-wide foot with a one-pixel turret.
    pub fn glyph(&self) -> [(i32, i32); 4] {
        [
            (self.x - 1, self.y),
            (self.x, self.y),
            (self.x + 1, self.y),
            (self.x, self.y - 1),
        ]
    }
}
