//! Shape module - falling block templates and their landing behavior
//!
//! Every shape is a fixed 3x5 occupancy grid with its pivot at column 2,
//! row 1. The shape's `position` is the pivot's location in the playfield, so
//! the grid cell `(row, col)` covers the absolute pixel
//! `(x - off_x + col, y - off_y + row)`.
//!
//! A shape falls one row per tick until its bottom edge would leave the
//! playfield, then shatters into one [`Particle`] per occupied cell.

use arrayvec::ArrayVec;
use rand::Rng;
use serde::Serialize;

use crate::particle::Particle;
use crate::types::{SHAPE_CELLS, SHAPE_COLS, SHAPE_ROWS};
use crate::vector::Vector;

/// Upper bound (exclusive) on the speed given to a fresh particle.
pub const MAX_PARTICLE_VELOCITY: f64 = 2.0;

pub type Grid = [[bool; SHAPE_COLS]; SHAPE_ROWS];

const X: bool = true;
const O: bool = false;

/// The available shape templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    /// Two prongs on a cup with a single-cell stem.
    Fork,
    /// A full top bar with a two-cell leg on the left.
    Ell,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Fork, ShapeKind::Ell];

    pub fn grid(&self) -> &'static Grid {
        match self {
            ShapeKind::Fork => &[
                [O, X, O, X, O], //
                [O, X, X, X, O],
                [O, O, X, O, O],
            ],
            ShapeKind::Ell => &[
                [X, X, X, X, X], //
                [X, O, O, O, O],
                [X, O, O, O, O],
            ],
        }
    }

    /// Pivot offset `(off_x, off_y)` inside the grid.
    pub fn pivot(&self) -> (f64, f64) {
        (2.0, 1.0)
    }

    pub fn cell_count(&self) -> usize {
        self.grid().iter().flatten().filter(|&&c| c).count()
    }
}

/// Outcome of one [`Shape::fall`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Fall {
    /// Moved down one row.
    Fell,
    /// Hit the floor: one particle per occupied cell.
    Shattered(ArrayVec<Particle, SHAPE_CELLS>),
    /// Already destroyed; nothing happened.
    Gone,
}

/// A falling block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub position: Vector,
    pub kind: ShapeKind,
    pub off_x: f64,
    pub off_y: f64,
    pub height: f64,
    pub width: f64,
    /// Remove at the next cleanup pass.
    pub destroy: bool,
}

impl Shape {
    /// Place a shape of `kind` with its pivot at `position`.
    pub fn new(kind: ShapeKind, position: Vector) -> Self {
        let (off_x, off_y) = kind.pivot();
        Self {
            position,
            kind,
            off_x,
            off_y,
            height: SHAPE_ROWS as f64,
            width: SHAPE_COLS as f64,
            destroy: false,
        }
    }

    /// A random template at a random column along the top of a playfield
    /// `world_width` pixels wide.
    ///
    /// The pivot x is uniform in `[off_x, world_width - width + off_x)`, so
    /// every cell lands inside the playfield. The pivot y equals the template
    /// height.
    pub fn initial<R: Rng + ?Sized>(world_width: i32, rng: &mut R) -> Self {
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let mut shape = Self::new(kind, Vector::ZERO);
        let span = (f64::from(world_width) - shape.width).max(0.0);
        let x = if span > 0.0 {
            rng.gen_range(0.0..span)
        } else {
            0.0
        };
        shape.position = Vector::new_2d(x + shape.off_x, shape.height);
        shape
    }

    pub fn grid(&self) -> &'static Grid {
        self.kind.grid()
    }

    /// Row just below the shape's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.position.y - self.off_y + self.height
    }

    /// Absolute pixel coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let left = self.position.x - self.off_x;
        let top = self.position.y - self.off_y;
        self.grid().iter().enumerate().flat_map(move |(row, cols)| {
            cols.iter().enumerate().filter(|&(_, &c)| c).map(move |(col, _)| {
                ((left + col as f64) as i32, (top + row as f64) as i32)
            })
        })
    }

    /// Advance one tick in a playfield `world_height` pixels tall.
    pub fn fall<R: Rng + ?Sized>(&mut self, world_height: i32, rng: &mut R) -> Fall {
        if self.destroy {
            return Fall::Gone;
        }

        if self.bottom() < f64::from(world_height) {
            self.position += Vector::new_2d(0.0, 1.0);
            return Fall::Fell;
        }

        let left = self.position.x - self.off_x;
        let top = self.position.y - self.off_y;
        let mut debris = ArrayVec::new();
        for (row, cols) in self.grid().iter().enumerate() {
            for (col, _) in cols.iter().enumerate().filter(|&(_, &c)| c) {
                debris.push(Particle::new(
                    Vector::new_2d(left + col as f64, top + row as f64),
                    Vector::random_2d(rng),
                    rng.gen_range(0.0..MAX_PARTICLE_VELOCITY),
                ));
            }
        }

        self.destroy = true;
        Fall::Shattered(debris)
    }
}
