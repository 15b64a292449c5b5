use serde::Serialize;

use crate::base::Base;
use crate::shape::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeSnapshot {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
}

/// Serializable summary of a world at a tick boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: i32,
    pub height: i32,
    pub drop_countdown: i32,
    pub base: Base,
    pub shapes: Vec<ShapeSnapshot>,
    pub bullets: usize,
    pub live_particles: usize,
    pub stored_particles: usize,
    pub shapes_spawned: u64,
    pub shapes_shattered: u64,
}
