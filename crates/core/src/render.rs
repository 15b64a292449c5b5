//! Render sink seam.
//!
//! The world never touches a framebuffer. [`crate::World::draw`] walks its
//! entities and hands pixels to a [`RenderSink`]; clipping, colors and glyph
//! placement belong to the sink.

use crate::shape::ShapeKind;

/// What a plotted pixel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Shape(ShapeKind),
    Bullet,
    Particle,
    Base,
}

pub trait RenderSink {
    /// Plot one playfield pixel. Coordinates may be out of bounds.
    fn plot(&mut self, x: i32, y: i32, sprite: Sprite);

    /// Heads-up text, e.g. the ammo readout.
    fn hud(&mut self, text: &str);
}

/// Sink that records every call, for tests and headless inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub pixels: Vec<(i32, i32, Sprite)>,
    pub hud: Vec<String>,
}

impl RecordingSink {
    pub fn count(&self, sprite: Sprite) -> usize {
        self.pixels.iter().filter(|(_, _, s)| *s == sprite).count()
    }
}

impl RenderSink for RecordingSink {
    fn plot(&mut self, x: i32, y: i32, sprite: Sprite) {
        self.pixels.push((x, y, sprite));
    }

    fn hud(&mut self, text: &str) {
        self.hud.push(text.to_owned());
    }
}
