//! World module - the aggregate root and its per-tick update
//!
//! The world owns every entity: falling shapes, debris particles, bullets and
//! the player's base. The driver calls [`World::update`] once per tick and
//! then [`World::draw`] once per frame; nothing else mutates the world.
//!
//! # Tick order
//!
//! 1. Spawn countdown: decrement, and when it goes negative spawn a shape and
//!    reset the countdown to `drop_start`.
//! 2. Every shape falls one row or shatters into particles.
//! 3. Destroyed shapes are removed (order preserved).
//! 4. Bullets move up one row, resting at the top edge.
//! 5. Particles step (wall bounce, vertical exit).
//! 6. One input action is resolved and applied to the base.
//!
//! With `purge_spent` set, bullets already resting on the top row and deleted
//! particles are compacted away as part of the same tick.

use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::base::{Base, Bullet};
use crate::config::WorldConfig;
use crate::controls;
use crate::particle::Particle;
use crate::render::{RenderSink, Sprite};
use crate::shape::{Fall, Shape};
use crate::snapshot::{ShapeSnapshot, WorldSnapshot};
use crate::types::{GameAction, InputSource};

/// Complete game state.
#[derive(Debug, Clone)]
pub struct World {
    width: i32,
    height: i32,
    base: Base,
    base_margin: i32,
    /// Ticks left until the next spawn; a spawn happens when this goes negative.
    drop_countdown: i32,
    drop_start: i32,
    shapes: Vec<Shape>,
    particles: Vec<Particle>,
    bullets: Vec<Bullet>,
    purge_spent: bool,
    rng: ChaCha8Rng,
    tick: u64,
    shapes_spawned: u64,
    shapes_shattered: u64,
}

impl World {
    /// Build a fresh world. The config is expected to have passed
    /// [`WorldConfig::validate`].
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            base: Base::new(
                config.width / 2,
                config.height - 1,
                config.starting_load(),
                config.max_load,
            ),
            base_margin: config.base_margin,
            drop_countdown: config.drop_start,
            drop_start: config.drop_start,
            shapes: Vec::with_capacity(20),
            particles: Vec::with_capacity(20),
            bullets: Vec::with_capacity(20),
            purge_spent: config.purge_spent,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tick: 0,
            shapes_spawned: 0,
            shapes_shattered: 0,
        }
    }

    /// Advance the world by one tick, reading `input` once.
    pub fn update<I: InputSource + ?Sized>(&mut self, input: &I) {
        self.tick += 1;

        self.drop_countdown -= 1;
        if self.drop_countdown < 0 {
            self.spawn_shape();
            self.drop_countdown = self.drop_start;
        }

        self.move_shapes();
        self.move_bullets();
        self.move_particles();

        if let Some(action) = controls::resolve(input) {
            self.apply_action(action);
        }
    }

    /// Apply one player action to the base.
    ///
    /// Moving into a margin or firing with an empty base is a silent no-op.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.base.move_left(self.base_margin),
            GameAction::MoveRight => self.base.move_right(self.width - self.base_margin),
            GameAction::Fire => match self.base.fire() {
                Some(bullet) => self.bullets.push(bullet),
                None => trace!("fire ignored: base is out of load"),
            },
        }
    }

    /// Append a random shape along the top edge.
    pub fn spawn_shape(&mut self) {
        let shape = Shape::initial(self.width, &mut self.rng);
        debug!(
            "tick {}: spawned {:?} at x={:.1}",
            self.tick, shape.kind, shape.position.x
        );
        self.shapes.push(shape);
        self.shapes_spawned += 1;
    }

    /// Insert an already-built shape, bypassing the spawn countdown.
    pub fn push_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    fn move_shapes(&mut self) {
        for shape in &mut self.shapes {
            if let Fall::Shattered(debris) = shape.fall(self.height, &mut self.rng) {
                debug!(
                    "tick {}: {:?} shattered into {} particles",
                    self.tick,
                    shape.kind,
                    debris.len()
                );
                self.particles.extend(debris);
                self.shapes_shattered += 1;
            }
        }
        self.shapes.retain(|s| !s.destroy);
    }

    fn move_bullets(&mut self) {
        if self.purge_spent {
            self.bullets.retain(|b| !b.is_spent());
        }
        for bullet in &mut self.bullets {
            bullet.step();
        }
    }

    fn move_particles(&mut self) {
        for particle in &mut self.particles {
            particle.step(self.width, self.height);
        }
        if self.purge_spent {
            self.particles.retain(|p| !p.deleted);
        }
    }

    /// Emit every visible entity to `sink`.
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for shape in &self.shapes {
            for (x, y) in shape.cells() {
                sink.plot(x, y, Sprite::Shape(shape.kind));
            }
        }
        for bullet in &self.bullets {
            sink.plot(bullet.x, bullet.y, Sprite::Bullet);
        }
        for (x, y) in self.particles.iter().filter_map(Particle::pixel) {
            sink.plot(x, y, Sprite::Particle);
        }
        for (x, y) in self.base.glyph() {
            sink.plot(x, y, Sprite::Base);
        }
        sink.hud(&self.load_text());
    }

    /// Ammo readout shown in the HUD.
    pub fn load_text(&self) -> String {
        format!("Load:{}", self.base.load)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            width: self.width,
            height: self.height,
            drop_countdown: self.drop_countdown,
            base: self.base,
            shapes: self
                .shapes
                .iter()
                .map(|s| ShapeSnapshot {
                    kind: s.kind,
                    x: s.position.x,
                    y: s.position.y,
                })
                .collect(),
            bullets: self.bullets.len(),
            live_particles: self.particles.iter().filter(|p| !p.deleted).count(),
            stored_particles: self.particles.len(),
            shapes_spawned: self.shapes_spawned,
            shapes_shattered: self.shapes_shattered,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn drop_countdown(&self) -> i32 {
        self.drop_countdown
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSink;
    use crate::types::{Control, Controls};

    fn world() -> World {
        World::new(&WorldConfig::default().with_size(100, 60))
    }

    #[test]
    fn base_starts_centered_on_bottom_row_with_half_load() {
        let w = world();
        assert_eq!(w.base().x, 50);
        assert_eq!(w.base().y, 59);
        assert_eq!(w.base().load, 10);
        assert_eq!(w.base().max_load, 20);
    }

    #[test]
    fn only_one_action_per_tick() {
        let mut w = world();
        let all = Controls {
            left: true,
            right: true,
            fire: true,
        };
        w.update(&all);
        assert_eq!(w.base().x, 49);
        assert_eq!(w.base().load, 10);
        assert!(w.bullets().is_empty());
    }

    #[test]
    fn fired_bullet_climbs_one_row_per_tick() {
        let mut w = world();
        w.update(&Controls::only(Control::Fire));
        assert_eq!(w.bullets(), &[Bullet { x: 50, y: 58 }]);

        w.update(&Controls::none());
        assert_eq!(w.bullets()[0].y, 57);
    }

    #[test]
    fn draw_emits_base_glyph_and_load_text() {
        let w = world();
        let mut sink = RecordingSink::default();
        w.draw(&mut sink);
        assert_eq!(sink.count(Sprite::Base), 4);
        assert_eq!(sink.hud, vec!["Load:10".to_string()]);
    }

    #[test]
    fn same_seed_same_world() {
        let cfg = WorldConfig::default().with_seed(99).with_size(100, 60);
        let mut a = World::new(&cfg);
        let mut b = World::new(&cfg);
        for i in 0..400 {
            let input = Controls::from_char(['l', 'f', '.', 'r'][i % 4]);
            a.update(&input);
            b.update(&input);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
