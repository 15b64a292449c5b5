//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: vector math, the entities and the
//! world that advances them. It performs no I/O, so it runs the same in a
//! terminal, in a headless batch run or inside a unit test.
//!
//! - **Deterministic**: the world owns a seeded ChaCha RNG; same seed and same
//!   inputs give the same game
//! - **Injected edges**: input arrives through [`InputSource`], output leaves
//!   through [`RenderSink`]; there is no global state
//!
//! # Module Structure
//!
//! - [`vector`]: 2D/3D vector with the usual arithmetic
//! - [`shape`]: falling block templates; shattering into particles
//! - [`particle`]: debris physics (wall bounce, vertical exit)
//! - [`base`]: the player's base and its bullets
//! - [`controls`]: the left > right > fire input priority table
//! - [`world`]: the aggregate root and its tick
//! - [`config`]: world tunables and validation
//! - [`render`]: the render sink seam
//!
//! # Example
//!
//! ```
//! use tetvaders_core::{World, WorldConfig};
//! use tetvaders_core::types::{Control, Controls};
//!
//! let mut world = World::new(&WorldConfig::default());
//! world.update(&Controls::only(Control::Fire));
//!
//! assert_eq!(world.base().load, 9);
//! assert_eq!(world.bullets().len(), 1);
//! ```

pub mod base;
pub mod config;
pub mod controls;
pub mod particle;
pub mod render;
pub mod shape;
pub mod snapshot;
pub mod vector;
pub mod world;

pub use tetvaders_types as types;

pub use base::{Base, Bullet};
pub use config::{ConfigError, WorldConfig};
pub use particle::Particle;
pub use render::{RecordingSink, RenderSink, Sprite};
pub use shape::{Fall, Shape, ShapeKind};
pub use snapshot::{ShapeSnapshot, WorldSnapshot};
pub use types::InputSource;
pub use vector::Vector;
pub use world::World;
