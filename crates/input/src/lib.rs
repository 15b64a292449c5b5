//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Control`]s and keeps a
//! held-key state the world can poll once per tick, including on terminals
//! that never report key releases.

pub mod keyboard;
pub mod map;

pub use tetvaders_types as types;

pub use keyboard::KeyboardState;
pub use map::{control_for_key, should_quit};
