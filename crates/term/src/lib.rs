//! Terminal "game renderer" module.
//!
//! The world draws into a [`PixelCanvas`] (its render sink). [`GameView`] packs
//! that canvas into a character [`FrameBuffer`], two pixel rows per terminal
//! row, and [`TerminalRenderer`] flushes the changed runs to the terminal.
//!
//! Everything except `TerminalRenderer` is pure and unit-testable.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetvaders_core as core;
pub use tetvaders_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
