//! Tetvaders (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benches can write `tetvaders::core::World`
//! and friends. [`settings`] holds the command-line and config-file layer.

pub mod headless;
pub mod settings;

pub use tetvaders_core as core;
pub use tetvaders_input as input;
pub use tetvaders_term as term;
pub use tetvaders_types as types;
