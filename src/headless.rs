//! Headless runs: simulate without a terminal, report a snapshot.

use serde::Serialize;

use crate::core::{World, WorldConfig, WorldSnapshot};
use crate::types::Controls;

/// Output of a headless run, printed as JSON by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessReport {
    pub config: WorldConfig,
    pub snapshot: WorldSnapshot,
}

/// Simulate `ticks` ticks, feeding `script` one step per tick (cycled).
pub fn run(config: &WorldConfig, ticks: u64, script: &[Controls]) -> HeadlessReport {
    let mut world = World::new(config);
    let idle = [Controls::none()];
    let steps = if script.is_empty() { &idle[..] } else { script };

    for input in steps.iter().cycle().take(ticks as usize) {
        world.update(input);
    }

    HeadlessReport {
        config: config.clone(),
        snapshot: world.snapshot(),
    }
}
