//! Held-key state for terminal environments.
//!
//! The world asks "is this control pressed" once per tick. Terminals that
//! report key releases get exact answers; for the rest a press counts as held
//! until `release_timeout_ms` passes without a repeat.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::trace;

use crate::map::control_for_key;
use crate::types::{Control, Controls, InputSource, KEY_RELEASE_TIMEOUT_MS};

const CONTROLS: [Control; 3] = [Control::Left, Control::Right, Control::Fire];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Hold {
    held: bool,
    /// Milliseconds since the last press or repeat.
    age_ms: u32,
}

/// Tracks which controls are currently held.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    holds: [Hold; 3],
    release_timeout_ms: u32,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u32) -> Self {
        Self {
            holds: [Hold::default(); 3],
            release_timeout_ms,
        }
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    /// Feed one key event. Returns the control it touched, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Control> {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Control> {
        let control = control_for_key(code)?;
        *self.hold_mut(control) = Hold {
            held: true,
            age_ms: 0,
        };
        Some(control)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<Control> {
        let control = control_for_key(code)?;
        *self.hold_mut(control) = Hold::default();
        Some(control)
    }

    /// Age every hold by `elapsed_ms`, releasing the stale ones.
    pub fn update(&mut self, elapsed_ms: u32) {
        for (hold, control) in self.holds.iter_mut().zip(CONTROLS) {
            if !hold.held {
                continue;
            }
            hold.age_ms = hold.age_ms.saturating_add(elapsed_ms);
            if hold.age_ms > self.release_timeout_ms {
                trace!("auto-released {control:?} after {}ms", hold.age_ms);
                *hold = Hold::default();
            }
        }
    }

    /// Current state as a plain control set.
    pub fn controls(&self) -> Controls {
        let mut controls = Controls::none();
        for control in CONTROLS {
            controls.set(control, self.is_pressed(control));
        }
        controls
    }

    pub fn reset(&mut self) {
        self.holds = [Hold::default(); 3];
    }

    fn hold_mut(&mut self, control: Control) -> &mut Hold {
        &mut self.holds[slot(control)]
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for KeyboardState {
    fn is_pressed(&self, control: Control) -> bool {
        self.holds[slot(control)].held
    }
}

fn slot(control: Control) -> usize {
    match control {
        Control::Left => 0,
        Control::Right => 1,
        Control::Fire => 2,
    }
}
