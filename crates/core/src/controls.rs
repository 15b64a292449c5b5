//! Input priority policy.
//!
//! Exactly one action is taken per tick. Controls are checked in table order
//! and the first one held wins: left beats right, and either movement beats
//! fire. Inputs are never combined.

use crate::types::{Control, GameAction, InputSource};

/// Ordered `(control, action)` pairs, highest priority first.
pub const INPUT_PRIORITY: [(Control, GameAction); 3] = [
    (Control::Left, GameAction::MoveLeft),
    (Control::Right, GameAction::MoveRight),
    (Control::Fire, GameAction::Fire),
];

/// Pick the single action for this tick, if any control is held.
pub fn resolve<I: InputSource + ?Sized>(input: &I) -> Option<GameAction> {
    INPUT_PRIORITY
        .iter()
        .find(|(control, _)| input.is_pressed(*control))
        .map(|&(_, action)| action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Controls;

    #[test]
    fn idle_input_yields_nothing() {
        assert_eq!(resolve(&Controls::none()), None);
    }

    #[test]
    fn left_beats_everything() {
        let all = Controls {
            left: true,
            right: true,
            fire: true,
        };
        assert_eq!(resolve(&all), Some(GameAction::MoveLeft));
    }

    #[test]
    fn right_beats_fire() {
        let c = Controls {
            left: false,
            right: true,
            fire: true,
        };
        assert_eq!(resolve(&c), Some(GameAction::MoveRight));
    }

    #[test]
    fn fire_alone_fires() {
        assert_eq!(
            resolve(&Controls::only(Control::Fire)),
            Some(GameAction::Fire)
        );
    }
}
