use macroquad::prelude::*;

use crate::steering::Behavior;

/// Everything the sim consumes from the keyboard, sampled once per frame.
/// The scene only ever sees the enumerated behavior list, never key codes.
#[derive(Clone, Debug, Default)]
pub struct InputFrame {
    pub behaviors: Vec<Behavior>,
    pub reset: bool,
}

impl InputFrame {
    /// Poll the keyboard. Holding several behavior keys queues several
    /// behaviors for the same tick, in key order. Reset is level-triggered:
    /// holding key 5 re-pins the craft at the reset pose every frame.
    pub fn poll() -> Self {
        let bindings = [
            (KeyCode::Key1, Behavior::Seek),
            (KeyCode::Key2, Behavior::Flee),
            (KeyCode::Key3, Behavior::Arrive),
            (KeyCode::Key4, Behavior::AvoidObstacle),
        ];

        let behaviors = bindings
            .iter()
            .filter(|(key, _)| is_key_down(*key))
            .map(|(_, behavior)| *behavior)
            .collect();

        Self {
            behaviors,
            reset: is_key_down(KeyCode::Key5),
        }
    }
}
