//! Input mapping
//!
//! Key presses, primary clicks and touches on the play surface all map to
//! the same launch command.

use crate::config::GameConfig;
use crate::sim::Command;

/// Primary mouse button (`MouseEvent.button`)
pub const PRIMARY_BUTTON: i16 = 0;

/// Raw input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent<'a> {
    /// `keydown` with its `KeyboardEvent.key` value
    KeyDown { key: &'a str },
    /// `click` on the play surface
    Click { button: i16 },
    /// `touchstart` on the play surface
    TouchStart,
}

/// What the host should do with an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Command),
    ToggleDemo,
}

/// Map a raw input to an action, if it is bound to one
pub fn map_input(config: &GameConfig, event: &InputEvent) -> Option<Action> {
    match *event {
        InputEvent::KeyDown { key } => {
            if config.fire_keys.iter().any(|k| k == key) {
                Some(Action::Game(Command::Launch))
            } else if config.pause_keys.iter().any(|k| k == key) {
                Some(Action::Game(Command::TogglePause))
            } else if key.eq_ignore_ascii_case(&config.demo_key) {
                Some(Action::ToggleDemo)
            } else {
                None
            }
        }
        InputEvent::Click { button } if button == PRIMARY_BUTTON => {
            Some(Action::Game(Command::Launch))
        }
        InputEvent::Click { .. } => None,
        InputEvent::TouchStart => Some(Action::Game(Command::Launch)),
    }
}
