//! Keyboard mapping

use crate::sim::{Command, TickInput};

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    G,
    Escape,
    Other,
}

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Drive(Command),
    ToggleGround,
    Quit,
    None,
}

impl Key {
    pub fn action(self) -> KeyAction {
        match self {
            Key::Left => KeyAction::Drive(Command::TurnLeft),
            Key::Right => KeyAction::Drive(Command::TurnRight),
            Key::Up => KeyAction::Drive(Command::Forward),
            Key::Down => KeyAction::Drive(Command::Backward),
            Key::G => KeyAction::ToggleGround,
            Key::Escape => KeyAction::Quit,
            Key::Other => KeyAction::None,
        }
    }

    /// Parse a key name as typed into the headless driver
    pub fn from_name(name: &str) -> Key {
        match name.trim().to_lowercase().as_str() {
            "left" | "l" => Key::Left,
            "right" | "r" => Key::Right,
            "up" | "u" => Key::Up,
            "down" | "d" => Key::Down,
            "g" => Key::G,
            "esc" | "escape" | "q" | "quit" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Parse a compact script where every character is one key
    pub fn from_script_char(c: char) -> Key {
        Key::from_name(c.encode_utf8(&mut [0; 4]))
    }
}

impl KeyAction {
    /// Simulation input for this action, if it has one
    pub fn to_tick_input(self) -> Option<TickInput> {
        match self {
            KeyAction::Drive(command) => Some(TickInput::command(command)),
            KeyAction::ToggleGround => Some(TickInput {
                toggle_ground: true,
                ..Default::default()
            }),
            KeyAction::Quit | KeyAction::None => None,
        }
    }
}

/// Instructions printed at startup
pub const INTERACTION_HELP: &str = "Interaction:\n\
    Press the left/right arrow keys to turn the car.\n\
    Press the up/down arrow keys to move the car.\n\
    Press g to swap the ground texture, Esc to quit.";
