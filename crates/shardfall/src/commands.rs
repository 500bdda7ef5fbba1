//! Keyboard bindings.

use shardfall_engine::input::{Key, KeyPress};

use crate::bias::Channel;

/// User command decoded from a key press.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Pause or resume the animation.
    Toggle,
    Bump(Channel),
    Quit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(Command::Toggle),
            Key::R => Some(Command::Bump(Channel::Red)),
            Key::G => Some(Command::Bump(Channel::Green)),
            Key::B => Some(Command::Bump(Channel::Blue)),
            Key::Escape => Some(Command::Quit),
            _ => None,
        }
    }

    /// Decodes a key press, auto-repeats included.
    ///
    /// Holding a channel key keeps bumping it. Toggle and quit only react to
    /// the initial press, so a held Space does not flicker the pause state.
    pub fn from_press(press: KeyPress) -> Option<Self> {
        match Self::from_key(press.key)? {
            bump @ Command::Bump(_) => Some(bump),
            other if !press.repeat => Some(other),
            _ => None,
        }
    }
}
