use super::types::{InputEvent, KeyPress, KeyState};

/// Input events received since the previous frame.
///
/// The runtime fills it from window events and clears it once the frame
/// callback has returned.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Key presses in arrival order, auto-repeats included and flagged.
    pub fn key_presses(&self) -> impl Iterator<Item = KeyPress> + '_ {
        self.events.iter().filter_map(|ev| match *ev {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat,
            } => Some(KeyPress { key, repeat }),
            InputEvent::Key { state: KeyState::Released, .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    fn press(key: Key, repeat: bool) -> KeyPress {
        KeyPress { key, repeat }
    }

    #[test]
    fn key_presses_keep_order_and_flag_repeats() {
        let mut frame = InputFrame::default();
        frame.push_event(key(Key::R, KeyState::Pressed, false));
        frame.push_event(key(Key::R, KeyState::Pressed, true));
        frame.push_event(key(Key::R, KeyState::Released, false));
        frame.push_event(key(Key::G, KeyState::Pressed, false));
        frame.push_event(key(Key::R, KeyState::Pressed, false));

        assert_eq!(
            frame.key_presses().collect::<Vec<_>>(),
            vec![
                press(Key::R, false),
                press(Key::R, true),
                press(Key::G, false),
                press(Key::R, false),
            ]
        );
    }

    #[test]
    fn clear_drops_events() {
        let mut frame = InputFrame::default();
        frame.push_event(key(Key::Space, KeyState::Pressed, false));
        frame.clear();
        assert!(frame.events.is_empty());
        assert_eq!(frame.key_presses().count(), 0);
    }
}
