use serde::{Deserialize, Serialize};

use crate::event::InputEvent;

/// Logical key identifier for a decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    UpArrow,
    DownArrow,
    RightArrow,
    LeftArrow,
    Begin,
    End,
    Home,
    Insert,
    Delete,
    PageUp,
    PageDown,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    Tab,
    Enter,
    Escape,
    Space,
    Backspace,
}

/// Map a decoded event to the key it represents, if any.
///
/// Pure lookup over the common xterm keyboard encodings: C0 characters with
/// a dedicated key, `CSI`-encoded navigation and function keys, and the
/// `SS3` encodings sent in application keypad/cursor modes. Printables and
/// unrecognized sequences map to `None`.
#[must_use]
pub fn key_for(event: &InputEvent) -> Option<Key> {
    match event {
        InputEvent::Char(c) => match c {
            '\r' => Some(Key::Enter),
            '\t' => Some(Key::Tab),
            '\x1b' => Some(Key::Escape),
            ' ' => Some(Key::Space),
            '\x7f' => Some(Key::Backspace),
            _ => None,
        },

        InputEvent::Csi(seq)
            if seq.private_markers.is_empty() && seq.intermediates.is_empty() =>
        {
            match seq.final_byte {
                b'A' => Some(Key::UpArrow),
                b'B' => Some(Key::DownArrow),
                b'C' => Some(Key::RightArrow),
                b'D' => Some(Key::LeftArrow),
                b'E' => Some(Key::Begin),
                b'F' => Some(Key::End),
                b'H' => Some(Key::Home),
                b'~' => match seq.params.as_slice() {
                    b"1" => Some(Key::Home),
                    b"2" => Some(Key::Insert),
                    b"3" => Some(Key::Delete),
                    b"4" => Some(Key::End),
                    b"5" => Some(Key::PageUp),
                    b"6" => Some(Key::PageDown),
                    b"15" => Some(Key::F5),
                    b"17" => Some(Key::F6),
                    b"18" => Some(Key::F7),
                    b"19" => Some(Key::F8),
                    b"20" => Some(Key::F9),
                    b"21" => Some(Key::F10),
                    b"23" => Some(Key::F11),
                    b"24" => Some(Key::F12),
                    b"25" => Some(Key::F13),
                    b"26" => Some(Key::F14),
                    b"28" => Some(Key::F15),
                    b"29" => Some(Key::F16),
                    b"31" => Some(Key::F17),
                    b"32" => Some(Key::F18),
                    b"33" => Some(Key::F19),
                    b"34" => Some(Key::F20),
                    _ => None,
                },
                _ => None,
            }
        },

        InputEvent::Ss3(c) => match c {
            ' ' => Some(Key::Space),
            'A' => Some(Key::UpArrow),
            'B' => Some(Key::DownArrow),
            'C' => Some(Key::RightArrow),
            'D' => Some(Key::LeftArrow),
            'F' => Some(Key::End),
            'H' => Some(Key::Home),
            'I' => Some(Key::Tab),
            'M' => Some(Key::Enter),
            'P' => Some(Key::F1),
            'Q' => Some(Key::F2),
            'R' => Some(Key::F3),
            'S' => Some(Key::F4),
            _ => None,
        },

        _ => None,
    }
}
