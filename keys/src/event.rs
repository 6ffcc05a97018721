use std::fmt::{Display, Error as FmtError, Formatter};
use std::str::FromStr;

use bitflags::bitflags;

use crate::encode::write_raw;
use crate::format::{write_name, FormatMode};
use crate::parse::{decode, DecodeError};
use crate::sym::Sym;

/// A single key press together with the modifiers held down while it was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub mods: KeyMods,
}

impl KeyEvent {
    pub fn new(key: Key, mods: KeyMods) -> Self {
        Self { key, mods }
    }

    /// Return the UTF-8 form of the codepoint if this is a Unicode key.
    pub fn utf8(&self) -> Option<Utf8> {
        match self.key {
            Key::Unicode(character) => Some(Utf8::new(character)),
            _ => None,
        }
    }

    /// Return the bytes a terminal would send for this key. Keys which have no terminal
    /// encoding give an empty vector.
    pub fn raw_sequence(&self) -> Vec<u8> {
        let mut sequence = String::new();
        // Writing to a `String` cannot fail.
        let _ = write_raw(self, &mut sequence);
        sequence.into_bytes()
    }

    /// Return the human-readable name of this key rendered with the given format mode.
    pub fn name(&self, mode: FormatMode) -> String {
        let mut name = String::new();
        let _ = write_name(self, mode, &mut name);
        name
    }
}

impl Display for KeyEvent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        write_name(self, FormatMode::empty(), formatter)
    }
}

impl FromStr for KeyEvent {
    type Err = DecodeError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        decode(string, FormatMode::empty())
    }
}

impl TryFrom<&KeyEvent> for Vec<u8> {
    type Error = KeyEventToBytesError;

    fn try_from(event: &KeyEvent) -> Result<Self, Self::Error> {
        let bytes = event.raw_sequence();
        if bytes.is_empty() {
            return Err(KeyEventToBytesError::NotRepresentable(*event));
        }
        Ok(bytes)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum KeyEventToBytesError {
    /// The key has no terminal encoding (an unknown key or an unmapped function key).
    NotRepresentable(KeyEvent),
}

impl Display for KeyEventToBytesError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::NotRepresentable(event) => {
                write!(
                    formatter,
                    "The key {:?} with modifiers {:?} has no terminal encoding.",
                    event.key, event.mods
                )
            }
        }
    }
}

impl std::error::Error for KeyEventToBytesError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A Unicode character.
    Unicode(char),
    /// A named key such as an arrow key or Enter.
    Sym(Sym),
    /// A function key (F1 is `Function(1)`).
    Function(u32),
    /// A byte that could not be classified as a key.
    Unknown(u8),
}

bitflags! {
    /// Key modifiers.
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct KeyMods: u8 {
        const NONE = 0b0000_0000;
        const SHIFT = 0b0000_0001;
        const ALT = 0b0000_0010;
        const CTRL = 0b0000_0100;
    }
}

impl KeyMods {
    /// The modifier parameter used in CSI sequences. A value of 1 means no modifiers, so the
    /// parameter is always one more than the bits.
    pub fn csi_param(self) -> u32 {
        1 + u32::from(self.bits())
    }
}

/// The UTF-8 encoding of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8 {
    bytes: [u8; 4],
    len: usize,
}

impl Utf8 {
    pub fn new(character: char) -> Self {
        let mut bytes = [0; 4];
        let len = character.encode_utf8(&mut bytes).len();
        Self { bytes, len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // The bytes always come from `char::encode_utf8` and so we don't need to check them.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(KeyMods::NONE, 1; "no modifiers")]
    #[test_case(KeyMods::SHIFT, 2; "shift")]
    #[test_case(KeyMods::ALT, 3; "alt")]
    #[test_case(KeyMods::CTRL, 5; "ctrl")]
    #[test_case(KeyMods::CTRL | KeyMods::ALT | KeyMods::SHIFT, 8; "every modifier")]
    fn test_csi_param(mods: KeyMods, expected: u32) {
        assert_eq!(mods.csi_param(), expected);
    }

    #[test_case('A', b"A"; "ascii")]
    #[test_case('é', &[0xC3, 0xA9]; "two bytes")]
    #[test_case('€', &[0xE2, 0x82, 0xAC]; "three bytes")]
    #[test_case('😀', &[0xF0, 0x9F, 0x98, 0x80]; "four bytes")]
    fn test_utf8(character: char, expected: &[u8]) {
        let event = KeyEvent::new(Key::Unicode(character), KeyMods::NONE);
        let utf8 = event.utf8().unwrap();

        assert_eq!(utf8.as_bytes(), expected);
        assert_eq!(utf8.as_str().chars().collect::<Vec<char>>(), vec![character]);
    }

    #[test]
    fn test_utf8_of_non_unicode_key() {
        let event = KeyEvent::new(Key::Function(1), KeyMods::NONE);

        assert_eq!(event.utf8(), None);
    }

    #[test]
    fn test_try_into_bytes() {
        let event = KeyEvent::new(Key::Sym(Sym::Up), KeyMods::NONE);
        let bytes: Result<Vec<u8>, KeyEventToBytesError> = (&event).try_into();

        assert_eq!(bytes, Ok(b"\x1b[A".to_vec()));
    }

    #[test]
    fn test_try_into_bytes_not_representable() {
        let event = KeyEvent::new(Key::Function(13), KeyMods::NONE);
        let bytes: Result<Vec<u8>, KeyEventToBytesError> = (&event).try_into();

        assert_eq!(bytes, Err(KeyEventToBytesError::NotRepresentable(event)));
    }

    #[test]
    fn test_display_and_from_str() {
        let event = KeyEvent::new(Key::Unicode('x'), KeyMods::CTRL | KeyMods::ALT);

        assert_eq!(event.to_string(), "A-C-x");
        assert_eq!("A-C-x".parse::<KeyEvent>(), Ok(event));
    }
}
