/*!
Parsing of human-readable key names back into [`KeyEvent`]s. A name is parsed with the same
[`FormatMode`] that was used to render it.
*/
use std::error::Error;
use std::fmt::{Display, Error as FmtError, Formatter};

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{anychar, char, digit1};
use nom::combinator::{all_consuming, map_opt, value};
use nom::multi::fold_many0;
use nom::sequence::{preceded, terminated};
use nom::IResult;

use crate::event::{Key, KeyEvent, KeyMods};
use crate::format::{FormatMode, ModLabels};
use crate::sym::{Sym, FUNCTION_KEY_MAX};

/// Parse a key name such as `C-b`, `Up` or `F5`.
///
/// Modifier prefixes are only recognized in the spelling `mode` selects (`Ctrl-` needs
/// [`FormatMode::LONGMOD`], `M-` needs [`FormatMode::ALTISMETA`], and so on). With
/// [`FormatMode::WRAPBRACKET`] the surrounding `<` and `>` are optional.
pub fn decode(name: &str, mode: FormatMode) -> Result<KeyEvent, DecodeError> {
    let result = decode_unwrapped(unwrap_brackets(name, mode), mode);

    #[cfg(feature = "logging")]
    if let Err(error) = &result {
        log::debug!("{}", error);
    }

    result
}

fn unwrap_brackets(name: &str, mode: FormatMode) -> &str {
    if !mode.contains(FormatMode::WRAPBRACKET) {
        return name;
    }
    name.strip_prefix('<')
        .and_then(|inner| inner.strip_suffix('>'))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(name)
}

fn decode_unwrapped(name: &str, mode: FormatMode) -> Result<KeyEvent, DecodeError> {
    let not_recognized = || DecodeError::NotRecognized {
        name: name.to_string(),
    };

    // A lone `^` is just the caret character.
    if mode.contains(FormatMode::CARETCTRL) && name.starts_with('^') && name.len() > 1 {
        return match caret(name) {
            Ok((_, character)) => Ok(KeyEvent::new(Key::Unicode(character), KeyMods::CTRL)),
            Err(_) => Err(not_recognized()),
        };
    }

    let labels = ModLabels::for_mode(mode);
    let (rest, mods) = modifiers(labels)(name).map_err(|_| not_recognized())?;

    if let Some(sym) = Sym::from_name(rest) {
        return Ok(KeyEvent::new(Key::Sym(sym), mods));
    }

    if let Ok((_, digits)) = function_digits(rest) {
        return match digits.parse::<u32>() {
            Ok(number) if (1..=FUNCTION_KEY_MAX).contains(&number) => {
                Ok(KeyEvent::new(Key::Function(number), mods))
            }
            _ => Err(DecodeError::FunctionOutOfRange {
                name: name.to_string(),
            }),
        };
    }

    match single_char(rest) {
        Ok((_, character)) => Ok(KeyEvent::new(Key::Unicode(character), mods)),
        Err(_) => Err(not_recognized()),
    }
}

/// Any number of modifier names, each followed by the separator.
fn modifiers<'a>(labels: ModLabels) -> impl FnMut(&'a str) -> IResult<&'a str, KeyMods> {
    fold_many0(
        terminated(modifier(labels), char(labels.sep)),
        || KeyMods::NONE,
        |mods, modifier| mods | modifier,
    )
}

fn modifier<'a>(labels: ModLabels) -> impl FnMut(&'a str) -> IResult<&'a str, KeyMods> {
    alt((
        value(KeyMods::ALT, tag(labels.alt)),
        value(KeyMods::CTRL, tag(labels.ctrl)),
        value(KeyMods::SHIFT, tag(labels.shift)),
    ))
}

/// `^X` where `X` is `@`, an uppercase letter, or one of `[\]^_`. Letters come back lowercase.
fn caret(input: &str) -> IResult<&str, char> {
    all_consuming(preceded(
        char('^'),
        map_opt(anychar, |character: char| match character {
            'A'..='Z' => Some(character.to_ascii_lowercase()),
            '@' | '['..='_' => Some(character),
            _ => None,
        }),
    ))(input)
}

fn function_digits(input: &str) -> IResult<&str, &str> {
    all_consuming(preceded(char('F'), digit1))(input)
}

fn single_char(input: &str) -> IResult<&str, char> {
    all_consuming(anychar)(input)
}

/// An error decoding a key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The name does not match any key name pattern.
    NotRecognized { name: String },
    /// The name is a function key name but there is no such function key.
    FunctionOutOfRange { name: String },
}

impl Display for DecodeError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::NotRecognized { name } => {
                write!(formatter, "\"{}\" is not a recognized key name.", name)
            }
            Self::FunctionOutOfRange { name } => {
                write!(
                    formatter,
                    "\"{}\" is not a function key in the range F1 to F{}.",
                    name, FUNCTION_KEY_MAX
                )
            }
        }
    }
}

impl Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::format::format;

    use test_case::test_case;

    fn event(key: Key, mods: KeyMods) -> KeyEvent {
        KeyEvent::new(key, mods)
    }

    #[test_case("A", FormatMode::empty(), event(Key::Unicode('A'), KeyMods::NONE); "plain letter")]
    #[test_case("C-b", FormatMode::empty(), event(Key::Unicode('b'), KeyMods::CTRL); "ctrl")]
    #[test_case("Ctrl-b", FormatMode::LONGMOD, event(Key::Unicode('b'), KeyMods::CTRL); "ctrl longmod")]
    #[test_case("^B", FormatMode::CARETCTRL, event(Key::Unicode('b'), KeyMods::CTRL); "ctrl caretctrl")]
    #[test_case("A-c", FormatMode::empty(), event(Key::Unicode('c'), KeyMods::ALT); "alt")]
    #[test_case("Alt-c", FormatMode::LONGMOD, event(Key::Unicode('c'), KeyMods::ALT); "alt longmod")]
    #[test_case("M-c", FormatMode::ALTISMETA, event(Key::Unicode('c'), KeyMods::ALT); "alt altismeta")]
    #[test_case("Meta-c", FormatMode::ALTISMETA | FormatMode::LONGMOD, event(Key::Unicode('c'), KeyMods::ALT); "alt altismeta longmod")]
    #[test_case("Up", FormatMode::empty(), event(Key::Sym(Sym::Up), KeyMods::NONE); "up")]
    #[test_case("F5", FormatMode::empty(), event(Key::Function(5), KeyMods::NONE); "f5")]
    #[test_case("F", FormatMode::empty(), event(Key::Unicode('F'), KeyMods::NONE); "a lone f is a letter")]
    #[test_case("C-F12", FormatMode::empty(), event(Key::Function(12), KeyMods::CTRL); "ctrl f12")]
    #[test_case("<Up>", FormatMode::WRAPBRACKET, event(Key::Sym(Sym::Up), KeyMods::NONE); "wrapped up")]
    #[test_case("Up", FormatMode::WRAPBRACKET, event(Key::Sym(Sym::Up), KeyMods::NONE); "brackets are optional")]
    #[test_case("<", FormatMode::WRAPBRACKET, event(Key::Unicode('<'), KeyMods::NONE); "lone angle bracket")]
    #[test_case("<C->>", FormatMode::WRAPBRACKET, event(Key::Unicode('>'), KeyMods::CTRL); "wrapped angle bracket")]
    #[test_case("S-C-A-x", FormatMode::empty(), event(Key::Unicode('x'), KeyMods::all()); "modifiers in any order")]
    #[test_case("C--", FormatMode::empty(), event(Key::Unicode('-'), KeyMods::CTRL); "ctrl dash")]
    #[test_case("A-C", FormatMode::empty(), event(Key::Unicode('C'), KeyMods::ALT); "alt uppercase c")]
    #[test_case("-", FormatMode::empty(), event(Key::Unicode('-'), KeyMods::NONE); "dash")]
    #[test_case("^", FormatMode::CARETCTRL, event(Key::Unicode('^'), KeyMods::NONE); "lone caret")]
    #[test_case("^^", FormatMode::CARETCTRL, event(Key::Unicode('^'), KeyMods::CTRL); "caret caret")]
    #[test_case("^@", FormatMode::CARETCTRL, event(Key::Unicode('@'), KeyMods::CTRL); "caret at sign")]
    #[test_case("c m x", FormatMode::SPACEMOD | FormatMode::LOWERMOD | FormatMode::ALTISMETA, event(Key::Unicode('x'), KeyMods::CTRL | KeyMods::ALT); "space separated lowercase meta")]
    #[test_case("C- ", FormatMode::empty(), event(Key::Unicode(' '), KeyMods::CTRL); "ctrl space character")]
    #[test_case("A-é", FormatMode::empty(), event(Key::Unicode('é'), KeyMods::ALT); "alt multibyte")]
    fn test_decode(name: &str, mode: FormatMode, expected: KeyEvent) {
        let decoded = decode(name, mode).unwrap();

        assert_eq!(decoded, expected);
        assert_eq!(decoded.utf8(), expected.utf8());
    }

    #[test]
    fn test_decode_fills_utf8() {
        let decoded = decode("C-b", FormatMode::empty()).unwrap();

        assert_eq!(decoded.utf8().unwrap().as_str(), "b");
    }

    #[test_case("", FormatMode::empty(); "empty")]
    #[test_case("Ctrl-b", FormatMode::empty(); "long modifier without longmod")]
    #[test_case("C-b", FormatMode::LONGMOD; "short modifier with longmod")]
    #[test_case("M-c", FormatMode::empty(); "meta without altismeta")]
    #[test_case("A-c", FormatMode::ALTISMETA; "alt with altismeta")]
    #[test_case("C-", FormatMode::empty(); "modifier without a key")]
    #[test_case("ab", FormatMode::empty(); "two characters")]
    #[test_case("up", FormatMode::empty(); "wrong case")]
    #[test_case("Fx", FormatMode::empty(); "f followed by a letter")]
    #[test_case("F5x", FormatMode::empty(); "trailing characters")]
    #[test_case("^b", FormatMode::CARETCTRL; "caret lowercase")]
    #[test_case("^1", FormatMode::CARETCTRL; "caret digit")]
    #[test_case("^Up", FormatMode::CARETCTRL; "caret symbol")]
    #[test_case("<>", FormatMode::WRAPBRACKET; "empty brackets")]
    #[test_case("<Up>", FormatMode::empty(); "brackets without wrapbracket")]
    #[test_case("^B", FormatMode::empty(); "caret without caretctrl")]
    fn test_decode_not_recognized(name: &str, mode: FormatMode) {
        assert_eq!(
            decode(name, mode),
            Err(DecodeError::NotRecognized {
                name: name.to_string()
            })
        );
    }

    #[test_case("F0"; "zero")]
    #[test_case("F13"; "one past the last")]
    #[test_case("F99"; "far past the last")]
    #[test_case("C-F99"; "with a modifier")]
    #[test_case("F99999999999999999999"; "overflow")]
    fn test_decode_function_out_of_range(name: &str) {
        assert_eq!(
            decode(name, FormatMode::empty()),
            Err(DecodeError::FunctionOutOfRange {
                name: name.to_string()
            })
        );
    }

    fn round_trip_events() -> Vec<KeyEvent> {
        let mut keys: Vec<Key> = vec![];
        keys.extend("aAbBzZ09@[\\]^_-<> ~é€".chars().map(Key::Unicode));
        keys.extend(Sym::ALL.iter().map(|sym| Key::Sym(*sym)));
        keys.extend((1..=FUNCTION_KEY_MAX).map(Key::Function));

        let mut events = vec![];
        for key in keys {
            for bits in 0..=KeyMods::all().bits() {
                events.push(event(key, KeyMods::from_bits_truncate(bits)));
            }
        }
        events
    }

    #[test]
    fn test_round_trip_every_mode() {
        for bits in 0..=FormatMode::all().bits() {
            let mode = FormatMode::from_bits_truncate(bits);
            for event in round_trip_events() {
                let name = event.name(mode);

                assert_eq!(decode(&name, mode), Ok(event), "{:?} {:?}", name, mode);
            }
        }
    }

    #[test]
    fn test_round_trip_through_buffer() {
        let event = event(Key::Sym(Sym::PageUp), KeyMods::CTRL | KeyMods::SHIFT);
        let mode = FormatMode::LONGMOD | FormatMode::WRAPBRACKET;
        let mut buf = [0; 32];

        let len = format(&event, &mut buf, mode);
        let name = std::str::from_utf8(&buf[..len]).unwrap();

        assert_eq!(name, "<Ctrl-Shift-PageUp>");
        assert_eq!(decode(name, mode), Ok(event));
    }
}
