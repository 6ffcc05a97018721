/*!
Static key tables: the named symbols with their terminal sequences, the function key
sequences, and the set of control bytes that already belong to a named symbol.
*/
use std::collections::HashMap;

/// The CSI introducer `<Esc> [`.
pub const CSI: &str = "\x1b[";

/// The highest function key with a terminal sequence.
pub const FUNCTION_KEY_MAX: u32 = 12;

/// Named keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sym {
    Backspace,
    Tab,
    Enter,
    Escape,
    Space,
    /// The DEL byte (0x7F) as sent by most backspace keys.
    Del,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Insert,
    /// The delete key of the editing keypad.
    Delete,
    PageUp,
    PageDown,
}

/// How modifiers get folded into the sequence of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqCategory {
    /// A single C0 byte. Alt prefixes `<Esc>`, other modifiers use the CSI `u` form.
    C0,
    /// A single C0 byte that always needs the CSI `u` form once modified.
    C0Reformat,
    /// `<Esc> [ <n> ~`, modified as `<Esc> [ <n> ; <mods> ~`.
    Tilde,
    /// `<Esc> [ <letter>`, modified as `<Esc> [ 1 ; <mods> <letter>`.
    Arrow,
}

/// The table entry of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymEntry {
    pub name: &'static str,
    pub seq: &'static str,
    pub category: SeqCategory,
}

impl Sym {
    /// Every symbol, in table order.
    pub const ALL: [Sym; 16] = [
        Sym::Backspace,
        Sym::Tab,
        Sym::Enter,
        Sym::Escape,
        Sym::Space,
        Sym::Del,
        Sym::Up,
        Sym::Down,
        Sym::Left,
        Sym::Right,
        Sym::Home,
        Sym::End,
        Sym::Insert,
        Sym::Delete,
        Sym::PageUp,
        Sym::PageDown,
    ];

    pub fn entry(self) -> SymEntry {
        use SeqCategory::*;

        let (name, seq, category) = match self {
            Sym::Backspace => ("Backspace", "\x08", C0),
            Sym::Tab => ("Tab", "\x09", C0),
            Sym::Enter => ("Enter", "\x0d", C0),
            Sym::Escape => ("Escape", "\x1b", C0Reformat),
            Sym::Space => ("Space", "\x20", C0),
            Sym::Del => ("DEL", "\x7f", C0),
            Sym::Up => ("Up", "\x1b[A", Arrow),
            Sym::Down => ("Down", "\x1b[B", Arrow),
            Sym::Left => ("Left", "\x1b[D", Arrow),
            Sym::Right => ("Right", "\x1b[C", Arrow),
            Sym::Home => ("Home", "\x1b[H", Arrow),
            Sym::End => ("End", "\x1b[F", Arrow),
            Sym::Insert => ("Insert", "\x1b[2~", Tilde),
            Sym::Delete => ("Delete", "\x1b[3~", Tilde),
            Sym::PageUp => ("PageUp", "\x1b[5~", Tilde),
            Sym::PageDown => ("PageDown", "\x1b[6~", Tilde),
        };

        SymEntry {
            name,
            seq,
            category,
        }
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Look up a symbol by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Sym> {
        SYMS_BY_NAME.get(name).copied()
    }
}

/// Function key sequences for F1 through F12. The numbering of the codes skips 16 and 22.
const FUNCTION_SEQS: [&str; FUNCTION_KEY_MAX as usize] = [
    "\x1b[11~", "\x1b[12~", "\x1b[13~", "\x1b[14~", "\x1b[15~", "\x1b[17~", "\x1b[18~",
    "\x1b[19~", "\x1b[20~", "\x1b[21~", "\x1b[23~", "\x1b[24~",
];

/// Return the sequence of a function key, or `None` if the number has no sequence.
pub fn function_seq(number: u32) -> Option<&'static str> {
    if !(1..=FUNCTION_KEY_MAX).contains(&number) {
        return None;
    }
    FUNCTION_SEQS.get(number as usize - 1).copied()
}

/// Return whether Ctrl plus the (uppercase) character `byte` has to be left alone because the
/// control byte it would produce already is a named symbol (`H` is Backspace, `I` is Tab, `M`
/// is Enter, and `[` is Escape).
pub fn is_ctrl_exception(byte: u8) -> bool {
    CTRL_EXCEPTIONS[usize::from(byte)]
}

lazy_static! {

    /// Symbols keyed by name.
    static ref SYMS_BY_NAME: HashMap<&'static str, Sym> = {
        Sym::ALL.iter().map(|sym| (sym.name(), *sym)).collect()
    };

    /// Flags for the bytes whose Ctrl form is shadowed by a single byte C0 symbol.
    static ref CTRL_EXCEPTIONS: [bool; 256] = {
        let mut exceptions = [false; 256];
        for sym in Sym::ALL {
            let SymEntry { seq, category, .. } = sym.entry();
            if !matches!(category, SeqCategory::C0 | SeqCategory::C0Reformat) {
                continue;
            }
            if let [byte] = seq.as_bytes() {
                if *byte < 0x20 {
                    exceptions[usize::from(*byte + 0x40)] = true;
                }
            }
        }
        exceptions
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test]
    fn test_names_are_unique() {
        assert_eq!(SYMS_BY_NAME.len(), Sym::ALL.len());
    }

    #[test]
    fn test_from_name_of_every_symbol() {
        for sym in Sym::ALL {
            assert_eq!(Sym::from_name(sym.name()), Some(sym));
        }
    }

    #[test_case("up"; "wrong case")]
    #[test_case("Del"; "wrong case of DEL")]
    #[test_case("PgUp"; "unknown name")]
    #[test_case(""; "empty")]
    fn test_from_name_unknown(name: &str) {
        assert_eq!(Sym::from_name(name), None);
    }

    #[test]
    fn test_single_byte_categories() {
        for sym in Sym::ALL {
            let SymEntry { seq, category, .. } = sym.entry();
            match category {
                SeqCategory::C0 | SeqCategory::C0Reformat => assert_eq!(seq.len(), 1),
                SeqCategory::Tilde => assert!(seq.starts_with(CSI) && seq.ends_with('~')),
                SeqCategory::Arrow => assert!(seq.starts_with(CSI) && seq.len() == 3),
            }
        }
    }

    #[test_case(1, Some("\x1b[11~"); "f1")]
    #[test_case(5, Some("\x1b[15~"); "f5")]
    #[test_case(6, Some("\x1b[17~"); "f6 skips 16")]
    #[test_case(11, Some("\x1b[23~"); "f11 skips 22")]
    #[test_case(12, Some("\x1b[24~"); "f12")]
    #[test_case(0, None; "zero")]
    #[test_case(13, None; "past the table")]
    fn test_function_seq(number: u32, expected: Option<&str>) {
        assert_eq!(function_seq(number), expected);
    }

    #[test]
    fn test_ctrl_exceptions() {
        let exceptions: Vec<u8> = (0..=255).filter(|byte| is_ctrl_exception(*byte)).collect();

        assert_eq!(exceptions, vec![b'H', b'I', b'M', b'[']);
    }
}
