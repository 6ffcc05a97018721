/*!
Human-readable key names such as `C-b`, `<Up>` or `Meta-c`.
*/
use std::fmt::{Result as FmtResult, Write};

use bitflags::bitflags;

use crate::buffer::measure_or_write;
use crate::event::{Key, KeyEvent, KeyMods};

bitflags! {
    /// Options for rendering and parsing key names. The empty mode gives names like `C-b`.
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
    pub struct FormatMode: u8 {
        /// Use `Ctrl-`, `Alt-` and `Shift-` instead of `C-`, `A-` and `S-`.
        const LONGMOD = 0b0000_0001;
        /// Use `^B` for Ctrl plus a letter (or one of `@[\]^_`).
        const CARETCTRL = 0b0000_0010;
        /// Call the Alt modifier Meta (`M-` or `Meta-`).
        const ALTISMETA = 0b0000_0100;
        /// Wrap names of modified or non-character keys in `<` and `>`.
        const WRAPBRACKET = 0b0000_1000;
        /// Separate modifiers with a space instead of a `-`.
        const SPACEMOD = 0b0001_0000;
        /// Use lowercase modifier names.
        const LOWERMOD = 0b0010_0000;
    }
}

/// The modifier names for a format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModLabels {
    pub shift: &'static str,
    pub alt: &'static str,
    pub ctrl: &'static str,
    pub sep: char,
}

impl ModLabels {
    pub fn for_mode(mode: FormatMode) -> Self {
        let meta = mode.contains(FormatMode::ALTISMETA);
        let (shift, alt, ctrl) = match (
            mode.contains(FormatMode::LONGMOD),
            mode.contains(FormatMode::LOWERMOD),
        ) {
            (false, false) => ("S", if meta { "M" } else { "A" }, "C"),
            (false, true) => ("s", if meta { "m" } else { "a" }, "c"),
            (true, false) => ("Shift", if meta { "Meta" } else { "Alt" }, "Ctrl"),
            (true, true) => ("shift", if meta { "meta" } else { "alt" }, "ctrl"),
        };
        let sep = if mode.contains(FormatMode::SPACEMOD) {
            ' '
        } else {
            '-'
        };

        Self {
            shift,
            alt,
            ctrl,
            sep,
        }
    }
}

/// Write the name of `event` into `buf` and return the length of the full name.
///
/// Uses the same buffer contract as [`crate::encode`]: the name and a trailing `0` are written
/// only if the returned length is less than `buf.len()`.
pub fn format(event: &KeyEvent, buf: &mut [u8], mode: FormatMode) -> usize {
    measure_or_write(buf, |writer| write_name(event, mode, writer))
}

pub(crate) fn write_name<W: Write + ?Sized>(
    event: &KeyEvent,
    mode: FormatMode,
    writer: &mut W,
) -> FmtResult {
    let KeyEvent { key, mods } = *event;

    if let Key::Unknown(_) = key {
        return Ok(());
    }

    // A lone character is never wrapped so that `<` and `>` keep their plain names.
    let wrap = mode.contains(FormatMode::WRAPBRACKET)
        && !(matches!(key, Key::Unicode(_)) && mods.is_empty());
    if wrap {
        writer.write_char('<')?;
    }

    if let Some(caret) = caret_form(event, mode) {
        writer.write_char('^')?;
        writer.write_char(caret)?;
    } else {
        let labels = ModLabels::for_mode(mode);
        for (flag, label) in [
            (KeyMods::ALT, labels.alt),
            (KeyMods::CTRL, labels.ctrl),
            (KeyMods::SHIFT, labels.shift),
        ] {
            if mods.contains(flag) {
                writer.write_str(label)?;
                writer.write_char(labels.sep)?;
            }
        }

        match key {
            Key::Unicode(character) => writer.write_char(character)?,
            Key::Sym(sym) => writer.write_str(sym.name())?,
            Key::Function(number) => write!(writer, "F{}", number)?,
            Key::Unknown(_) => {}
        }
    }

    if wrap {
        writer.write_char('>')?;
    }
    Ok(())
}

/// Return the character to put after `^` if the event is written in caret notation.
fn caret_form(event: &KeyEvent, mode: FormatMode) -> Option<char> {
    if !mode.contains(FormatMode::CARETCTRL) || event.mods != KeyMods::CTRL {
        return None;
    }
    match event.key {
        Key::Unicode(character @ 'a'..='z') => Some(character.to_ascii_uppercase()),
        Key::Unicode(character @ ('@' | '['..='_')) => Some(character),
        _ => None,
    }
}
