/*!
Encoding of [`KeyEvent`]s into the byte sequences a terminal sends for them.
*/
use std::fmt::{Result as FmtResult, Write};

use crate::buffer::measure_or_write;
use crate::event::{Key, KeyEvent, KeyMods};
use crate::sym::{function_seq, is_ctrl_exception, SeqCategory, Sym, SymEntry, CSI};

/// Write the terminal sequence for `event` into `buf` and return the length of the full sequence.
///
/// If the returned length is less than `buf.len()` then `buf` holds the sequence followed by a
/// `0`. Otherwise `buf` is left untouched. Keys without a terminal sequence (unknown keys and
/// function keys outside F1 to F12) have a length of 0.
pub fn encode(event: &KeyEvent, buf: &mut [u8]) -> usize {
    measure_or_write(buf, |writer| write_raw(event, writer))
}

pub(crate) fn write_raw<W: Write + ?Sized>(event: &KeyEvent, writer: &mut W) -> FmtResult {
    let KeyEvent { key, mods } = *event;
    match key {
        Key::Unicode(character) => write_unicode(character, mods, writer),
        Key::Sym(sym) => write_sym(sym, mods, writer),
        Key::Function(number) => match function_seq(number) {
            Some(seq) if mods.is_empty() => writer.write_str(seq),
            Some(seq) => write_modified_tilde(seq, mods, writer),
            None => Ok(()),
        },
        Key::Unknown(_) => Ok(()),
    }
}

fn write_unicode<W: Write + ?Sized>(character: char, mods: KeyMods, writer: &mut W) -> FmtResult {
    if mods.is_empty() {
        return writer.write_char(character);
    }

    if mods == KeyMods::CTRL {
        if let Some(byte) = ctrl_byte(character) {
            return writer.write_char(char::from(byte));
        }
    }

    if mods == KeyMods::ALT {
        writer.write_char('\x1b')?;
        return writer.write_char(character);
    }

    write!(writer, "{}{};{}u", CSI, u32::from(character), mods.csi_param())
}

/// Return the C0 byte for Ctrl plus `character`, if there is one that doesn't belong to a named
/// symbol.
fn ctrl_byte(character: char) -> Option<u8> {
    let upper = character.to_ascii_uppercase();
    let code = u8::try_from(upper).ok()?;
    if (0x40..=0x5F).contains(&code) && !is_ctrl_exception(code) {
        Some(code - 0x40)
    } else {
        None
    }
}

fn write_sym<W: Write + ?Sized>(sym: Sym, mods: KeyMods, writer: &mut W) -> FmtResult {
    let SymEntry { seq, category, .. } = sym.entry();

    if mods.is_empty() {
        return writer.write_str(seq);
    }

    match category {
        SeqCategory::C0 if mods == KeyMods::ALT => {
            writer.write_char('\x1b')?;
            writer.write_str(seq)
        }
        SeqCategory::C0 | SeqCategory::C0Reformat => {
            let byte = seq.as_bytes().first().copied().unwrap_or_default();
            write!(writer, "{}{};{}u", CSI, byte, mods.csi_param())
        }
        SeqCategory::Tilde => write_modified_tilde(seq, mods, writer),
        SeqCategory::Arrow => {
            let letter = seq.strip_prefix(CSI).unwrap_or(seq);
            write!(writer, "{}1;{}{}", CSI, mods.csi_param(), letter)
        }
    }
}

/// Turn `<Esc> [ <n> ~` into `<Esc> [ <n> ; <mods> ~`.
fn write_modified_tilde<W: Write + ?Sized>(seq: &str, mods: KeyMods, writer: &mut W) -> FmtResult {
    let prefix = seq.strip_suffix('~').unwrap_or(seq);
    write!(writer, "{};{}~", prefix, mods.csi_param())
}
