/*!
Conversion between key events and the strings that stand for them in a terminal: the escape
sequences a terminal sends ([`encode`]) and short human-readable names such as `C-b` or `<Up>`
([`format`] and [`decode`]).
*/
#![allow(clippy::needless_return)]

mod buffer;
mod encode;
mod event;
mod format;
mod parse;
mod sym;

pub use crate::encode::encode;
pub use crate::event::{Key, KeyEvent, KeyEventToBytesError, KeyMods, Utf8};
pub use crate::format::{format, FormatMode};
pub use crate::parse::{decode, DecodeError};
pub use crate::sym::{function_seq, SeqCategory, Sym, SymEntry, FUNCTION_KEY_MAX};

#[macro_use]
extern crate lazy_static;
