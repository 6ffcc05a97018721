/*!
The `keyname` commands. Each one writes its output to a writer so that it can be tested.
*/
use std::fmt::{Display, Error as FmtError, Formatter};
use std::io::{Error as IOError, Write};

use keys::{decode, DecodeError, FormatMode, Key, KeyEvent, KeyMods, Sym, FUNCTION_KEY_MAX};

pub type CommandResult = Result<(), CommandError>;

/// Print the escape sequence of each key name.
pub fn raw(names: &[String], mode: FormatMode, writer: &mut dyn Write) -> CommandResult {
    for name in names {
        let event: KeyEvent = decode(name, mode)?;
        let sequence: Vec<u8> = event.raw_sequence();

        #[cfg(feature = "logging")]
        log::info!("Encoded {:?} as {:?}.", event, sequence);

        if sequence.is_empty() {
            writeln!(writer, "{}\t(no terminal sequence)", name)?;
        } else {
            writeln!(writer, "{}\t{}", name, escape(&sequence))?;
        }
    }
    Ok(())
}

/// Print each key name rewritten from the `from` format to the `to` format.
pub fn name(
    names: &[String],
    from: FormatMode,
    to: FormatMode,
    writer: &mut dyn Write,
) -> CommandResult {
    for name in names {
        let event: KeyEvent = decode(name, from)?;
        writeln!(writer, "{}", event.name(to))?;
    }
    Ok(())
}

/// Print every named key and function key with its escape sequence.
pub fn table(mode: FormatMode, writer: &mut dyn Write) -> CommandResult {
    let keys = Sym::ALL
        .iter()
        .map(|sym| Key::Sym(*sym))
        .chain((1..=FUNCTION_KEY_MAX).map(Key::Function));

    for key in keys {
        let event = KeyEvent::new(key, KeyMods::NONE);
        writeln!(
            writer,
            "{:<12}{}",
            event.name(mode),
            escape(&event.raw_sequence())
        )?;
    }
    Ok(())
}

/// Escape control bytes so that a sequence can be printed.
fn escape(sequence: &[u8]) -> String {
    sequence.escape_ascii().to_string()
}

/// An error running a command.
#[derive(Debug)]
pub enum CommandError {
    /// A key name could not be decoded.
    Decode(DecodeError),
    /// Output could not be written.
    Write(IOError),
}

impl From<DecodeError> for CommandError {
    fn from(error: DecodeError) -> Self {
        Self::Decode(error)
    }
}

impl From<IOError> for CommandError {
    fn from(error: IOError) -> Self {
        Self::Write(error)
    }
}

impl Display for CommandError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::Decode(error) => write!(formatter, "{}", error),
            Self::Write(error) => write!(formatter, "Failed to write output: {}", error),
        }
    }
}
