/*!
The measure-or-write contract shared by [`crate::encode`] and [`crate::format`].

A render function is run once against a [`Counter`] to find the full length. Only if that
length fits (leaving room for a trailing `0`) is it run again against the caller's buffer, so a
buffer that is too small is never partially overwritten.
*/
use std::fmt::{Error as FmtError, Result as FmtResult, Write};

/// Render into `buf` if it is large enough and return the full length of the rendering.
///
/// When the returned length is less than `buf.len()`, `buf` holds the rendering followed by a
/// `0`. Otherwise `buf` is left untouched and the caller can retry with a larger buffer.
pub fn measure_or_write<F>(buf: &mut [u8], render: F) -> usize
where
    F: Fn(&mut dyn Write) -> FmtResult,
{
    let mut counter = Counter::default();
    if render(&mut counter).is_err() {
        return 0;
    }
    let required = counter.len;

    if required < buf.len() {
        let mut writer = SliceWriter { buf, pos: 0 };
        if render(&mut writer).is_ok() {
            let end = writer.pos;
            writer.buf[end] = 0;
        }
    }

    required
}

/// Counts the bytes written to it.
#[derive(Default)]
struct Counter {
    len: usize,
}

impl Write for Counter {
    fn write_str(&mut self, string: &str) -> FmtResult {
        self.len += string.len();
        Ok(())
    }
}

/// Writes into a byte slice, failing rather than writing past its end.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, string: &str) -> FmtResult {
        let end = self.pos + string.len();
        // Keep one byte free for the terminator.
        if end >= self.buf.len() {
            return Err(FmtError);
        }
        self.buf[self.pos..end].copy_from_slice(string.as_bytes());
        self.pos = end;
        Ok(())
    }
}
