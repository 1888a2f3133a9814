//! Byte sources the decoder can read from.
//!
//! A source has one job: produce exactly the requested number of bytes, or
//! fail. Reads are forward-only, nothing is ever seeked or unread. Two
//! failure kinds are distinguished so callers can tell a truncated document
//! ([`ErrorKind::PrematureEnd`][crate::error::ErrorKind]) from a faulty
//! source ([`ErrorKind::Transport`][crate::error::ErrorKind]).

use std::io::Read;

use crate::error::{Error, Result};

/// A forward-only byte source.
pub trait Input {
    /// Fill `buf` completely from the source, or fail.
    ///
    /// Fails with `PrematureEnd` if the source runs out of data first, and
    /// `Transport` if the source reports any other problem. On failure the
    /// contents of `buf` are unspecified.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// A source over an in-memory byte slice.
pub struct Slice<'a> {
    data: &'a [u8],
}

impl<'a> Slice<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl<'a> Input for Slice<'a> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.len() <= self.data.len() {
            let (head, rest) = self.data.split_at(buf.len());
            buf.copy_from_slice(head);
            self.data = rest;
            Ok(())
        } else {
            Err(Error::premature_end())
        }
    }
}

/// A source wrapping any [`std::io::Read`].
///
/// For unbuffered readers such as [`std::fs::File`] you probably want to
/// wrap in a [`std::io::BufReader`] first, since the decoder issues many
/// small reads.
pub struct Reader<R: Read> {
    reader: R,
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consumes this source, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Input for Reader<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        // io::Read::read_exact reports running out of data as UnexpectedEof,
        // which From<io::Error> maps to PrematureEnd.
        Ok(self.reader.read_exact(buf)?)
    }
}
