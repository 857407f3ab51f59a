//! Character sources for the scanner.
//!
//! A [`Source`] hands out one `char` at a time. Sources over raw bytes decode
//! UTF-8 themselves and report bytes that do not decode as
//! [`ReadError::InvalidUtf8`]; the scanner turns that into a malformed-input
//! error at the current location. Failures of the underlying reader are
//! reported as [`ReadError::Source`] and surface to the caller unchanged.

use core::convert::Infallible;

/// A failure to produce the next character.
#[derive(Debug)]
pub enum ReadError<E> {
    /// The next bytes are not valid UTF-8.
    InvalidUtf8,
    /// The underlying source failed.
    Source(E),
}

/// A stream of characters.
pub trait Source {
    /// The error of the underlying source; `Infallible` for in-memory input.
    type Error;

    /// Returns the next character, or `None` at the end of input.
    ///
    /// # Errors
    ///
    /// Fails when the next bytes are not valid UTF-8, or when the underlying
    /// source fails.
    fn next_char(&mut self) -> Result<Option<char>, ReadError<Self::Error>>;
}

impl<S: Source + ?Sized> Source for &mut S {
    type Error = S::Error;

    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, ReadError<Self::Error>> {
        (**self).next_char()
    }
}

/// Characters of a string slice.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: core::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Reads `input` from the start.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
        }
    }
}

impl Source for StrSource<'_> {
    type Error = Infallible;

    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, ReadError<Infallible>> {
        Ok(self.chars.next())
    }
}

/// Characters decoded from a byte slice that should hold UTF-8.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Reads `input` from the start.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self { bytes: input }
    }
}

impl Source for SliceSource<'_> {
    type Error = Infallible;

    fn next_char(&mut self) -> Result<Option<char>, ReadError<Infallible>> {
        if self.bytes.is_empty() {
            return Ok(None);
        }
        match bstr::decode_utf8(self.bytes) {
            (Some(ch), len) => {
                self.bytes = &self.bytes[len..];
                Ok(Some(ch))
            }
            (None, _) => Err(ReadError::InvalidUtf8),
        }
    }
}

#[cfg(feature = "std")]
pub use reader::ReaderSource;

#[cfg(feature = "std")]
mod reader {
    use alloc::{vec, vec::Vec};
    use std::io::{self, Read};

    use super::{ReadError, Source};

    const DEFAULT_CAPACITY: usize = 1024;
    /// Longest UTF-8 encoding of a single character.
    const MAX_CHAR_LEN: usize = 4;

    /// Characters decoded from a [`Read`]er.
    ///
    /// Input is read in chunks into an internal buffer, so wrapping the reader
    /// in a [`std::io::BufReader`] is unnecessary. A character split across
    /// two reads is reassembled before decoding.
    #[derive(Debug)]
    pub struct ReaderSource<R> {
        reader: R,
        buf: Vec<u8>,
        pos: usize,
        filled: usize,
        eof: bool,
    }

    impl<R: Read> ReaderSource<R> {
        /// Reads from `reader` with a 1 KiB buffer.
        pub fn new(reader: R) -> Self {
            Self::with_capacity(reader, DEFAULT_CAPACITY)
        }

        /// Reads from `reader` with a buffer of `capacity` bytes (at least 4).
        pub fn with_capacity(reader: R, capacity: usize) -> Self {
            Self {
                reader,
                buf: vec![0; capacity.max(MAX_CHAR_LEN)],
                pos: 0,
                filled: 0,
                eof: false,
            }
        }

        /// Returns the wrapped reader.
        ///
        /// Bytes that were buffered but not yet consumed are lost.
        pub fn into_inner(self) -> R {
            self.reader
        }

        /// Makes sure at least one whole character is buffered, unless the
        /// reader is exhausted.
        fn fill(&mut self) -> io::Result<()> {
            while !self.eof && self.filled - self.pos < MAX_CHAR_LEN {
                if self.pos > 0 {
                    self.buf.copy_within(self.pos..self.filled, 0);
                    self.filled -= self.pos;
                    self.pos = 0;
                }
                match self.reader.read(&mut self.buf[self.filled..]) {
                    Ok(0) => self.eof = true,
                    Ok(n) => {
                        log::trace!("read {n} bytes of input");
                        self.filled += n;
                    }
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                    Err(err) => return Err(err),
                }
            }
            Ok(())
        }
    }

    impl<R: Read> Source for ReaderSource<R> {
        type Error = io::Error;

        fn next_char(&mut self) -> Result<Option<char>, ReadError<io::Error>> {
            self.fill().map_err(ReadError::Source)?;
            let pending = &self.buf[self.pos..self.filled];
            if pending.is_empty() {
                return Ok(None);
            }
            match bstr::decode_utf8(pending) {
                (Some(ch), len) => {
                    self.pos += len;
                    Ok(Some(ch))
                }
                (None, _) => Err(ReadError::InvalidUtf8),
            }
        }
    }
}
