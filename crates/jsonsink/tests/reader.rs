#![expect(missing_docs)]

mod common;

use std::io::{self, Cursor, Read};

use common::{DOCUMENT, init_logging};
use jsonsink::{DomBuilder, Error, ErrorKind, Parser, ReaderSource, from_reader, from_str};

/// Yields one byte per read, with an interruption before each.
struct Drip<'a> {
    bytes: &'a [u8],
    interrupt: bool,
}

impl Read for Drip<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let Some((&first, rest)) = self.bytes.split_first() else {
            return Ok(0);
        };
        buf[0] = first;
        self.bytes = rest;
        Ok(1)
    }
}

/// Fails once `limit` bytes have been read.
struct Broken<'a> {
    inner: Cursor<&'a [u8]>,
    limit: u64,
}

impl Read for Broken<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.inner.position() >= self.limit {
            return Err(io::Error::other("connection reset"));
        }
        self.inner.read(buf)
    }
}

#[test]
fn reader_matches_in_memory_parse() {
    init_logging();
    let value = from_reader(Cursor::new(DOCUMENT)).unwrap();
    assert_eq!(value, from_str(DOCUMENT).unwrap());
}

#[test]
fn characters_split_across_reads_are_reassembled() {
    init_logging();
    let input = "{\"ключ\": [\"😀\", \"naïve\"]}";
    let drip = Drip { bytes: input.as_bytes(), interrupt: false };
    let value = from_reader(drip).unwrap();
    assert_eq!(value, from_str(input).unwrap());
}

#[test]
fn small_buffers_are_widened_to_one_character() {
    let source = ReaderSource::with_capacity(Cursor::new("[\"😀😀😀\"]"), 1);
    let value = Parser::new(source, DomBuilder::new()).parse().unwrap().into_value();
    assert_eq!(value.get(0).and_then(|v| v.as_str()), Some("😀😀😀"));
}

#[test]
fn read_failures_surface_as_source_errors() {
    init_logging();
    let reader = Broken { inner: Cursor::new(DOCUMENT.as_bytes()), limit: 10 };
    let source = ReaderSource::with_capacity(reader, 4);
    let err = Parser::new(source, DomBuilder::new()).parse().unwrap_err();
    let Error::Source(io_err) = &err else {
        panic!("expected a source error");
    };
    assert_eq!(io_err.kind(), io::ErrorKind::Other);
    assert_eq!(err.to_string(), "input error: connection reset");
}

#[test]
fn invalid_utf8_from_a_reader_is_a_parse_error() {
    let err = from_reader(Cursor::new(b"[1, \"\xf0\x28\x8c\x28\"]")).unwrap_err();
    let syntax = err.as_syntax().unwrap();
    assert_eq!(syntax.kind(), ErrorKind::InvalidUtf8);
    assert_eq!(syntax.offset(), 5);
    assert_eq!(err.to_string(), "Malformed UTF-8 input at line 1, column 6");
}

#[test]
fn trailing_content_after_reader_document_is_rejected() {
    let err = from_reader(Cursor::new("{} x")).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected character 'x' at line 1, column 4");
}
