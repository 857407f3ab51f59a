//! An event-driven JSON parser with exact error locations.
//!
//! The [`Parser`] reads a single JSON document from a [`Source`] and reports
//! its structure to a [`Handler`] as `start_*`/`end_*` events, each tagged
//! with the [`Location`] (character offset, line and column) at which it
//! occurs. Malformed input fails with a [`ParseError`] whose message names
//! the violation and its location.
//!
//! The default handler, [`DomBuilder`], assembles a [`Value`] tree. The
//! shortcuts below cover the common cases:
//!
//! ```rust
//! let value = jsonsink::from_str(r#"{"name": "jsonsink", "tags": ["json", "parser"]}"#).unwrap();
//! assert_eq!(value.get("tags").and_then(|t| t.get(1)).and_then(|t| t.as_str()), Some("parser"));
//!
//! let err = jsonsink::from_str("[1,\n  2,]").unwrap_err();
//! assert_eq!(err.to_string(), "Unexpected character ']' at line 2, column 5");
//! ```
//!
//! # Features
//!
//! - `std` (default): [`ReaderSource`] and [`from_reader`] for parsing from
//!   [`std::io::Read`].
//! - `serde`: `Serialize` for [`Value`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod builder;
mod error;
mod escape;
mod handler;
mod location;
mod options;
mod parser;
mod scanner;
mod source;
mod value;

#[cfg(test)]
mod tests;

use core::convert::Infallible;

pub use builder::DomBuilder;
pub use error::{Error, ErrorKind, ParseError};
pub use handler::Handler;
pub use location::Location;
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::Parser;
#[cfg(feature = "std")]
pub use source::ReaderSource;
pub use source::{ReadError, SliceSource, Source, StrSource};
pub use value::{Array, Map, Number, Value, ValueIndex};

/// Parses a JSON document into a [`Value`].
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not exactly one JSON value
/// surrounded by optional whitespace.
pub fn from_str(input: &str) -> Result<Value, ParseError> {
    Parser::new(StrSource::new(input), DomBuilder::new())
        .parse()
        .map(DomBuilder::into_value)
        .map_err(into_syntax)
}

/// Parses a UTF-8 encoded JSON document into a [`Value`].
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not valid UTF-8 ("Malformed UTF-8
/// input", located at the offending character) or not valid JSON.
pub fn from_slice(input: &[u8]) -> Result<Value, ParseError> {
    Parser::new(SliceSource::new(input), DomBuilder::new())
        .parse()
        .map(DomBuilder::into_value)
        .map_err(into_syntax)
}

/// Parses a UTF-8 encoded JSON document from a reader into a [`Value`].
///
/// The reader is consumed in buffered chunks; it does not need to be wrapped
/// in a [`std::io::BufReader`].
///
/// # Errors
///
/// [`Error::Syntax`] for malformed input, [`Error::Source`] if reading
/// fails.
#[cfg(feature = "std")]
pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Value, Error<std::io::Error>> {
    Parser::new(ReaderSource::new(reader), DomBuilder::new())
        .parse()
        .map(DomBuilder::into_value)
}

/// Parses `input`, reporting events to `handler`, and returns the handler.
///
/// Pass `&mut handler` to keep ownership of a handler.
///
/// # Errors
///
/// [`Error::Syntax`] for malformed input, [`Error::Handler`] if the handler
/// aborts.
pub fn parse_with<H: Handler>(input: &str, handler: H) -> Result<H, Error<Infallible, H::Error>> {
    Parser::new(StrSource::new(input), handler).parse()
}

fn into_syntax(err: Error) -> ParseError {
    match err {
        Error::Syntax(err) => err,
        Error::Source(never) | Error::Handler(never) => match never {},
    }
}
