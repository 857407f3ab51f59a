//! The grammar driver.
//!
//! [`Parser`] reads one JSON value from a [`Source`] and reports it to a
//! [`Handler`] as a sequence of `start_*`/`end_*` events.
//!
//! # Examples
//!
//! ```rust
//! use jsonsink::{DomBuilder, Number, Parser, ParserOptions, StrSource, Value};
//!
//! let options = ParserOptions { max_depth: 16 };
//! let parser = Parser::with_options(StrSource::new(r#"{"key": [null, true, 3.14]}"#), DomBuilder::new(), options);
//! let value = parser.parse().unwrap().into_value();
//! let number = value.get("key").and_then(|v| v.get(2)).and_then(Value::as_number);
//! assert_eq!(number.map(Number::as_str), Some("3.14"));
//! ```
//!
//! The driver keeps an explicit stack of open arrays and objects instead of
//! recursing, so nesting depth is bounded only by
//! [`ParserOptions::max_depth`]. What a handler does with deep input is up to
//! the handler; see that field for the limits of [`Value`](crate::Value).

mod lexeme;

use alloc::{string::String, vec::Vec};

use crate::{
    error::{Error, ErrorKind, ScanError},
    handler::Handler,
    location::Location,
    options::ParserOptions,
    scanner::Scanner,
    source::Source,
};

type DriveResult<T, S, H> = Result<T, Error<<S as Source>::Error, <H as Handler>::Error>>;

/// An open container.
enum Frame<A, O> {
    Array(A),
    /// `name` is the member currently being read.
    Object { object: O, name: String },
}

/// What the driver reads next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Any value. Whitespace before it has been skipped.
    Value,
    /// A member name. Whitespace before it has been skipped.
    Name,
    /// The separator or closing bracket after a value, or the end of the
    /// document when no container is open.
    AfterValue,
}

#[derive(Debug, Clone, Copy)]
enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    fn text(self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::True => "true",
            Literal::False => "false",
        }
    }
}

/// Parses a single JSON document from a [`Source`], reporting it to a
/// [`Handler`].
///
/// A parser is consumed by [`Parser::parse`]; create a new one per document.
pub struct Parser<S: Source, H: Handler> {
    scanner: Scanner<S>,
    handler: H,
    options: ParserOptions,
    stack: Vec<Frame<H::Array, H::Object>>,
}

impl<S: Source, H: Handler> Parser<S, H> {
    /// A parser with default options.
    #[must_use]
    pub fn new(source: S, handler: H) -> Self {
        Self::with_options(source, handler, ParserOptions::default())
    }

    /// A parser with the given options.
    #[must_use]
    pub fn with_options(source: S, handler: H, options: ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(source),
            handler,
            options,
            stack: Vec::new(),
        }
    }

    /// Parses the whole input as one JSON value surrounded by optional
    /// whitespace, and returns the handler.
    ///
    /// # Errors
    ///
    /// - [`Error::Syntax`] if the input is not a single well-formed JSON
    ///   value, or nests deeper than [`ParserOptions::max_depth`].
    /// - [`Error::Source`] if reading the source fails.
    /// - [`Error::Handler`] if a handler method returns an error.
    ///
    /// Events delivered before the failure are not retracted.
    pub fn parse(mut self) -> Result<H, Error<S::Error, H::Error>> {
        log::trace!("parse started, max_depth {}", self.options.max_depth);
        match self.drive() {
            Ok(()) => {
                log::trace!("parse finished at {}", self.scanner.location());
                Ok(self.handler)
            }
            Err(err) => {
                match &err {
                    Error::Syntax(syntax) => log::debug!("parse failed: {syntax}"),
                    Error::Source(_) => log::debug!("parse failed: source error near {}", self.scanner.location()),
                    Error::Handler(_) => log::debug!("parse aborted by handler near {}", self.scanner.location()),
                }
                Err(err)
            }
        }
    }

    fn drive(&mut self) -> DriveResult<(), S, H> {
        self.scanner.prime()?;
        self.scanner.skip_whitespace()?;
        let mut state = State::Value;
        loop {
            state = match state {
                State::Value => self.read_value()?,
                State::Name => self.read_member_name()?,
                State::AfterValue => match self.finish_value()? {
                    Some(next) => next,
                    None => break,
                },
            };
        }
        self.scanner.skip_whitespace()?;
        if self.scanner.is_at_end() {
            Ok(())
        } else {
            Err(self.scanner.unexpected().into())
        }
    }

    // --------------------------------------------------------------------------------------------
    // Values
    // --------------------------------------------------------------------------------------------

    fn read_value(&mut self) -> DriveResult<State, S, H> {
        let at = self.scanner.location();
        match self.scanner.current() {
            Some('{') => self.open_object(at),
            Some('[') => self.open_array(at),
            Some('"') => {
                self.handler.start_string(at).map_err(Error::Handler)?;
                self.scanner.scan_string()?;
                let end = self.scanner.location();
                self.handler
                    .end_string(self.scanner.captured(), end)
                    .map_err(Error::Handler)?;
                Ok(State::AfterValue)
            }
            Some('-' | '0'..='9') => {
                self.handler.start_number(at).map_err(Error::Handler)?;
                self.scanner.scan_number()?;
                let end = self.scanner.location();
                self.handler
                    .end_number(self.scanner.captured(), end)
                    .map_err(Error::Handler)?;
                Ok(State::AfterValue)
            }
            Some('n') => self.read_literal(Literal::Null, at),
            Some('t') => self.read_literal(Literal::True, at),
            Some('f') => self.read_literal(Literal::False, at),
            _ => Err(self.scanner.unexpected().into()),
        }
    }

    fn read_literal(&mut self, literal: Literal, at: Location) -> DriveResult<State, S, H> {
        let handler = &mut self.handler;
        let started = match literal {
            Literal::Null => handler.start_null(at),
            Literal::True => handler.start_true(at),
            Literal::False => handler.start_false(at),
        };
        started.map_err(Error::Handler)?;
        self.scanner.expect(literal.text())?;
        let end = self.scanner.location();
        let handler = &mut self.handler;
        let ended = match literal {
            Literal::Null => handler.end_null(end),
            Literal::True => handler.end_true(end),
            Literal::False => handler.end_false(end),
        };
        ended.map_err(Error::Handler)?;
        Ok(State::AfterValue)
    }

    // --------------------------------------------------------------------------------------------
    // Containers
    // --------------------------------------------------------------------------------------------

    /// Fails at the opening bracket when one more container would exceed the
    /// nesting limit.
    fn check_depth(&self) -> DriveResult<(), S, H> {
        if self.stack.len() >= self.options.max_depth {
            return Err(self.scanner.error(ErrorKind::NestingTooDeep).into());
        }
        Ok(())
    }

    fn open_array(&mut self, at: Location) -> DriveResult<State, S, H> {
        self.check_depth()?;
        let mut array = self.handler.start_array(at).map_err(Error::Handler)?;
        self.scanner.advance()?;
        self.scanner.skip_whitespace()?;
        if self.scanner.eat(']')? {
            let end = self.scanner.location();
            self.handler.end_array(array, end).map_err(Error::Handler)?;
            return Ok(State::AfterValue);
        }
        let first = self.scanner.location();
        self.handler
            .start_array_value(&mut array, first)
            .map_err(Error::Handler)?;
        self.stack.push(Frame::Array(array));
        Ok(State::Value)
    }

    fn open_object(&mut self, at: Location) -> DriveResult<State, S, H> {
        self.check_depth()?;
        let object = self.handler.start_object(at).map_err(Error::Handler)?;
        self.scanner.advance()?;
        self.scanner.skip_whitespace()?;
        if self.scanner.eat('}')? {
            let end = self.scanner.location();
            self.handler.end_object(object, end).map_err(Error::Handler)?;
            return Ok(State::AfterValue);
        }
        self.stack.push(Frame::Object {
            object,
            name: String::new(),
        });
        Ok(State::Name)
    }

    /// Reads `"name" :` and positions the scanner on the member's value.
    fn read_member_name(&mut self) -> DriveResult<State, S, H> {
        let Self {
            scanner,
            handler,
            stack,
            ..
        } = self;
        let Some(Frame::Object { object, name }) = stack.last_mut() else {
            unreachable!("member name outside of an object");
        };

        if scanner.current() != Some('"') {
            return Err(expected(scanner, "string key").into());
        }
        let at = scanner.location();
        handler.start_object_name(object, at).map_err(Error::Handler)?;
        scanner.scan_string()?;
        name.clear();
        name.push_str(scanner.captured());
        let end = scanner.location();
        handler
            .end_object_name(object, name, end)
            .map_err(Error::Handler)?;

        scanner.skip_whitespace()?;
        if !scanner.eat(':')? {
            return Err(expected(scanner, "':'").into());
        }
        scanner.skip_whitespace()?;
        let at = scanner.location();
        handler
            .start_object_value(object, name, at)
            .map_err(Error::Handler)?;
        Ok(State::Value)
    }

    /// Closes the value just read. Returns `None` once the top-level value
    /// is complete.
    fn finish_value(&mut self) -> DriveResult<Option<State>, S, H> {
        let Self {
            scanner,
            handler,
            stack,
            ..
        } = self;
        let end = scanner.location();
        match stack.last_mut() {
            None => Ok(None),
            Some(Frame::Array(array)) => {
                handler.end_array_value(array, end).map_err(Error::Handler)?;
                scanner.skip_whitespace()?;
                match scanner.current() {
                    Some(',') => {
                        scanner.advance()?;
                        scanner.skip_whitespace()?;
                        let at = scanner.location();
                        handler.start_array_value(array, at).map_err(Error::Handler)?;
                        Ok(Some(State::Value))
                    }
                    Some(']') => {
                        scanner.advance()?;
                        let Some(Frame::Array(array)) = stack.pop() else {
                            unreachable!("top frame is an array");
                        };
                        let end = scanner.location();
                        handler.end_array(array, end).map_err(Error::Handler)?;
                        Ok(Some(State::AfterValue))
                    }
                    _ => Err(expected(scanner, "',' or ']'").into()),
                }
            }
            Some(Frame::Object { object, name }) => {
                handler
                    .end_object_value(object, name, end)
                    .map_err(Error::Handler)?;
                scanner.skip_whitespace()?;
                match scanner.current() {
                    Some(',') => {
                        scanner.advance()?;
                        scanner.skip_whitespace()?;
                        Ok(Some(State::Name))
                    }
                    Some('}') => {
                        scanner.advance()?;
                        let Some(Frame::Object { object, .. }) = stack.pop() else {
                            unreachable!("top frame is an object");
                        };
                        let end = scanner.location();
                        handler.end_object(object, end).map_err(Error::Handler)?;
                        Ok(Some(State::AfterValue))
                    }
                    _ => Err(expected(scanner, "',' or '}'").into()),
                }
            }
        }
    }
}

/// "Expected `what`" at the current character, or "Unexpected end of input"
/// when the input has run out.
fn expected<S: Source>(scanner: &Scanner<S>, what: &'static str) -> ScanError<S::Error> {
    if scanner.is_at_end() {
        scanner.error(ErrorKind::UnexpectedEndOfInput)
    } else {
        scanner.error(ErrorKind::Expected(what))
    }
}
