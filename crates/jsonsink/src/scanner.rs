//! Scanner: one character of lookahead over a [`Source`].
//!
//! The scanner owns the source, the location tracker and a scratch buffer
//! used to capture the text of strings and numbers. It knows nothing about
//! the JSON grammar beyond the lexical classes the parser asks about.
//!
//! Invariants
//! - `current` is the character at `location()`, or `None` once the source is
//!   exhausted.
//! - `location()` only moves forward, one character per `advance()`.

use alloc::string::String;

use crate::{
    error::{ErrorKind, ParseError, ScanError},
    location::{Location, LocationTracker},
    source::{ReadError, Source},
};

pub(crate) type ScanResult<T, E> = Result<T, ScanError<E>>;

#[derive(Debug)]
pub(crate) struct Scanner<S> {
    source: S,
    current: Option<char>,
    tracker: LocationTracker,
    /// Text of the token being captured.
    capture: String,
    primed: bool,
}

impl<S: Source> Scanner<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            current: None,
            tracker: LocationTracker::new(),
            capture: String::new(),
            primed: false,
        }
    }

    /// Loads the first character. Called once before scanning starts.
    pub(crate) fn prime(&mut self) -> ScanResult<(), S::Error> {
        if !self.primed {
            self.primed = true;
            self.fetch()?;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    #[inline]
    pub(crate) fn location(&self) -> Location {
        self.tracker.location()
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Consumes the current character and loads the next one.
    #[inline]
    pub(crate) fn advance(&mut self) -> ScanResult<(), S::Error> {
        if let Some(ch) = self.current {
            self.tracker.advance(ch);
            self.fetch()?;
        }
        Ok(())
    }

    fn fetch(&mut self) -> ScanResult<(), S::Error> {
        self.current = match self.source.next_char() {
            Ok(ch) => ch,
            Err(ReadError::InvalidUtf8) => return Err(self.error(ErrorKind::InvalidUtf8)),
            Err(ReadError::Source(err)) => return Err(ScanError::Source(err)),
        };
        Ok(())
    }

    /// Consumes `ch` if it is the current character.
    #[inline]
    pub(crate) fn eat(&mut self, ch: char) -> ScanResult<bool, S::Error> {
        if self.current == Some(ch) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes `literal` exactly, failing at the first character that does
    /// not match.
    pub(crate) fn expect(&mut self, literal: &str) -> ScanResult<(), S::Error> {
        for expected in literal.chars() {
            if self.current != Some(expected) {
                return Err(self.unexpected());
            }
            self.advance()?;
        }
        Ok(())
    }

    /// Consumes a run of JSON whitespace: space, tab, line feed, carriage
    /// return.
    #[inline]
    pub(crate) fn skip_whitespace(&mut self) -> ScanResult<(), S::Error> {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.advance()?;
        }
        Ok(())
    }

    /// Whether the current character is an ASCII digit.
    #[inline]
    pub(crate) fn at_digit(&self) -> bool {
        self.current.is_some_and(|c| c.is_ascii_digit())
    }

    // --------------------------------------------------------------------------------------------
    // Capture
    // --------------------------------------------------------------------------------------------

    /// Starts capturing a new token.
    #[inline]
    pub(crate) fn start_capture(&mut self) {
        self.capture.clear();
    }

    /// Appends the current character to the capture and consumes it.
    #[inline]
    pub(crate) fn capture_current(&mut self) -> ScanResult<(), S::Error> {
        if let Some(ch) = self.current {
            self.capture.push(ch);
        }
        self.advance()
    }

    /// Appends a character that does not appear verbatim in the input, such
    /// as the result of an escape sequence.
    #[inline]
    pub(crate) fn push_capture(&mut self, ch: char) {
        self.capture.push(ch);
    }

    /// Consumes characters into the capture while `predicate` holds.
    #[inline]
    pub(crate) fn capture_while(
        &mut self,
        mut predicate: impl FnMut(char) -> bool,
    ) -> ScanResult<usize, S::Error> {
        let mut copied = 0;
        while let Some(ch) = self.current.filter(|&c| predicate(c)) {
            self.capture.push(ch);
            self.advance()?;
            copied += 1;
        }
        Ok(copied)
    }

    #[inline]
    pub(crate) fn captured(&self) -> &str {
        &self.capture
    }

    // --------------------------------------------------------------------------------------------
    // Errors
    // --------------------------------------------------------------------------------------------

    /// A malformed-input error at the current location.
    pub(crate) fn error(&self, kind: ErrorKind) -> ScanError<S::Error> {
        ScanError::Syntax(ParseError::new(kind, self.location()))
    }

    /// "Unexpected character" for the current character, or "Unexpected end
    /// of input" when there is none.
    pub(crate) fn unexpected(&self) -> ScanError<S::Error> {
        match self.current {
            Some(ch) => self.error(ErrorKind::UnexpectedCharacter(ch)),
            None => self.error(ErrorKind::UnexpectedEndOfInput),
        }
    }
}
