use crate::location::Location;

/// Why the input is not valid JSON.
///
/// The `Display` text of each variant is the human-readable message carried
/// by a [`ParseError`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input ended in the middle of a value, or before any value.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    /// A character that cannot start or continue the current production.
    #[error("Unexpected character '{}'", escaped(.0))]
    UnexpectedCharacter(char),
    /// A number that violates the JSON number grammar.
    #[error("Invalid number")]
    InvalidNumber,
    /// A backslash followed by a character that is not a JSON escape.
    #[error("Expected valid escape sequence")]
    InvalidEscape,
    /// A `\u` escape with a non-hexadecimal digit.
    #[error("Expected hexadecimal digit")]
    InvalidHexDigit,
    /// A UTF-16 surrogate escape without its other half.
    #[error("Expected valid surrogate pair")]
    UnpairedSurrogate,
    /// A raw character below U+0020 inside a string.
    #[error("Unexpected control character U+{:04X}", code_point(.0))]
    ControlCharacter(char),
    /// Arrays and objects nested deeper than the configured limit.
    #[error("Nesting too deep")]
    NestingTooDeep,
    /// Structural punctuation or an object key was missing.
    #[error("Expected {0}")]
    Expected(&'static str),
    /// The input bytes are not valid UTF-8.
    #[error("Malformed UTF-8 input")]
    InvalidUtf8,
}

fn escaped(ch: &char) -> core::char::EscapeDebug {
    ch.escape_debug()
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

/// Malformed input: the single error kind for every grammar or lexical
/// violation.
///
/// The message names the violation followed by the location, e.g.
/// `Expected ':' at line 2, column 7`. The location is also available as
/// separate fields.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {location}")]
pub struct ParseError {
    kind: ErrorKind,
    location: Location,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Where it went wrong.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Characters consumed before the error.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.location.offset
    }

    /// 1-based line of the error.
    #[must_use]
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// 1-based column of the error.
    #[must_use]
    pub fn column(&self) -> usize {
        self.location.column
    }
}

/// Everything that can end a parse early.
///
/// `S` is the error type of the input source (e.g. `std::io::Error`) and `H`
/// the error type of the handler. Both are [`core::convert::Infallible`] for
/// in-memory input and the default value builder.
#[derive(thiserror::Error, Debug)]
pub enum Error<S = core::convert::Infallible, H = core::convert::Infallible> {
    /// The input is not valid JSON.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// Reading the input failed.
    #[error("input error: {0}")]
    Source(S),
    /// The handler aborted the parse.
    #[error("handler error: {0}")]
    Handler(H),
}

impl<S, H> Error<S, H> {
    /// The malformed-input error, if that is what this is.
    #[must_use]
    pub fn as_syntax(&self) -> Option<&ParseError> {
        match self {
            Error::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors raised below the handler: malformed input or a failing source.
#[derive(Debug)]
pub(crate) enum ScanError<S> {
    Syntax(ParseError),
    Source(S),
}

impl<S, H> From<ScanError<S>> for Error<S, H> {
    fn from(err: ScanError<S>) -> Self {
        match err {
            ScanError::Syntax(err) => Error::Syntax(err),
            ScanError::Source(err) => Error::Source(err),
        }
    }
}
