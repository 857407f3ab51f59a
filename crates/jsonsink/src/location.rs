//! Input positions.
//!
//! A [`Location`] is a snapshot of how far the scanner has read: the number
//! of characters consumed so far, and the 1-based line and column of the next
//! character. Snapshots are `Copy` and may be retained freely by handlers.

use core::fmt;

/// A position in the input.
///
/// `offset` counts Unicode scalar values consumed before this position, not
/// bytes. `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Number of characters consumed before this position.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl Location {
    /// The position before any input has been consumed.
    pub const START: Location = Location {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Derives line and column from the characters consumed.
///
/// `\n` and `\r` both end a line; the `\n` of a `\r\n` pair does not start a
/// second one.
#[derive(Debug, Clone, Default)]
pub(crate) struct LocationTracker {
    location: Location,
    after_cr: bool,
}

impl LocationTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub(crate) fn advance(&mut self, ch: char) {
        let loc = &mut self.location;
        loc.offset += 1;
        match ch {
            '\n' if self.after_cr => {
                // second half of `\r\n`; the line was already counted
                self.after_cr = false;
            }
            '\n' | '\r' => {
                loc.line += 1;
                loc.column = 1;
                self.after_cr = ch == '\r';
            }
            _ => {
                loc.column += 1;
                self.after_cr = false;
            }
        }
    }
}
