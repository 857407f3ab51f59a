//! Decoding of `\uXXXX` escapes.
//!
//! [`UnicodeEscapeBuffer`] accumulates exactly four ASCII hexadecimal digits
//! (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit. Code units outside the
//! surrogate range are characters on their own; a high surrogate must be
//! combined with the low surrogate of the following escape via
//! [`combine_surrogates`].

use crate::error::ErrorKind;

/// Accumulates four hexadecimal digits into a UTF-16 code unit.
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

/// A decoded `\uXXXX` escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CodeUnit {
    /// A complete character.
    Scalar(char),
    /// First half of a surrogate pair.
    HighSurrogate(u16),
    /// Second half of a surrogate pair.
    LowSurrogate(u16),
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(c: char) -> Option<u16> {
        c.to_digit(16).and_then(|d| u16::try_from(d).ok())
    }

    /// Feeds one digit.
    ///
    /// Returns `Ok(None)` until the fourth digit arrives, then the decoded
    /// code unit; the buffer resets itself afterwards.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<CodeUnit>, ErrorKind> {
        let d = Self::hex_val(c).ok_or(ErrorKind::InvalidHexDigit)?;

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        *self = Self::new();

        Ok(Some(match unit {
            0xD800..=0xDBFF => CodeUnit::HighSurrogate(unit),
            0xDC00..=0xDFFF => CodeUnit::LowSurrogate(unit),
            // not a surrogate, so always a valid scalar value
            _ => CodeUnit::Scalar(char::from_u32(u32::from(unit)).unwrap_or('\u{FFFD}')),
        }))
    }
}

/// Joins a UTF-16 surrogate pair into the character it encodes.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> char {
    let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code).unwrap_or('\u{FFFD}')
}
