//! String and number lexemes.
//!
//! These extend the [`Scanner`] with the two productions whose text the
//! parser hands to the handler. Both leave the text in the scanner's capture
//! buffer and stop on the first character after the lexeme.

use crate::{
    error::{ErrorKind, ParseError, ScanError},
    escape::{CodeUnit, UnicodeEscapeBuffer, combine_surrogates},
    location::Location,
    scanner::{ScanResult, Scanner},
    source::Source,
};

impl<S: Source> Scanner<S> {
    /// Scans a string starting at its opening quote and captures its
    /// unescaped contents.
    pub(crate) fn scan_string(&mut self) -> ScanResult<(), S::Error> {
        self.advance()?;
        self.start_capture();
        loop {
            self.capture_while(|c| c != '"' && c != '\\' && c >= '\u{20}')?;
            match self.current() {
                Some('"') => return self.advance(),
                Some('\\') => self.scan_escape()?,
                Some(c) => return Err(self.error(ErrorKind::ControlCharacter(c))),
                None => return Err(self.error(ErrorKind::UnexpectedEndOfInput)),
            }
        }
    }

    fn scan_escape(&mut self) -> ScanResult<(), S::Error> {
        let start = self.location();
        self.advance()?;
        let ch = match self.current() {
            Some(c @ ('"' | '\\' | '/')) => c,
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => return self.scan_unicode_escape(start),
            Some(_) => return Err(self.error(ErrorKind::InvalidEscape)),
            None => return Err(self.error(ErrorKind::UnexpectedEndOfInput)),
        };
        self.advance()?;
        self.push_capture(ch);
        Ok(())
    }

    /// Decodes `\uXXXX`, or a surrogate pair of two such escapes. Unpaired
    /// surrogates are reported at the backslash of the first escape.
    fn scan_unicode_escape(&mut self, start: Location) -> ScanResult<(), S::Error> {
        let unpaired = || ScanError::Syntax(ParseError::new(ErrorKind::UnpairedSurrogate, start));
        match self.scan_code_unit()? {
            CodeUnit::Scalar(ch) => self.push_capture(ch),
            CodeUnit::LowSurrogate(_) => return Err(unpaired()),
            CodeUnit::HighSurrogate(high) => {
                if !self.eat('\\')? || self.current() != Some('u') {
                    return Err(unpaired());
                }
                match self.scan_code_unit()? {
                    CodeUnit::LowSurrogate(low) => self.push_capture(combine_surrogates(high, low)),
                    _ => return Err(unpaired()),
                }
            }
        }
        Ok(())
    }

    /// Reads the `u` and four hex digits of one escape.
    fn scan_code_unit(&mut self) -> ScanResult<CodeUnit, S::Error> {
        self.advance()?;
        let mut digits = UnicodeEscapeBuffer::new();
        loop {
            let Some(c) = self.current() else {
                return Err(self.error(ErrorKind::UnexpectedEndOfInput));
            };
            let decoded = digits.feed(c).map_err(|kind| self.error(kind))?;
            self.advance()?;
            if let Some(unit) = decoded {
                return Ok(unit);
            }
        }
    }

    /// Scans a number and captures its source text.
    ///
    /// ```text
    /// number = [ "-" ] ( "0" | [1-9] [0-9]* ) [ "." [0-9]+ ] [ ( "e" | "E" ) [ "+" | "-" ] [0-9]+ ]
    /// ```
    pub(crate) fn scan_number(&mut self) -> ScanResult<(), S::Error> {
        self.start_capture();
        if self.current() == Some('-') {
            self.capture_current()?;
        }
        match self.current() {
            Some('0') => {
                self.capture_current()?;
                if self.at_digit() {
                    return Err(self.error(ErrorKind::InvalidNumber));
                }
            }
            Some('1'..='9') => {
                self.capture_while(|c| c.is_ascii_digit())?;
            }
            _ => return Err(self.error(ErrorKind::InvalidNumber)),
        }
        if self.current() == Some('.') {
            self.capture_current()?;
            self.scan_digits()?;
        }
        if matches!(self.current(), Some('e' | 'E')) {
            self.capture_current()?;
            if matches!(self.current(), Some('+' | '-')) {
                self.capture_current()?;
            }
            self.scan_digits()?;
        }
        Ok(())
    }

    /// One or more digits.
    fn scan_digits(&mut self) -> ScanResult<(), S::Error> {
        if self.capture_while(|c| c.is_ascii_digit())? == 0 {
            return Err(self.error(ErrorKind::InvalidNumber));
        }
        Ok(())
    }
}
