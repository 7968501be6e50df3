//! Line-oriented scanning of whitespace separated unsigned integers.
//!
//! Graph and partition files are read fully into memory and walked with a
//! cursor over the raw bytes. No intermediate `String`s are built for the
//! file body, which keeps ingestion a single forward pass.

use thiserror::Error;

/// Errors raised while scanning a line of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// A byte that is neither a digit nor whitespace.
    #[error("line {line}: unexpected character {found:?}")]
    Unexpected { line: usize, found: char },

    /// The integer does not fit in 64 bits.
    #[error("line {line}: integer does not fit in 64 bits")]
    Overflow { line: usize },

    /// The line ended while another integer was still expected.
    #[error("line {line}: expected another integer")]
    Missing { line: usize },
}

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r')
}

/// Iterator over the lines of an in-memory buffer.
///
/// Yields `(line_number, line)` pairs, line numbers starting at 1. The
/// terminating `\n` is not part of the line, and a trailing newline at the end
/// of the buffer does not produce an extra empty line.
pub struct Lines<'a> {
    input: &'a [u8],
    pos: usize,
    line_no: usize,
}

impl<'a> Lines<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0, line_no: 0 }
    }

    /// Next line that does not start with `marker`.
    ///
    /// Leading whitespace is ignored when looking for the marker.
    pub fn next_skipping(&mut self, marker: u8) -> Option<(usize, &'a [u8])> {
        loop {
            let (line_no, line) = self.next()?;
            if !is_comment(line, marker) {
                return Some((line_no, line));
            }
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        let len = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        self.pos += len + 1;
        self.line_no += 1;
        Some((self.line_no, &rest[..len]))
    }
}

/// Whether the first non-whitespace byte of a line is `marker`.
pub fn is_comment(line: &[u8], marker: u8) -> bool {
    line.iter().copied().find(|&b| !is_space(b)) == Some(marker)
}

/// Whether a line holds nothing but whitespace.
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|&b| is_space(b))
}

/// The unsigned integers of one line.
///
/// Runs of spaces, tabs and carriage returns separate the values; leading and
/// trailing whitespace is ignored.
pub struct LineInts<'a> {
    line: &'a [u8],
    pos: usize,
    line_no: usize,
}

impl<'a> LineInts<'a> {
    /// `line_no` is only used to give errors some context.
    pub fn new(line: &'a [u8], line_no: usize) -> Self {
        Self { line, pos: 0, line_no }
    }

    /// The next integer, failing if the line is exhausted.
    pub fn expect_next(&mut self) -> Result<u64, TokenError> {
        self.next()
            .unwrap_or(Err(TokenError::Missing { line: self.line_no }))
    }

    fn skip_spaces(&mut self) {
        while self.pos < self.line.len() && is_space(self.line[self.pos]) {
            self.pos += 1;
        }
    }

    fn scan_number(&mut self) -> Result<u64, TokenError> {
        let mut value: u64 = 0;
        while let Some(&byte) = self.line.get(self.pos) {
            if is_space(byte) {
                break;
            }
            if !byte.is_ascii_digit() {
                return Err(TokenError::Unexpected { line: self.line_no, found: char::from(byte) });
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                .ok_or(TokenError::Overflow { line: self.line_no })?;
            self.pos += 1;
        }
        Ok(value)
    }
}

impl Iterator for LineInts<'_> {
    type Item = Result<u64, TokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_spaces();
        if self.pos >= self.line.len() {
            return None;
        }
        let value = self.scan_number();
        if value.is_err() {
            // Poison the iterator so callers looping on `next` terminate.
            self.pos = self.line.len();
        }
        Some(value)
    }
}
