//! Header tokenizer: whitespace and `#` comments between header fields.

use crate::error::PpmError;

/// Whitespace as the C locale's `isspace` sees it, vertical tab included.
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Forward-only cursor over header bytes.
///
/// Peeking without advancing stands in for pushing a byte back onto the
/// stream: [`Self::skip_noise`] stops *on* the first token byte.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub(crate) fn next_byte(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consume exactly `n` bytes, or none if fewer remain.
    pub(crate) fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }

    /// Skip whitespace and comments up to the next token byte.
    ///
    /// A comment runs from `#` through the next `\n` (or end of input).
    /// Running out of input here is an error: a header always has another
    /// token after the noise.
    pub(crate) fn skip_noise(&mut self) -> Result<(), PpmError> {
        loop {
            match self.peek() {
                None => return Err(PpmError::HeaderEof),
                Some(b'#') => {
                    self.pos += 1;
                    while let Some(b) = self.next_byte() {
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                Some(b) if is_space(b) => self.pos += 1,
                Some(_) => return Ok(()),
            }
        }
    }

    /// Read an unsigned decimal token. Returns `None` when the cursor is not
    /// on a digit or the value overflows `u32`; the caller names the field.
    pub(crate) fn read_decimal(&mut self) -> Option<u32> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
            self.pos += 1;
        }
        (self.pos > start).then_some(value)
    }
}
