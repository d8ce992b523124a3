//! Low-level byte stream parser for SPLICE pattern decoding.
//!
//! This module provides the [`Parser`] type, a cursor-based binary reader
//! tailored to the SPLICE format's mix of fixed-offset and self-terminating
//! fields. It offers bounds-checked sequential reads, unconditional absolute
//! seeking (holes before the tempo offset are part of the format), and the
//! three primitive readers the decoder is built from: null-terminated
//! strings, fixed-length strings and zero-run skipping.
//!
//! # Architecture
//!
//! The parser maintains a position within a byte slice. End-of-input is a
//! recoverable condition rather than a fatal one: string reads treat it as an
//! implicit terminator, and [`Parser::read_up_to`] returns however many bytes
//! remain. Only the typed reads ([`Parser::read_byte`], [`Parser::read_le`])
//! report [`crate::Error::OutOfBounds`], and the decoder maps those to loop
//! termination.
//!
//! # Usage Examples
//!
//! ```rust
//! use splice::Parser;
//!
//! let data = [0x02, b'h', b'i', 0x00, 0x2A, 0x00, 0x00, 0x00];
//! let mut parser = Parser::new(&data);
//!
//! let flag = parser.read_byte()?;
//! assert_eq!(flag, 0x02);
//!
//! let label = parser.read_string_utf8();
//! assert_eq!(label, "hi");
//!
//! let value = parser.read_le::<u32>()?;
//! assert_eq!(value, 42);
//! # Ok::<(), splice::Error>(())
//! ```

use crate::{file::io::read_le_at, Result, SpliceIO};

/// A cursor-based binary reader over a SPLICE decode window.
///
/// `Parser` tracks a position within a byte slice and provides the reading
/// primitives the pattern decoder is composed of. It never reads outside the
/// slice; short and exhausted reads are reported in whatever way the calling
/// convention of each method promises (error, empty slice, or implicit
/// terminator).
///
/// Seeking is unconditional, including past the end of the data. Subsequent
/// typed reads from such a position fail with
/// [`crate::Error::OutOfBounds`], which is exactly the semantics the format's
/// fixed tempo offset relies on for very short files.
///
/// # Examples
///
/// ```rust
/// use splice::Parser;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut parser = Parser::new(&data);
///
/// parser.seek(2);
/// assert_eq!(parser.read_byte()?, 0x03);
///
/// // Seeks past the end are allowed; reads from there fail.
/// parser.seek(100);
/// assert!(parser.read_byte().is_err());
/// # Ok::<(), splice::Error>(())
/// ```
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining from the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Move the current position to the specified absolute offset.
    ///
    /// The seek is unconditional: positions past the end of the data are
    /// accepted, and typed reads from there fail with
    /// [`crate::Error::OutOfBounds`]. The SPLICE tempo field lives at a fixed
    /// absolute offset that is independent of the variable-length fields
    /// before it, so the decoder must be able to land anywhere.
    pub fn seek(&mut self, pos: usize) {
        self.position = pos;
    }

    /// Rewind the position by exactly one byte.
    ///
    /// Only meaningful immediately after a successful [`Parser::read_byte`];
    /// the byte becomes available to the next reader again. At position 0
    /// this is a no-op.
    pub fn unread_byte(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Read a single byte and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the cursor is at or past the
    /// end of the data.
    pub fn read_byte(&mut self) -> Result<u8> {
        self.read_le::<u8>()
    }

    /// Read a type `T` from the current position in little-endian format and
    /// advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data
    /// length; the position is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use splice::Parser;
    ///
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// let value: u32 = parser.read_le()?;
    /// assert_eq!(value, 0x04030201); // Little-endian interpretation
    /// # Ok::<(), splice::Error>(())
    /// ```
    pub fn read_le<T: SpliceIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read up to `length` bytes from the current position.
    ///
    /// This is a best-effort read: if fewer bytes remain, the returned slice
    /// is short, and at end-of-input it is empty. Callers that need a fixed
    /// width pad the missing tail themselves (step rows keep their silent
    /// default cells).
    pub fn read_up_to(&mut self, length: usize) -> &'a [u8] {
        if self.position >= self.data.len() {
            return &[];
        }

        let end = self.data.len().min(self.position.saturating_add(length));
        let bytes = &self.data[self.position..end];
        self.position = end;
        bytes
    }

    /// Read a null-terminated string.
    ///
    /// Bytes are accumulated until a zero byte or the end of the data; the
    /// terminator is excluded and consumed. End-of-input acts as an implicit
    /// terminator, so truncated strings come back as-is rather than as an
    /// error. The format stores raw bytes-as-text with no charset guarantee,
    /// so invalid UTF-8 sequences are replaced rather than rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use splice::Parser;
    ///
    /// let data = b"SPLICE\0rest";
    /// let mut parser = Parser::new(data);
    ///
    /// assert_eq!(parser.read_string_utf8(), "SPLICE");
    /// assert_eq!(parser.pos(), 7); // Terminator consumed
    /// assert_eq!(parser.read_string_utf8(), "rest"); // Implicit terminator at EOF
    /// ```
    pub fn read_string_utf8(&mut self) -> String {
        let start = self.position.min(self.data.len());
        let mut end = start;

        while end < self.data.len() && self.data[end] != 0 {
            end += 1;
        }

        let string_data = &self.data[start..end];

        if end < self.data.len() {
            self.position = end + 1;
        } else {
            self.position = end;
        }

        String::from_utf8_lossy(string_data).into_owned()
    }

    /// Read exactly `length` bytes as text, or fewer at end-of-input.
    ///
    /// No null-trimming is performed; embedded zero bytes stay in the result.
    pub fn read_fixed_string(&mut self, length: usize) -> String {
        String::from_utf8_lossy(self.read_up_to(length)).into_owned()
    }

    /// Advance past a maximal run of zero bytes.
    ///
    /// Stops on the first non-zero byte and rewinds one position so that byte
    /// remains available to the next reader.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the data ran out before a
    /// non-zero byte was seen. The skip is best-effort, so callers may ignore
    /// the signal.
    pub fn skip_zero_run(&mut self) -> Result<()> {
        loop {
            let byte = self.read_byte()?;
            if byte != 0 {
                self.unread_byte();
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn cursor_navigation() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.len(), 4);
        assert!(!parser.is_empty());
        assert!(parser.has_more_data());
        assert_eq!(parser.remaining(), 4);

        assert_eq!(parser.read_byte().unwrap(), 0x01);
        assert_eq!(parser.pos(), 1);

        parser.unread_byte();
        assert_eq!(parser.pos(), 0);
        assert_eq!(parser.read_byte().unwrap(), 0x01);

        parser.seek(3);
        assert_eq!(parser.read_byte().unwrap(), 0x04);
        assert!(!parser.has_more_data());
    }

    #[test]
    fn seek_past_end_makes_reads_fail() {
        let data = [0x01, 0x02];
        let mut parser = Parser::new(&data);

        parser.seek(46);
        assert_eq!(parser.remaining(), 0);
        assert!(matches!(parser.read_le::<f32>(), Err(Error::OutOfBounds)));
        assert!(matches!(parser.read_byte(), Err(Error::OutOfBounds)));
        assert_eq!(parser.read_up_to(16), &[] as &[u8]);
    }

    #[test]
    fn read_le_values() {
        let data = [0x2A, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x42];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_le::<u32>().unwrap(), 42);
        assert_eq!(parser.read_le::<f32>().unwrap(), 120.0);
    }

    #[test]
    fn read_up_to_is_best_effort() {
        let data = [1, 2, 3];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_up_to(2), &[1, 2]);
        assert_eq!(parser.read_up_to(16), &[3]);
        assert_eq!(parser.read_up_to(16), &[] as &[u8]);
    }

    #[test]
    fn string_reads() {
        let test_cases: Vec<(&[u8], &str)> = vec![
            (b"abc\0", "abc"),
            (b"\0", ""),
            (b"", ""),
            (b"truncated", "truncated"),
        ];

        for (input, expected) in test_cases {
            let mut parser = Parser::new(input);
            assert_eq!(parser.read_string_utf8(), expected);
        }
    }

    #[test]
    fn string_read_consumes_terminator_only_when_present() {
        let mut parser = Parser::new(b"ab\0cd");
        assert_eq!(parser.read_string_utf8(), "ab");
        assert_eq!(parser.pos(), 3);
        assert_eq!(parser.read_string_utf8(), "cd");
        assert_eq!(parser.pos(), 5);
    }

    #[test]
    fn fixed_string_keeps_embedded_zeros() {
        let mut parser = Parser::new(b"hi\0ho rest");
        assert_eq!(parser.read_fixed_string(5), "hi\0ho");
        assert_eq!(parser.pos(), 5);

        // Short at end-of-input.
        let mut parser = Parser::new(b"abc");
        assert_eq!(parser.read_fixed_string(10), "abc");
    }

    #[test]
    fn skip_zero_run_rewinds_to_first_non_zero() {
        let data = [0, 0, 0, 0x0A, 0x0B];
        let mut parser = Parser::new(&data);

        parser.skip_zero_run().unwrap();
        assert_eq!(parser.pos(), 3);
        assert_eq!(parser.read_byte().unwrap(), 0x0A);
    }

    #[test]
    fn skip_zero_run_signals_exhaustion() {
        let data = [0, 0];
        let mut parser = Parser::new(&data);

        assert!(matches!(parser.skip_zero_run(), Err(Error::OutOfBounds)));
        assert!(!parser.has_more_data());
    }
}
