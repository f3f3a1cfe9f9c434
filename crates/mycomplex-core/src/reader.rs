//! Stream extraction of complex values
//!
//! [`ComplexReader`] pulls values out of any `BufRead` one at a time. A value
//! may span several lines since newlines are plain whitespace. After the first
//! failure the reader stays failed and extracts nothing more, the same way a
//! text stream keeps its fail state until the caller gives up on it.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::{Complex, ComplexError, ComplexResult, ParseComplexError, Part};

/// Reads whitespace-delimited complex values from a text stream
#[derive(Debug)]
pub struct ComplexReader<R> {
    inner: R,
    /// Text read from `inner`; only `pending[start..]` is still unread
    pending: String,
    start: usize,
    eof: bool,
    failed: bool,
    /// Values extracted so far
    extracted: u64,
}

impl<R: BufRead> ComplexReader<R> {
    pub fn new(inner: R) -> Self {
        ComplexReader {
            inner,
            pending: String::new(),
            start: 0,
            eof: false,
            failed: false,
            extracted: 0,
        }
    }

    /// Extract the next value.
    ///
    /// Returns `Ok(None)` when only whitespace remains before end of stream.
    /// Any error puts the reader in the failed state. Input that is not valid
    /// UTF-8 is reported by the underlying reader as
    /// `ComplexError::Io` with kind `InvalidData`.
    pub fn read_value(&mut self) -> ComplexResult<Option<Complex>> {
        if self.failed {
            return Err(ComplexError::Failed);
        }

        loop {
            let unread = &self.pending[self.start..];
            let outcome = Complex::parse_prefix(unread)
                .map(|(value, rest)| (value, unread.len() - rest.len()));

            match outcome {
                Ok((value, consumed)) => {
                    self.start += consumed;
                    if self.start * 2 > self.pending.len() {
                        self.compact();
                    }
                    self.extracted += 1;
                    trace!(index = self.extracted, %value, "extracted complex value");
                    return Ok(Some(value));
                }
                Err(ParseComplexError::UnexpectedEnd { .. }) if !self.eof => {
                    if let Err(e) = self.fill() {
                        return Err(self.fail(e.into()));
                    }
                }
                Err(_) if self.eof && self.pending[self.start..].trim().is_empty() => {
                    return Ok(None);
                }
                Err(e) => return Err(self.fail(e.into())),
            }
        }
    }

    /// Whether an extraction has failed
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Number of values extracted so far
    pub fn extracted(&self) -> u64 {
        self.extracted
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Append the next line of input to the unread text
    fn fill(&mut self) -> std::io::Result<()> {
        self.compact();
        let before = self.pending.len();

        if self.inner.read_line(&mut self.pending)? == 0 {
            self.eof = true;
        } else if before > 0 && self.pending[before..].trim().is_empty() {
            // A blank line inside a value only separates tokens, one separator is enough
            self.pending.truncate(before);
            if !self.pending.ends_with(char::is_whitespace) {
                self.pending.push('\n');
            }
        }
        Ok(())
    }

    /// Drop extracted text and the whitespace in front of the unread text
    fn compact(&mut self) {
        let unread = &self.pending[self.start..];
        let skip = self.start + (unread.len() - unread.trim_start().len());
        self.pending.replace_range(..skip, "");
        self.start = 0;
    }

    fn fail(&mut self, err: ComplexError) -> ComplexError {
        debug!(index = self.extracted + 1, error = %err, "complex extraction failed");
        self.failed = true;
        err
    }
}

impl<R: BufRead> Iterator for ComplexReader<R> {
    type Item = ComplexResult<Complex>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.read_value().transpose()
    }
}

impl Complex {
    /// Extract one value from `reader` into `self`.
    ///
    /// Running out of input counts as a failure. On any failure `self` keeps
    /// its previous value.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut ComplexReader<R>) -> ComplexResult<()> {
        match reader.read_value()? {
            Some(value) => {
                *self = value;
                Ok(())
            }
            None => Err(ParseComplexError::UnexpectedEnd { part: Part::Real }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn reader(text: &str) -> ComplexReader<Cursor<Vec<u8>>> {
        ComplexReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_sequence() {
        let values: Vec<Complex> = reader("1 2 i\n3-4i 5+6i\n")
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            values,
            vec![
                Complex::new(1.0, 2.0),
                Complex::new(3.0, -4.0),
                Complex::new(5.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_value_spans_lines() {
        let mut r = reader("1\n\n  2\ni\n");

        assert_eq!(r.read_value().unwrap(), Some(Complex::new(1.0, 2.0)));
        assert_eq!(r.read_value().unwrap(), None);
        assert!(!r.is_failed());
    }

    #[test]
    fn test_empty_and_blank_streams_end_cleanly() {
        assert_eq!(reader("").count(), 0);
        assert_eq!(reader("  \n\t\n").count(), 0);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut r = reader("7 8 i");
        assert_eq!(r.read_value().unwrap(), Some(Complex::new(7.0, 8.0)));
        assert_eq!(r.extracted(), 1);
    }

    #[test]
    fn test_incomplete_value_fails() {
        let mut r = reader("1 2 i\n3 4");

        assert_eq!(r.next().unwrap().unwrap(), Complex::new(1.0, 2.0));
        let err = r.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            ComplexError::Parse(ParseComplexError::UnexpectedEnd { part: Part::Suffix })
        ));
        assert!(r.is_failed());
    }

    #[test]
    fn test_failure_is_sticky() {
        let mut r = reader("x 1 i\n1 2 i\n");

        assert!(r.next().unwrap().is_err());
        assert!(r.next().is_none());
        assert!(matches!(r.read_value(), Err(ComplexError::Failed)));
    }

    #[test]
    fn test_read_from_leaves_target_on_failure() {
        let mut r = reader("1 2 i\nbad input here\n");
        let mut z = Complex::ZERO;

        z.read_from(&mut r).unwrap();
        assert_eq!(z, Complex::new(1.0, 2.0));

        assert!(z.read_from(&mut r).is_err());
        assert_eq!(z, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_read_from_at_end_of_stream() {
        let mut r = reader("\n");
        let mut z = Complex::new(9.0, 9.0);

        let err = z.read_from(&mut r).unwrap_err();
        assert!(matches!(
            err,
            ComplexError::Parse(ParseComplexError::UnexpectedEnd { part: Part::Real })
        ));
        assert_eq!(z, Complex::new(9.0, 9.0));
    }

    #[test]
    fn test_many_values_on_one_line() {
        let count = 20_000;
        let line: String = (0..count).map(|k| format!("{}+{}i ", k, k + 1)).collect();
        let mut r = reader(&format!("{}\n", line));

        for k in 0..count {
            let z = r.read_value().unwrap().unwrap();
            assert_eq!(z, Complex::new(k as f64, (k + 1) as f64));
            // Extracted text never outweighs the unread text
            assert!(r.start * 2 <= r.pending.len());
        }
        assert_eq!(r.read_value().unwrap(), None);
        assert_eq!(r.extracted(), count as u64);
    }

    #[test]
    fn test_blank_lines_do_not_accumulate() {
        let blank = "\n".repeat(10_000);
        let mut r = reader(&format!("{}1{}2{}i\n{}", blank, blank, blank, blank));

        assert_eq!(r.read_value().unwrap(), Some(Complex::new(1.0, 2.0)));
        assert!(r.pending.len() < 8, "pending grew to {}", r.pending.len());
        assert_eq!(r.read_value().unwrap(), None);
        assert!(r.pending.len() < 8);
    }

    #[test]
    fn test_invalid_utf8_is_io_invalid_data() {
        let mut r = ComplexReader::new(Cursor::new(b"1 2 i\n\xff\xfe 3 i\n".to_vec()));

        assert_eq!(r.read_value().unwrap(), Some(Complex::new(1.0, 2.0)));
        match r.read_value() {
            Err(ComplexError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("expected invalid data error, got {:?}", other),
        }
        assert!(r.is_failed());
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_io_error_fails_reader() {
        let mut r = ComplexReader::new(io::BufReader::new(BrokenPipe));

        assert!(matches!(r.read_value(), Err(ComplexError::Io(_))));
        assert!(r.is_failed());
    }
}
