//! Bounded line reading.

use std::io::{BufRead, Read};

use crate::config::DEFAULT_MAX_LINE_LENGTH;
use crate::error::{Error, Result};

/// One line borrowed from a [`LineReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content without the terminating newline.
    pub content: &'a [u8],
    /// Whether the line ended with `\n` (only the last line of a stream may not).
    pub terminated: bool,
    /// 1-based line number within the stream.
    pub number: u64,
}

/// Reads `\n`-terminated lines into a reusable buffer.
///
/// The buffer grows as needed up to `limit` bytes of content; a longer line
/// fails with [`Error::LineTooLong`] without reading the rest of it into
/// memory.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    limit: usize,
    line_number: u64,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a reader bounded by [`DEFAULT_MAX_LINE_LENGTH`].
    pub fn new(inner: R) -> Self {
        Self::with_limit(inner, DEFAULT_MAX_LINE_LENGTH)
    }

    /// Creates a reader accepting lines of at most `limit` bytes.
    pub fn with_limit(inner: R, limit: usize) -> Self {
        Self {
            inner,
            limit,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Number of lines returned so far.
    pub const fn lines_read(&self) -> u64 {
        self.line_number
    }

    /// Reads the next line, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the underlying reader fails and
    /// [`Error::LineTooLong`] if the line exceeds the configured limit.
    pub fn next_line(&mut self) -> Result<Option<Line<'_>>> {
        self.buf.clear();

        // One byte past the limit is enough to tell an over-long line apart.
        let budget = u64::try_from(self.limit)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        let read = self
            .inner
            .by_ref()
            .take(budget)
            .read_until(b'\n', &mut self.buf)
            .map_err(Error::Read)?;
        if read == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        let terminated = self.buf.last() == Some(&b'\n');
        let len = if terminated {
            self.buf.len() - 1
        } else {
            self.buf.len()
        };
        if len > self.limit {
            return Err(Error::LineTooLong {
                line: self.line_number,
                limit: self.limit,
            });
        }

        Ok(Some(Line {
            content: &self.buf[..len],
            terminated,
            number: self.line_number,
        }))
    }
}
