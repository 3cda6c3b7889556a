//! Line numbering for `cat -n`.

use std::io::{BufRead, Write};

use crate::config::LINE_NUMBER_WIDTH;
use crate::error::{Error, Result};
use crate::lines::LineReader;

/// Copies `input` to `output`, prefixing every line with its number.
///
/// The prefix is the 1-based line number right-aligned in
/// [`LINE_NUMBER_WIDTH`] columns followed by two spaces. Each line keeps its
/// own terminator, so an unterminated last line stays unterminated.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Fails on read or write errors and on lines longer than `max_line_length`.
pub fn number_lines<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    max_line_length: usize,
) -> Result<u64> {
    let mut reader = LineReader::with_limit(input, max_line_length);

    while let Some(line) = reader.next_line()? {
        write!(output, "{:>width$}  ", line.number, width = LINE_NUMBER_WIDTH)
            .map_err(Error::Write)?;
        output.write_all(line.content).map_err(Error::Write)?;
        if line.terminated {
            output.write_all(b"\n").map_err(Error::Write)?;
        }
    }

    Ok(reader.lines_read())
}
