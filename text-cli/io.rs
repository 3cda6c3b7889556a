//! Opening inputs and the output stream.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::{STDIN_DISPLAY_NAME, STDIN_OPERAND};
use crate::error::{Error, Result};

/// Returns `true` if the operand names standard input.
///
/// Only `-` does. An empty operand is an ordinary file name.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_OPERAND
}

/// Name of the operand as shown in error messages.
pub fn display_name(path: &Path) -> Cow<'_, str> {
    if is_stdin(path) {
        Cow::Borrowed(STDIN_DISPLAY_NAME)
    } else {
        path.to_string_lossy()
    }
}

/// Opens an input reader for the given path, or stdin for `-`.
///
/// The returned handle closes the file when dropped.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if is_stdin(path) {
        Ok(Box::new(io::stdin().lock()))
    } else {
        let file = File::open(path).map_err(|source| Error::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Opens a buffered writer on stdout.
pub fn open_output() -> Box<dyn Write> {
    Box::new(BufWriter::new(io::stdout()))
}
