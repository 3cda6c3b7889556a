//! Per-stream operations behind each utility.

use std::ffi::OsStr;
use std::io::{self, BufRead, Write};

use text_core::{number_lines, uniq, write_echo, EchoOutcome};

use crate::config::{CatConfig, EchoConfig, UniqConfig};
use crate::error::{Error, Result};

/// Copies one input to `output`, numbering lines if configured.
///
/// `name` is used for error messages only.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails, or if a
/// numbered line exceeds the configured length.
pub fn concatenate(
    mut input: impl BufRead,
    output: &mut impl Write,
    config: &CatConfig,
    name: &str,
) -> Result<()> {
    if config.number {
        number_lines(input, output, config.max_line_length)
            .map_err(|err| Error::from_core(name, err))?;
        return Ok(());
    }

    let mut buffer = vec![0u8; config.buffer_size.max(1)];
    loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(Error::Read {
                    path: name.to_string(),
                    source,
                })
            }
        };
        output
            .write_all(&buffer[..read])
            .map_err(|source| Error::Write { source })?;
    }

    Ok(())
}

/// Filters adjacent duplicate lines of `input` into `output`.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns an error on read or write failure or on an over-long line.
pub fn filter_duplicates(
    input: impl BufRead,
    output: &mut impl Write,
    config: &UniqConfig,
    name: &str,
) -> Result<u64> {
    uniq(input, output, &config.options()).map_err(|err| Error::from_core(name, err))
}

/// Writes `strings` the way `echo` does.
///
/// Arguments are passed through as raw bytes, so they need not be UTF-8.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn echo_strings<S: AsRef<OsStr>>(
    strings: &[S],
    output: &mut impl Write,
    config: &EchoConfig,
) -> Result<EchoOutcome> {
    let args: Vec<&[u8]> = strings
        .iter()
        .map(|arg| arg.as_ref().as_encoded_bytes())
        .collect();
    write_echo(&args, &config.options(), output).map_err(|source| Error::Write { source })
}
