//! High-level orchestration for each utility.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use text_core::EchoOutcome;

use crate::config::{CatConfig, EchoConfig, UniqConfig, STDIN_OPERAND};
use crate::error::{Error, InvocationError, Result};
use crate::io::{display_name, open_input, open_output};
use crate::operations::{concatenate, echo_strings, filter_duplicates};

/// Copies a single operand to `output`.
///
/// The input is opened here and closed before returning, on success or error.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or the output
/// cannot be written.
pub fn cat_file(input_path: &Path, output: &mut impl Write, config: &CatConfig) -> Result<()> {
    let input = open_input(input_path)?;
    concatenate(input, output, config, &display_name(input_path))
}

/// Copies every operand in `files` to `output`, then flushes it.
///
/// Processing stops at the first failing operand. The output is flushed on
/// that path too, and the operand's error takes precedence over a flush error.
///
/// # Errors
///
/// Returns the first open, read or write error.
pub fn cat_files<P: AsRef<Path>>(
    files: &[P],
    output: &mut impl Write,
    config: &CatConfig,
) -> Result<()> {
    let result = files
        .iter()
        .try_for_each(|file| cat_file(file.as_ref(), &mut *output, config));
    let flushed = flush(output);
    result.and(flushed)
}

/// Runs `cat` over `files`, or stdin when `files` is empty.
///
/// # Errors
///
/// Returns the first error, tagged with `program`.
pub fn run_cat(
    files: &[PathBuf],
    config: &CatConfig,
    program: &str,
) -> std::result::Result<(), InvocationError> {
    let mut output = open_output();

    let result = if files.is_empty() {
        cat_files(&[STDIN_OPERAND], &mut output, config)
    } else {
        cat_files(files, &mut output, config)
    };

    result.map_err(|err| InvocationError::new(program, err))
}

/// Runs `uniq` over `input`, or stdin when it is `None`.
///
/// Groups written before a failure are flushed before the error is returned.
///
/// # Errors
///
/// Returns the first error, tagged with `program`.
pub fn run_uniq(
    input: Option<&Path>,
    config: &UniqConfig,
    program: &str,
) -> std::result::Result<u64, InvocationError> {
    let input_path = input.unwrap_or_else(|| Path::new(STDIN_OPERAND));

    let run = || -> Result<u64> {
        let reader = open_input(input_path)?;
        let mut output = open_output();
        let result = filter_duplicates(reader, &mut output, config, &display_name(input_path));
        let flushed = flush(&mut output);
        result.and_then(|written| flushed.map(|()| written))
    };

    run().map_err(|err| InvocationError::new(program, err))
}

/// Runs `echo` over `strings`.
///
/// # Errors
///
/// Returns a write error, tagged with `program`.
pub fn run_echo(
    strings: &[OsString],
    config: &EchoConfig,
    program: &str,
) -> std::result::Result<EchoOutcome, InvocationError> {
    let mut output = open_output();

    echo_strings(strings, &mut output, config)
        .and_then(|outcome| flush(&mut output).map(|()| outcome))
        .map_err(|err| InvocationError::new(program, err))
}

fn flush(output: &mut impl Write) -> Result<()> {
    output.flush().map_err(|source| Error::Write { source })
}
