//! Shared functionality for the `cat`, `echo` and `uniq` command-line tools.
//!
//! Each binary parses its arguments into a configuration value and hands it
//! to one of the `run_*` entry points, which open the inputs, drive the
//! matching `text-core` operation and report failures with the program name.

pub mod config;
pub mod error;
pub mod io;
pub mod operations;
pub mod process;


pub use config::{
    CatConfig, EchoConfig, UniqConfig, DEFAULT_BUFFER_SIZE, DEFAULT_MAX_LINE_LENGTH,
    STDIN_DISPLAY_NAME, STDIN_OPERAND,
};
pub use error::{Error, InvocationError, Result};
pub use io::{display_name, is_stdin, open_input, open_output};
pub use operations::{concatenate, echo_strings, filter_duplicates};
pub use process::{cat_file, cat_files, run_cat, run_echo, run_uniq};
pub use text_core::EchoOutcome;

/// Exit status for any failure, including usage errors.
pub const EXIT_FAILURE: i32 = 1;

/// Reports a command-line parsing failure and exits.
///
/// `--help` and `--version` print to stdout and exit with status 0. Usage
/// errors print to stderr and exit with [`EXIT_FAILURE`].
pub fn exit_on_parse_error(err: clap::Error) -> ! {
    let code = if err.use_stderr() { EXIT_FAILURE } else { 0 };
    err.print().ok();
    std::process::exit(code)
}

/// Prints `err` to stderr and exits with [`EXIT_FAILURE`].
pub fn exit_with_error(err: &InvocationError) -> ! {
    eprintln!("{err}");
    std::process::exit(EXIT_FAILURE)
}
