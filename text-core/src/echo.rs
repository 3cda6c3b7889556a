//! Writing `echo` arguments.

use std::io::{self, Write};

use crate::config::EchoOptions;
use crate::escape::EscapeTokens;

/// How an echo run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoOutcome {
    /// Every argument was written.
    Completed,
    /// A `\c` escape stopped the output early.
    Terminated,
}

/// Writes `args` separated by single spaces.
///
/// With `options.escapes` each argument is decoded first. In that mode no
/// space follows an argument whose output ended with a newline byte, and a
/// `\c` escape ends all output on the spot, trailing newline included.
///
/// # Errors
///
/// Propagates write failures from `output`.
pub fn write_echo<S, W>(args: &[S], options: &EchoOptions, output: &mut W) -> io::Result<EchoOutcome>
where
    S: AsRef<[u8]>,
    W: Write,
{
    let mut separate = false;

    for arg in args {
        let arg = arg.as_ref();
        if separate {
            output.write_all(b" ")?;
        }

        if options.escapes {
            let mut last = None;
            for token in EscapeTokens::new(arg) {
                let Some(byte) = token.byte() else {
                    return Ok(EchoOutcome::Terminated);
                };
                output.write_all(&[byte])?;
                last = Some(byte);
            }
            separate = last != Some(b'\n');
        } else {
            output.write_all(arg)?;
            separate = true;
        }
    }

    if options.trailing_newline {
        output.write_all(b"\n")?;
    }

    Ok(EchoOutcome::Completed)
}
