//! Command line argument parsing for the echo utility.

use std::ffi::OsString;

use clap::Parser;

use text_cli::{exit_on_parse_error, EchoConfig};

const ESCAPE_HELP: &str = "\
If -e is in effect, the following sequences are recognized:

  \\\\      backslash
  \\a      alert (BEL)
  \\b      backspace
  \\c      produce no further output
  \\e      escape
  \\f      form feed
  \\n      new line
  \\r      carriage return
  \\t      horizontal tab
  \\v      vertical tab
  \\0NNN   byte with octal value NNN (1 to 3 digits)
  \\xHH    byte with hexadecimal value HH (1 to 2 digits)

Consider using the printf(1) command instead,
as it avoids problems when outputting option-like strings.";

/// Echo the STRING(s) to standard output
#[derive(Debug, Parser)]
#[command(
    name = "echo",
    version,
    about = "Echo the STRING(s) to standard output",
    after_help = ESCAPE_HELP
)]
pub struct EchoOpts {
    /// Strings to print
    #[arg(value_name = "STRING", trailing_var_arg = true)]
    strings: Vec<OsString>,

    /// Do not output the trailing newline
    #[arg(short = 'n')]
    no_newline: bool,

    /// Enable interpretation of backslash escapes
    #[arg(short = 'e', overrides_with = "disable_escapes")]
    enable_escapes: bool,

    /// Disable interpretation of backslash escapes (default)
    #[arg(short = 'E', overrides_with = "enable_escapes")]
    disable_escapes: bool,
}

impl EchoOpts {
    /// Parse command line arguments, exiting on failure
    pub fn parse() -> Self {
        Self::try_parse().unwrap_or_else(|err| exit_on_parse_error(err))
    }

    /// Build the configuration from the parsed options
    pub fn config(&self) -> EchoConfig {
        EchoConfig {
            escapes: self.enable_escapes,
            trailing_newline: !self.no_newline,
        }
    }

    /// Strings supplied on the command line
    pub fn strings(&self) -> &[OsString] {
        &self.strings
    }
}
