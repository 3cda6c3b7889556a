//! Command line argument parsing for the uniq utility.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

use text_cli::{exit_on_parse_error, UniqConfig};

/// Filter adjacent matching lines
///
/// Only `--help` is accepted for help, so `-h` stays free like in the
/// classic tool.
#[derive(Debug, Parser)]
#[command(
    name = "uniq",
    version,
    about = "Filter adjacent matching lines from INPUT (or standard input), \
             writing to standard output.",
    disable_help_flag = true
)]
pub struct UniqOpts {
    /// Input file (standard input if omitted or -)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Prefix lines by the number of occurrences
    #[arg(short = 'c', long = "count")]
    count: bool,

    /// Only print duplicate lines, one for each group
    #[arg(short = 'd', long = "repeated")]
    repeated: bool,

    /// Only print unique lines
    #[arg(short = 'u', long = "unique")]
    unique: bool,

    /// Ignore differences in case when comparing
    #[arg(short = 'i', long = "ignore-case")]
    ignore_case: bool,

    /// Avoid comparing the first N characters
    #[arg(short = 's', long = "skip-chars", value_name = "N", default_value_t = 0)]
    skip_chars: usize,

    /// Avoid comparing the first N fields
    #[arg(short = 'f', long = "skip-fields", value_name = "N", default_value_t = 0)]
    skip_fields: usize,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

impl UniqOpts {
    /// Parse command line arguments, exiting on failure
    pub fn parse() -> Self {
        Self::try_parse().unwrap_or_else(|err| exit_on_parse_error(err))
    }

    /// Build the configuration from the parsed options
    pub fn config(&self) -> UniqConfig {
        UniqConfig {
            count: self.count,
            repeated: self.repeated,
            unique: self.unique,
            ignore_case: self.ignore_case,
            skip_chars: self.skip_chars,
            skip_fields: self.skip_fields,
            ..UniqConfig::default()
        }
    }

    /// Input operand, if one was given
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }
}
