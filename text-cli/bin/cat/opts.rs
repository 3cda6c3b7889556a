//! Command line argument parsing for the cat utility.

use std::path::PathBuf;

use clap::Parser;

use text_cli::{exit_on_parse_error, CatConfig};

/// Concatenate FILE(s) to standard output
#[derive(Debug, Parser)]
#[command(
    name = "cat",
    version,
    about = "Concatenate FILE(s) to standard output",
    long_about = "Concatenate FILE(s) to standard output. \
                 With no FILE, or when FILE is -, read standard input.",
    after_help = "Examples:\n  \
                  cat f - g  Output f's contents, then standard input, then g's contents.\n  \
                  cat        Copy standard input to standard output."
)]
pub struct CatOpts {
    /// Files to concatenate
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Number all output lines
    #[arg(short = 'n', long = "number")]
    number: bool,
}

impl CatOpts {
    /// Parse command line arguments, exiting on failure
    pub fn parse() -> Self {
        Self::try_parse().unwrap_or_else(|err| exit_on_parse_error(err))
    }

    /// Build the configuration from the parsed options
    pub fn config(&self) -> CatConfig {
        CatConfig {
            number: self.number,
            ..CatConfig::default()
        }
    }

    /// Files supplied on the command line
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}
