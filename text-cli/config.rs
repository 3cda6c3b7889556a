//! Configuration types and constants for the text utilities.

use text_core::{CompareOptions, EchoOptions, UniqMode, UniqOptions};

pub use text_core::config::DEFAULT_MAX_LINE_LENGTH;

/// Default buffer size for unnumbered `cat` copies
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Operand naming standard input
pub const STDIN_OPERAND: &str = "-";

/// Name used for standard input in error messages
pub const STDIN_DISPLAY_NAME: &str = "(stdin)";

/// Configuration for `cat`
#[derive(Debug, Clone)]
pub struct CatConfig {
    /// Prefix each output line with its number
    pub number: bool,
    /// Chunk size for unnumbered copies
    pub buffer_size: usize,
    /// Longest accepted line when numbering
    pub max_line_length: usize,
}

impl Default for CatConfig {
    fn default() -> Self {
        Self {
            number: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Configuration for `echo`
#[derive(Debug, Clone)]
pub struct EchoConfig {
    /// Interpret backslash escapes
    pub escapes: bool,
    /// Output the trailing newline
    pub trailing_newline: bool,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            escapes: false,
            trailing_newline: true,
        }
    }
}

impl EchoConfig {
    /// Options for the echo writer.
    pub fn options(&self) -> EchoOptions {
        EchoOptions {
            escapes: self.escapes,
            trailing_newline: self.trailing_newline,
        }
    }
}

/// Configuration for `uniq`
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct UniqConfig {
    /// Prefix lines with their number of occurrences
    pub count: bool,
    /// Only print groups with duplicates
    pub repeated: bool,
    /// Only print groups without duplicates
    pub unique: bool,
    /// Ignore ASCII case when comparing
    pub ignore_case: bool,
    /// Leading bytes to ignore when comparing
    pub skip_chars: usize,
    /// Leading fields to ignore when comparing
    pub skip_fields: usize,
    /// Longest accepted input line
    pub max_line_length: usize,
}

impl Default for UniqConfig {
    fn default() -> Self {
        Self {
            count: false,
            repeated: false,
            unique: false,
            ignore_case: false,
            skip_chars: 0,
            skip_fields: 0,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl UniqConfig {
    /// Resolves the flags into grouping options.
    ///
    /// `-u` takes precedence over `-d` when both are given.
    pub fn options(&self) -> UniqOptions {
        UniqOptions {
            compare: CompareOptions {
                skip_chars: self.skip_chars,
                skip_fields: self.skip_fields,
                ignore_case: self.ignore_case,
            },
            mode: UniqMode::from_flags(self.unique, self.repeated),
            count: self.count,
            max_line_length: self.max_line_length,
        }
    }
}
