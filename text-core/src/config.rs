//! Shared configuration primitives for line processing and echo output.

/// Upper bound on the length of a single line, excluding its terminator.
///
/// Lines longer than this are rejected with [`Error::LineTooLong`] instead of
/// being silently split.
///
/// [`Error::LineTooLong`]: crate::Error::LineTooLong
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024 * 1024;

/// Width of the right-aligned occurrence count printed by `uniq -c`.
pub const COUNT_WIDTH: usize = 6;

/// Width of the right-aligned line number printed by `cat -n`.
pub const LINE_NUMBER_WIDTH: usize = 6;

/// Controls which part of a line takes part in a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Number of leading bytes ignored on each line.
    pub skip_chars: usize,

    /// Number of leading whitespace-delimited fields ignored on each line.
    ///
    /// Fields are counted in what remains after `skip_chars`.
    pub skip_fields: usize,

    /// Compare ASCII letters without regard to case.
    pub ignore_case: bool,
}

/// Which groups `uniq` prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UniqMode {
    /// Print one line for every group.
    #[default]
    All,

    /// Print only groups made of a single line.
    Unique,

    /// Print only groups with more than one line.
    Repeated,
}

impl UniqMode {
    /// Resolves the `-u` / `-d` flags into a mode.
    ///
    /// The flags are independent on the command line; when both are given
    /// `Unique` wins.
    pub const fn from_flags(unique: bool, repeated: bool) -> Self {
        if unique {
            Self::Unique
        } else if repeated {
            Self::Repeated
        } else {
            Self::All
        }
    }

    /// Returns `true` if a group of `count` lines is printed in this mode.
    pub const fn admits(self, count: u64) -> bool {
        match self {
            Self::All => true,
            Self::Unique => count == 1,
            Self::Repeated => count > 1,
        }
    }
}

/// Options for folding a line stream into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqOptions {
    /// How lines are compared.
    pub compare: CompareOptions,
    /// Which groups are printed.
    pub mode: UniqMode,
    /// Prefix each printed line with its group size.
    pub count: bool,
    /// Longest accepted input line, in bytes.
    pub max_line_length: usize,
}

impl Default for UniqOptions {
    fn default() -> Self {
        Self {
            compare: CompareOptions::default(),
            mode: UniqMode::All,
            count: false,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Options for writing `echo` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoOptions {
    /// Decode backslash escapes in every argument.
    pub escapes: bool,
    /// Terminate the output with a newline.
    pub trailing_newline: bool,
}

impl Default for EchoOptions {
    fn default() -> Self {
        Self {
            escapes: false,
            trailing_newline: true,
        }
    }
}
