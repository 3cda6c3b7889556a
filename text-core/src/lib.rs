//! # text-core
//!
//! Line comparison, duplicate grouping and backslash-escape decoding for the
//! `cat`, `echo` and `uniq` utilities.
//!
//! The crate knows nothing about argument parsing or process streams: every
//! operation is generic over [`std::io::BufRead`] / [`std::io::Write`] and is
//! driven by an immutable options value built once by the caller.
//!
//! ## Layout
//!
//! - [`compare`] decides whether two lines belong to the same group, after
//!   skipping leading characters and fields.
//! - [`dedup`] folds a line stream into consecutive groups and renders them.
//! - [`escape`] decodes the `echo -e` escape grammar into tokens.
//! - [`echo`] writes a list of arguments, decoding escapes on demand.
//! - [`lines`] reads `\n`-terminated lines with an explicit length bound.
//! - [`number`] prefixes lines with their line number.

pub mod compare;
pub mod config;
pub mod dedup;
pub mod echo;
pub mod error;
pub mod escape;
pub mod lines;
pub mod number;

pub use compare::{compare, comparison_key, same_group};
pub use config::{CompareOptions, EchoOptions, UniqMode, UniqOptions};
pub use dedup::{uniq, Deduplicator, Group};
pub use echo::{write_echo, EchoOutcome};
pub use error::{Error, Result};
pub use escape::{decode, Decoded, EscapeToken, EscapeTokens};
pub use lines::{Line, LineReader};
pub use number::number_lines;
