//! Folding a line stream into groups of adjacent duplicates.
//!
//! [`Deduplicator`] is a small state machine that holds at most one pending
//! group. Each pushed line either extends that group or closes it, so memory
//! use does not depend on the number of groups in the input.

use std::io::{BufRead, Write};

use crate::compare::same_group;
use crate::config::{CompareOptions, UniqOptions, COUNT_WIDTH};
use crate::error::{Error, Result};
use crate::lines::LineReader;


/// A maximal run of adjacent lines with equal comparison keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// First line of the run, exactly as read.
    pub line: Vec<u8>,
    /// Number of lines in the run.
    pub count: u64,
}

impl Group {
    fn new(line: &[u8]) -> Self {
        Self {
            line: line.to_vec(),
            count: 1,
        }
    }

    /// Writes the group as one output line, optionally prefixed by its count.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `output`.
    pub fn write_to<W: Write>(&self, show_count: bool, output: &mut W) -> std::io::Result<()> {
        if show_count {
            write!(output, "{:>width$} ", self.count, width = COUNT_WIDTH)?;
        }
        output.write_all(&self.line)?;
        output.write_all(b"\n")
    }
}

/// Streaming grouper.
///
/// ```text
/// START --push--> ACCUMULATING --push(same)--> ACCUMULATING
///                      |  ^
///            push(new) |  | (closed group returned)
///                      v  |
///                 ACCUMULATING --finish--> DONE (last group returned)
/// ```
#[derive(Debug, Clone)]
pub struct Deduplicator {
    options: CompareOptions,
    pending: Option<Group>,
}

impl Deduplicator {
    /// Creates an empty grouper.
    pub const fn new(options: CompareOptions) -> Self {
        Self {
            options,
            pending: None,
        }
    }

    /// Feeds the next line and returns the group it closed, if any.
    ///
    /// Comparing against the group's first line is equivalent to comparing
    /// against the previous line, since key equality is transitive.
    pub fn push(&mut self, line: &[u8]) -> Option<Group> {
        let Some(group) = self.pending.as_mut() else {
            self.pending = Some(Group::new(line));
            return None;
        };

        if same_group(&group.line, line, &self.options) {
            group.count += 1;
            None
        } else {
            Some(std::mem::replace(group, Group::new(line)))
        }
    }

    /// Ends the input and returns the last pending group, if any.
    pub fn finish(self) -> Option<Group> {
        self.pending
    }
}

/// Groups an in-memory sequence of lines.
pub fn group_lines<I, L>(lines: I, options: &CompareOptions) -> Vec<Group>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut dedup = Deduplicator::new(*options);
    let mut groups: Vec<Group> = lines
        .into_iter()
        .filter_map(|line| dedup.push(line.as_ref()))
        .collect();
    groups.extend(dedup.finish());
    groups
}

/// Runs `uniq` over `input`, writing the selected groups to `output`.
///
/// Returns the number of groups written.
///
/// # Errors
///
/// Fails on read or write errors and on lines longer than
/// `options.max_line_length`.
pub fn uniq<R: BufRead, W: Write>(input: R, output: &mut W, options: &UniqOptions) -> Result<u64> {
    let mut reader = LineReader::with_limit(input, options.max_line_length);
    let mut dedup = Deduplicator::new(options.compare);
    let mut written = 0;

    let mut emit = |group: Group, output: &mut W| -> Result<()> {
        if options.mode.admits(group.count) {
            group.write_to(options.count, output).map_err(Error::Write)?;
            written += 1;
        }
        Ok(())
    };

    while let Some(line) = reader.next_line()? {
        if let Some(group) = dedup.push(line.content) {
            emit(group, output)?;
        }
    }
    if let Some(group) = dedup.finish() {
        emit(group, output)?;
    }

    Ok(written)
}
