//! Line comparison used to decide group membership.
//!
//! A line is first reduced to its comparison key by dropping `skip_chars`
//! leading bytes and then `skip_fields` whitespace-delimited fields. Keys are
//! compared byte-wise, optionally folding ASCII case. The stored line is never
//! modified.

use std::cmp::Ordering;

use crate::config::CompareOptions;

/// Returns `true` for the bytes C's `isspace` accepts in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
pub(crate) const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns the part of `line` that takes part in comparisons.
///
/// Bytes are skipped first, fields are counted in the remainder. A field is a
/// run of non-blank bytes followed by its run of trailing blanks, so leading
/// blanks on a line form an empty first field. Skipping past the end yields an
/// empty key.
pub fn comparison_key<'a>(line: &'a [u8], options: &CompareOptions) -> &'a [u8] {
    let mut pos = options.skip_chars.min(line.len());

    for _ in 0..options.skip_fields {
        if pos == line.len() {
            break;
        }
        while pos < line.len() && !is_blank(line[pos]) {
            pos += 1;
        }
        while pos < line.len() && is_blank(line[pos]) {
            pos += 1;
        }
    }

    &line[pos..]
}

/// Compares the comparison keys of two lines.
///
/// Only the distinction between [`Ordering::Equal`] and the other variants is
/// meaningful to callers.
pub fn compare(a: &[u8], b: &[u8], options: &CompareOptions) -> Ordering {
    let a = comparison_key(a, options);
    let b = comparison_key(b, options);

    if options.ignore_case {
        a.iter()
            .map(u8::to_ascii_lowercase)
            .cmp(b.iter().map(u8::to_ascii_lowercase))
    } else {
        a.cmp(b)
    }
}

/// Returns `true` if both lines belong to the same group.
pub fn same_group(a: &[u8], b: &[u8], options: &CompareOptions) -> bool {
    compare(a, b, options) == Ordering::Equal
}
