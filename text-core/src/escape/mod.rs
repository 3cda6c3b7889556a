//! Backslash-escape decoding for `echo -e`.
//!
//! Recognised sequences:
//!
//! | Sequence        | Result                                        |
//! |-----------------|-----------------------------------------------|
//! | `\\`            | backslash                                     |
//! | `\a` `\b` `\e`  | BEL (0x07), BS (0x08), ESC (0x1B)             |
//! | `\f` `\n` `\r`  | FF (0x0C), LF (0x0A), CR (0x0D)               |
//! | `\t` `\v`       | TAB (0x09), VT (0x0B)                         |
//! | `\c`            | stop producing output                         |
//! | `\0NNN`         | byte with octal value NNN (0 to 3 digits)     |
//! | `\NNN`          | byte with octal value NNN, first digit 1-7    |
//! | `\xHH`          | byte with hexadecimal value HH (1 to 2 digits)|
//!
//! Anything else after a backslash, including the end of the argument, leaves
//! the backslash in the output and continues with the following byte. `\x`
//! without a hex digit is therefore printed as-is.


/// Maximum number of octal digits after `\0`.
const MAX_ZERO_OCTAL_DIGITS: usize = 3;

/// Maximum number of additional octal digits after a bare `\1`-`\7`.
const MAX_BARE_OCTAL_DIGITS: usize = 2;

/// Maximum number of hex digits after `\x`.
const MAX_HEX_DIGITS: usize = 2;

/// One decoded unit of an escaped argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeToken {
    /// Byte copied from the input, or a backslash that did not start an escape.
    Literal(u8),

    /// Byte produced by a named control escape such as `\n` or `\t`.
    Control(u8),

    /// Byte produced by an octal or hexadecimal escape.
    Numeric(u8),

    /// `\c`: no further output may be produced.
    Terminate,
}

impl EscapeToken {
    /// Returns the byte this token writes, or `None` for [`EscapeToken::Terminate`].
    pub const fn byte(self) -> Option<u8> {
        match self {
            Self::Literal(byte) | Self::Control(byte) | Self::Numeric(byte) => Some(byte),
            Self::Terminate => None,
        }
    }
}

/// Streaming decoder over one argument.
///
/// The iterator ends after yielding [`EscapeToken::Terminate`], even if input
/// remains.
#[derive(Debug, Clone)]
pub struct EscapeTokens<'a> {
    input: &'a [u8],
    pos: usize,
    terminated: bool,
}

impl<'a> EscapeTokens<'a> {
    /// Creates a decoder over `input`.
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            terminated: false,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Accumulates up to `max_digits` octal digits onto `value`.
    ///
    /// Arithmetic wraps at 8 bits, so `\777` yields 0xFF.
    fn take_octal(&mut self, mut value: u8, max_digits: usize) -> u8 {
        for _ in 0..max_digits {
            match self.peek() {
                Some(digit @ b'0'..=b'7') => {
                    value = value.wrapping_mul(8).wrapping_add(digit - b'0');
                    self.pos += 1;
                }
                _ => break,
            }
        }
        value
    }

    /// Accumulates up to `max_digits` hex digits. Returns `None` if none follow.
    fn take_hex(&mut self, max_digits: usize) -> Option<u8> {
        let mut value: Option<u8> = None;
        for _ in 0..max_digits {
            let Some(digit) = self.peek().and_then(hex_value) else {
                break;
            };
            value = Some(value.unwrap_or(0).wrapping_mul(16).wrapping_add(digit));
            self.pos += 1;
        }
        value
    }

    /// Decodes the sequence following a backslash at `self.pos - 1`.
    fn escape(&mut self) -> EscapeToken {
        let Some(next) = self.peek() else {
            return EscapeToken::Literal(b'\\');
        };

        let control = match next {
            b'\\' => Some(EscapeToken::Literal(b'\\')),
            b'a' => Some(EscapeToken::Control(0x07)),
            b'b' => Some(EscapeToken::Control(0x08)),
            b'e' => Some(EscapeToken::Control(0x1B)),
            b'f' => Some(EscapeToken::Control(0x0C)),
            b'n' => Some(EscapeToken::Control(b'\n')),
            b'r' => Some(EscapeToken::Control(b'\r')),
            b't' => Some(EscapeToken::Control(b'\t')),
            b'v' => Some(EscapeToken::Control(0x0B)),
            b'c' => {
                self.terminated = true;
                Some(EscapeToken::Terminate)
            }
            _ => None,
        };
        if let Some(token) = control {
            self.pos += 1;
            return token;
        }

        match next {
            b'0' => {
                self.pos += 1;
                EscapeToken::Numeric(self.take_octal(0, MAX_ZERO_OCTAL_DIGITS))
            }
            b'1'..=b'7' => {
                self.pos += 1;
                EscapeToken::Numeric(self.take_octal(next - b'0', MAX_BARE_OCTAL_DIGITS))
            }
            b'x' => {
                let start = self.pos;
                self.pos += 1;
                match self.take_hex(MAX_HEX_DIGITS) {
                    Some(value) => EscapeToken::Numeric(value),
                    None => {
                        // Not an escape: emit the backslash, `x` follows as a literal.
                        self.pos = start;
                        EscapeToken::Literal(b'\\')
                    }
                }
            }
            _ => EscapeToken::Literal(b'\\'),
        }
    }
}

impl Iterator for EscapeTokens<'_> {
    type Item = EscapeToken;

    fn next(&mut self) -> Option<EscapeToken> {
        if self.terminated {
            return None;
        }
        let byte = self.peek()?;
        self.pos += 1;

        if byte == b'\\' {
            Some(self.escape())
        } else {
            Some(EscapeToken::Literal(byte))
        }
    }
}

/// Fully decoded argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Bytes produced before the end of input or `\c`.
    pub bytes: Vec<u8>,
    /// Whether `\c` was reached.
    pub terminated: bool,
}

/// Decodes every escape in `input`.
pub fn decode(input: &[u8]) -> Decoded {
    let mut decoded = Decoded {
        bytes: Vec::with_capacity(input.len()),
        terminated: false,
    };

    for token in EscapeTokens::new(input) {
        match token.byte() {
            Some(byte) => decoded.bytes.push(byte),
            None => decoded.terminated = true,
        }
    }

    decoded
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
