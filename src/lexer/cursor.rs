use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Sentinel returned once the source is exhausted or a NUL byte is read.
pub const END: u8 = b'\0';

/// Line number of the first line of a source.
pub const LINE_BASE: u32 = 1;

pub fn is_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

pub fn is_line_end(c: u8) -> bool {
    c == b'\n' || c == END
}

pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_numeral(c: u8) -> bool {
    is_digit(c) || c == b'.'
}

pub fn is_alphanum(c: u8) -> bool {
    is_digit(c) || is_alpha(c)
}

pub fn is_identifier_begin(c: u8) -> bool {
    is_alpha(c) || c == b'_'
}

pub fn is_identifier(c: u8) -> bool {
    is_alphanum(c) || c == b'_'
}

/// Forward-only reader over a source text.
///
/// `position()` always describes the byte returned by the last `advance()`:
/// a newline moves to the next line at column 0, any other byte bumps the
/// column by one.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    offset: usize,
    line: u32,
    col: u32,
    current: u8,
    exhausted: bool,
}

impl Cursor {
    pub fn new(source: String) -> Cursor {
        Cursor {
            source,
            offset: 0,
            line: LINE_BASE,
            col: 0,
            current: END,
            exhausted: false,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Byte offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// The byte returned by the last `advance()`.
    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn is_end(&self) -> bool {
        self.exhausted
    }

    pub(crate) fn advance(&mut self) -> Result<u8, Error> {
        if self.exhausted {
            return Err(Error::new(ErrorImpl::UnexpectedEnd, self.position()));
        }

        // A NUL byte in the source ends the text just like running out of it.
        let Some(&byte) = self.source.as_bytes().get(self.offset).filter(|&&b| b != END) else {
            self.current = END;
            self.exhausted = true;
            return Ok(END);
        };

        self.current = byte;
        self.offset += 1;

        if byte == b'\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }

        Ok(byte)
    }

    /// The byte after `current()`, without consuming it.
    pub(crate) fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.offset).copied().unwrap_or(END)
    }

    /// Up to `len` bytes starting at `current()`.
    pub(crate) fn window(&self, len: usize) -> &[u8] {
        if self.exhausted || self.offset == 0 {
            return &[];
        }

        let bytes = self.source.as_bytes();
        let start = self.offset - 1;
        let end = usize::min(start + len, bytes.len());
        &bytes[start..end]
    }

    /// Source text of the character starting at `current()`, for diagnostics.
    pub(crate) fn current_lexeme(&self) -> String {
        self.offset
            .checked_sub(1)
            .and_then(|start| self.source.get(start..))
            .and_then(|rest| rest.chars().next())
            .map(|c| c.to_string())
            .unwrap_or_else(|| String::from_utf8_lossy(&[self.current]).into_owned())
    }
}
