use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    cursor::{is_identifier, is_identifier_begin, is_line_end, is_numeral, is_whitespace, Cursor},
    tokens::{Token, TokenKind, MAX_MATCH_LEN, SCAN_ORDER},
};

/// A pull-based lexing session over one source text.
///
/// Not reentrant: a session owns its cursor and must be driven by a single
/// caller.
pub struct Lexer {
    cursor: Cursor,
    // The current byte was read past the end of the previous token and
    // starts the next one.
    held: bool,
    last_token: Option<Token>,
    file: String,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = file.unwrap_or_else(|| String::from("shell"));

        debug!(file = %file_name, bytes = source.len(), "lexer session created");

        Lexer {
            cursor: Cursor::new(source),
            held: false,
            last_token: None,
            file: file_name,
        }
    }

    /// Scans and returns the next token. Once `End` has been returned every
    /// further call returns `End` again.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.scan() {
            Ok(token) => {
                trace!(kind = %token.kind, line = token.line(), col = token.col(), "token");
                self.last_token = Some(token.clone());
                Ok(token)
            }
            Err(error) => {
                debug!(file = %self.file, %error, "lexing halted");
                Err(error)
            }
        }
    }

    pub fn last_token(&self) -> Option<&Token> {
        self.last_token.as_ref()
    }

    /// Text of the last token if it was an identifier, string or real literal.
    pub fn last_text(&self) -> Option<&str> {
        self.last_token.as_ref().and_then(Token::value)
    }

    pub fn line(&self) -> u32 {
        self.last_position().line
    }

    pub fn column(&self) -> u32 {
        self.last_position().col
    }

    pub fn raw_position(&self) -> &Cursor {
        &self.cursor
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    fn last_position(&self) -> Position {
        match &self.last_token {
            Some(token) => token.position,
            None => Position::start(),
        }
    }

    fn end_here(&self) -> Token {
        MK_TOKEN!(TokenKind::End, self.cursor.position())
    }

    fn scan(&mut self) -> Result<Token, Error> {
        loop {
            if self.cursor.is_end() {
                return Ok(self.end_here());
            }

            if self.held {
                self.held = false;
            } else {
                self.cursor.advance()?;
            }

            while is_whitespace(self.cursor.current()) {
                self.cursor.advance()?;
            }

            if self.cursor.is_end() {
                return Ok(self.end_here());
            }

            let start = self.cursor.position();

            if self.cursor.current() == b'/' {
                match self.cursor.peek() {
                    b'/' => {
                        self.skip_line_comment()?;
                        continue;
                    }
                    b'*' => {
                        self.skip_block_comment(start)?;
                        continue;
                    }
                    _ => {}
                }
            }

            return self.dispatch(start);
        }
    }

    fn dispatch(&mut self, start: Position) -> Result<Token, Error> {
        let c = self.cursor.current();

        if c == b'"' || c == b'\'' {
            return self.scan_string(c, start);
        }

        if c == b'$' {
            return Err(Error::new(
                ErrorImpl::UnimplementedFeature {
                    feature: String::from("hex color literals"),
                },
                start,
            ));
        }

        if let Some(kind) = self.match_fixed()? {
            return Ok(MK_TOKEN!(kind, start));
        }

        if is_numeral(c) {
            let text = self.scan_run(is_numeral)?;
            return Ok(MK_TOKEN!(TokenKind::RealLiteral, start, Some(text)));
        }

        if is_identifier_begin(c) {
            let text = self.scan_run(is_identifier)?;
            return Ok(MK_TOKEN!(TokenKind::Identifier, start, Some(text)));
        }

        Err(Error::new(
            ErrorImpl::UnknownToken {
                token: self.cursor.current_lexeme(),
            },
            start,
        ))
    }

    // Current byte is the first `/`. Stops on the terminating newline, which
    // is held so it lexes as a LineFeed of its own.
    fn skip_line_comment(&mut self) -> Result<(), Error> {
        self.cursor.advance()?;
        while !is_line_end(self.cursor.advance()?) {}

        if !self.cursor.is_end() {
            self.held = true;
        }
        Ok(())
    }

    // Current byte is the `/` of `/*`. The opening `*` never closes.
    fn skip_block_comment(&mut self, start: Position) -> Result<(), Error> {
        self.cursor.advance()?;

        let mut after_star = false;
        loop {
            let c = self.cursor.advance()?;
            if self.cursor.is_end() {
                return Err(Error::new(ErrorImpl::UnterminatedComment, start));
            }
            if after_star && c == b'/' {
                return Ok(());
            }
            after_star = c == b'*';
        }
    }

    /// Longest fixed-text spelling starting at the current byte. Alphabetic
    /// spellings must end on an identifier boundary.
    fn match_fixed(&mut self) -> Result<Option<TokenKind>, Error> {
        let window = self.cursor.window(*MAX_MATCH_LEN + 1);

        let matched = SCAN_ORDER.iter().find(|(spelling, _)| {
            let spelling = spelling.as_bytes();
            if !window.starts_with(spelling) {
                return false;
            }

            let is_word = is_identifier_begin(spelling[0]);
            !(is_word && window.get(spelling.len()).is_some_and(|&c| is_identifier(c)))
        });

        let Some(&(spelling, kind)) = matched else {
            return Ok(None);
        };

        for _ in 1..spelling.len() {
            self.cursor.advance()?;
        }
        Ok(Some(kind))
    }

    // Reads one byte past the run; that byte is held for the next call.
    fn scan_run(&mut self, accept: fn(u8) -> bool) -> Result<String, Error> {
        let mut text = String::new();
        text.push(self.cursor.current() as char);

        while accept(self.cursor.advance()?) {
            text.push(self.cursor.current() as char);
        }

        self.held = true;
        Ok(text)
    }

    /// Scans a `"` or `'` delimited string. `#` is a legacy newline, `\n`,
    /// `\#` and an escaped delimiter are the only escapes. Running out of
    /// source inside the string yields `End` at the string's start.
    fn scan_string(&mut self, delim: u8, start: Position) -> Result<Token, Error> {
        let mut value: Vec<u8> = Vec::new();

        loop {
            let c = self.cursor.advance()?;
            if self.cursor.is_end() {
                return Ok(MK_TOKEN!(TokenKind::End, start));
            }
            if c == delim {
                break;
            }

            match c {
                b'\\' => {
                    let escaped = self.cursor.advance()?;
                    if self.cursor.is_end() {
                        return Ok(MK_TOKEN!(TokenKind::End, start));
                    }

                    match escaped {
                        b'n' => value.push(b'\n'),
                        b'#' => value.push(b'#'),
                        e if e == delim => value.push(delim),
                        other => value.extend_from_slice(&[b'\\', other]),
                    }
                }
                b'#' => value.push(b'\n'),
                other => value.push(other),
            }
        }

        let value = String::from_utf8_lossy(&value).into_owned();
        Ok(MK_TOKEN!(TokenKind::StringLiteral, start, Some(value)))
    }
}

/// Lexes a whole source, returning every token up to and including `End`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let is_end = token.kind == TokenKind::End;
        tokens.push(token);

        if is_end {
            return Ok(tokens);
        }
    }
}
