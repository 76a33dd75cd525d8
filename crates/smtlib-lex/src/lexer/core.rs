//! Core lexer: dispatch loop and whitespace/comment skipping.

use smtlib_util::{LexError, LexResult, Position};

use crate::cursor::Cursor;
use crate::token::Token;

/// Tokenizes SMT-LIB v2 source text one token at a time.
///
/// `next_token` is the sole public operation: it returns the next token and
/// the position of its first character, or [`Token::Eof`] once the reader
/// is exhausted at a token boundary. A [`smtlib_util::LexError`] is
/// terminal — the lexer makes no attempt to recover or resynchronize.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start_line: 1,
            token_start_column: 0,
        }
    }

    /// The position of the token currently being lexed — used to stamp
    /// both the returned token and any error raised while reading it.
    pub(crate) fn token_position(&self) -> Position {
        Position::new(self.token_start_line, self.token_start_column)
    }

    pub fn next_token(&mut self) -> LexResult<(Token, Position)> {
        self.skip_whitespace_and_comments();

        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
        let position = self.token_position();

        if self.cursor.is_at_end() {
            return Ok((Token::Eof, position));
        }

        let token = match self.cursor.current_char() {
            '(' => {
                self.cursor.advance();
                Token::OParen
            }
            ')' => {
                self.cursor.advance();
                Token::CParen
            }
            ':' => self.lex_keyword()?,
            '"' => self.lex_string()?,
            '#' => {
                self.cursor.advance();
                self.lex_radix_literal()?
            }
            '|' => self.lex_quoted_symbol()?,
            c if c.is_ascii_digit() => self.lex_number()?,
            c if c == '\\' || crate::charclass::is_simple_symbol_char(c) => {
                self.lex_bare_symbol()?
            }
            c => {
                self.cursor.advance();
                return Err(LexError::UnexpectedChar {
                    position,
                    found: c,
                    reason: "not a valid start of a token".to_string(),
                });
            }
        };

        Ok((token, position))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\n' | '\r' => self.cursor.advance(),
                ';' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                    if !self.cursor.is_at_end() {
                        self.cursor.advance(); // consume the newline itself
                    }
                }
                _ => break,
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<(Token, Position)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok((Token::Eof, _)) => None,
            other => Some(other),
        }
    }
}
