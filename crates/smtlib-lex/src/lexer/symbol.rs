//! Symbol, keyword, and quoted-symbol lexing.

use smtlib_util::{LexError, LexResult};

use super::core::Lexer;
use crate::charclass::is_simple_symbol_char;
use crate::token::{lookup_reserved, Token};

impl<'a> Lexer<'a> {
    /// Reads the maximal run of simple-symbol characters (a `\` escapes the
    /// following character and is itself dropped), then checks the
    /// reserved-word table.
    pub(crate) fn lex_bare_symbol(&mut self) -> LexResult<Token> {
        let mut body = String::new();
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(LexError::UnexpectedEof {
                        position: self.token_position(),
                        what: "a backslash escape in a symbol".to_string(),
                    });
                }
                body.push(self.cursor.current_char());
                self.cursor.advance();
            } else if is_simple_symbol_char(c) {
                body.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        Ok(lookup_reserved(&body).unwrap_or(Token::SymbolLit(body)))
    }

    /// Reads a `|...|`-delimited quoted symbol. `\` escapes the following
    /// character (the backslash is dropped); unlike bare symbols, any
    /// character other than the closing `|` is otherwise literal.
    pub(crate) fn lex_quoted_symbol(&mut self) -> LexResult<Token> {
        self.cursor.advance(); // consume opening '|'
        let mut body = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnexpectedEof {
                    position: self.token_position(),
                    what: "a quoted symbol".to_string(),
                });
            }
            match self.cursor.current_char() {
                '|' => {
                    self.cursor.advance();
                    return Ok(Token::SymbolLit(body));
                }
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        return Err(LexError::UnexpectedEof {
                            position: self.token_position(),
                            what: "a backslash escape in a quoted symbol".to_string(),
                        });
                    }
                    body.push(self.cursor.current_char());
                    self.cursor.advance();
                }
                c => {
                    body.push(c);
                    self.cursor.advance();
                }
            }
        }
    }

    /// Reads a `:`-prefixed keyword body. Unlike a bare symbol, the body
    /// may begin with a digit.
    pub(crate) fn lex_keyword(&mut self) -> LexResult<Token> {
        self.cursor.advance(); // consume ':'
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && is_simple_symbol_char(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let body = self.cursor.slice_from(start).to_string();
        if body.is_empty() {
            return Err(LexError::UnexpectedEof {
                position: self.token_position(),
                what: "a keyword name after ':'".to_string(),
            });
        }
        Ok(Token::Keyword(body))
    }
}
