//! Numeral and decimal literal lexing.

use smtlib_util::{LexError, LexResult};

use super::core::Lexer;
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Reads a base-10 digit run starting at the cursor; if a `.` follows,
    /// consumes it and reads one or more fractional digits to produce a
    /// decimal instead of a numeral.
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let int_part = self.cursor.slice_from(start).to_string();

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            let frac_start = self.cursor.position();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            let frac_part = self.cursor.slice_from(frac_start).to_string();
            if frac_part.is_empty() {
                return Err(LexError::UnexpectedEof {
                    position: self.token_position(),
                    what: "a decimal literal's fractional part".to_string(),
                });
            }
            return Ok(Token::DecimalLit {
                int_part,
                frac_part,
            });
        }

        Ok(Token::NumeralLit(int_part))
    }

    /// Reads the radix-tagged literal that follows `#`: `b` for binary,
    /// `x` for hexadecimal. Either body must have at least one digit.
    pub(crate) fn lex_radix_literal(&mut self) -> LexResult<Token> {
        match self.cursor.current_char() {
            'b' => {
                self.cursor.advance();
                let start = self.cursor.position();
                while matches!(self.cursor.current_char(), '0' | '1') {
                    self.cursor.advance();
                }
                let digits = self.cursor.slice_from(start);
                if digits.is_empty() {
                    return Err(LexError::UnexpectedEof {
                        position: self.token_position(),
                        what: "a binary literal".to_string(),
                    });
                }
                let bits = digits.chars().map(|c| c == '1').collect();
                Ok(Token::BinaryLit(bits))
            }
            'x' => {
                self.cursor.advance();
                let start = self.cursor.position();
                while self.cursor.current_char().is_ascii_hexdigit() {
                    self.cursor.advance();
                }
                let digits = self.cursor.slice_from(start);
                if digits.is_empty() {
                    return Err(LexError::UnexpectedEof {
                        position: self.token_position(),
                        what: "a hexadecimal literal".to_string(),
                    });
                }
                Ok(Token::HexadecimalLit(digits.to_ascii_uppercase()))
            }
            c if self.cursor.is_at_end() => Err(LexError::UnexpectedEof {
                position: self.token_position(),
                what: "a radix marker ('b' or 'x') after '#'".to_string(),
            }),
            c => Err(LexError::UnexpectedChar {
                position: self.token_position(),
                found: c,
                reason: "expected 'b' or 'x' after '#'".to_string(),
            }),
        }
    }
}
