//! Eager, whole-input tokenization.
//!
//! `Tokenizer::new` scans the entire input into an owned token buffer before
//! any parsing happens. A single illegal span aborts the pass and hands back
//! the diagnostics collected so far; there is no resynchronization, and the
//! remaining input is left unscanned.

use crate::error::{Diagnostic, Diagnostics, Result};
use crate::token::{lookup_ident, Token, TokenKind};

/// The scanned token sequence plus a sequential retrieval cursor.
#[derive(Debug)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Tokenizer {
    /// Scan all of `input` into a token buffer terminated by `Eof`.
    ///
    /// Any lexical error aborts the pass: the accumulated diagnostics come
    /// back and no token sequence exists.
    pub fn new(input: &str) -> Result<Self> {
        let mut scanner = Scanner::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            match token.kind {
                TokenKind::Illegal => return Err(scanner.diagnostics),
                TokenKind::Eof => {
                    tokens.push(token);
                    return Ok(Self { tokens, cursor: 0 });
                }
                _ => tokens.push(token),
            }
        }
    }

    /// The next token in source order. Keeps returning `Eof` once the buffer
    /// is exhausted.
    pub fn next_token(&mut self) -> Token {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                token.clone()
            }
            None => Token::eof(),
        }
    }

    /// Every scanned token in source order, ending with `Eof`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Byte cursor over the raw input.
///
/// The lexical rules are ASCII, so scanning walks bytes and slices literals
/// straight out of the input. Multi-byte characters can only survive inside
/// strings, where every slice boundary falls on an ASCII delimiter or the
/// end of input.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    diagnostics: Diagnostics,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Byte at `index`, with 0 standing in for end of input.
    fn byte_at(&self, index: usize) -> u8 {
        self.input.as_bytes().get(index).copied().unwrap_or(0)
    }

    fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let ch = self.current();
        let token = match ch {
            b':' => Token::new(TokenKind::Colon, ":"),
            b',' => Token::new(TokenKind::Comma, ","),
            b'{' => Token::new(TokenKind::LBrace, "{"),
            b'}' => Token::new(TokenKind::RBrace, "}"),
            b'[' => Token::new(TokenKind::LBracket, "["),
            b']' => Token::new(TokenKind::RBracket, "]"),
            b'"' => return self.read_string(),
            b'-' if self.peek().is_ascii_digit() => return self.read_number(),
            0 => return Token::eof(),
            letter if is_letter(letter) => return self.read_identifier(),
            digit if digit.is_ascii_digit() => return self.read_number(),
            other => {
                self.diagnostics.push(Diagnostic::UnrecognizedCharacter {
                    found: other as char,
                    line: self.line,
                });
                Token::new(TokenKind::Illegal, (other as char).to_string())
            }
        };
        self.pos += 1;
        token
    }

    /// Scan a string literal starting at the opening quote. The literal is
    /// the raw span between the quotes; escapes are validated, not decoded.
    fn read_string(&mut self) -> Token {
        let start = self.pos + 1;
        let seen = self.diagnostics.len();
        loop {
            self.pos += 1;
            match self.current() {
                b'"' => break,
                0 => {
                    self.diagnostics.push(Diagnostic::UnterminatedString {
                        span: self.input[start..self.pos].to_string(),
                        line: self.line,
                        position: self.pos,
                    });
                    break;
                }
                b'\\' => {
                    self.pos += 1;
                    match self.current() {
                        b'"' | b'/' | b'\\' | b'b' | b'f' | b'n' | b'r' | b't' => {}
                        0 => {
                            self.diagnostics.push(Diagnostic::UnterminatedString {
                                span: self.input[start..self.pos].to_string(),
                                line: self.line,
                                position: self.pos,
                            });
                            break;
                        }
                        other => {
                            self.diagnostics.push(Diagnostic::InvalidEscape {
                                found: other as char,
                                span: self.input[start..self.pos].to_string(),
                                line: self.line,
                                position: self.pos,
                            });
                            break;
                        }
                    }
                }
                _ => {}
            }
        }
        let kind = if self.diagnostics.len() > seen {
            TokenKind::Illegal
        } else {
            TokenKind::String
        };
        let literal = self.input[start..self.pos].to_string();
        self.pos += 1;
        Token::new(kind, literal)
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.pos;
        while is_letter(self.current()) {
            self.pos += 1;
        }
        let literal = &self.input[start..self.pos];
        Token::new(lookup_ident(literal), literal)
    }

    /// Maximal run of digits and `.`, plus a leading `-` and `e`/`E`
    /// exponent markers when digits actually follow them. Malformed runs
    /// like `1..2` still come out as one token; the parser's conversion
    /// guard rejects them.
    fn read_number(&mut self) -> Token {
        let start = self.pos;
        if self.current() == b'-' {
            self.pos += 1;
        }
        loop {
            let ch = self.current();
            if ch.is_ascii_digit() || ch == b'.' {
                self.pos += 1;
            } else if ch == b'e' || ch == b'E' {
                // absorb the marker only when an exponent follows, so `5e`
                // stays a number followed by an identifier
                let next = self.byte_at(self.pos + 1);
                if next.is_ascii_digit() {
                    self.pos += 1;
                } else if (next == b'+' || next == b'-')
                    && self.byte_at(self.pos + 2).is_ascii_digit()
                {
                    self.pos += 2;
                } else {
                    break;
                }
            } else {
                break;
            }
        }
        Token::new(TokenKind::Number, &self.input[start..self.pos])
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.current() {
                b'\n' | b'\r' => {
                    self.line += 1;
                    self.pos += 1;
                }
                b' ' | b'\t' => self.pos += 1,
                _ => return,
            }
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
