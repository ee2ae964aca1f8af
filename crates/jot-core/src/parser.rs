//! Recursive-descent parsing over the token sequence.
//!
//! The parser holds exactly two tokens of state, `current` and `peek`,
//! advanced together by a single operation. Failure is strictly cascading:
//! one bad value aborts every enclosing rule, the document parse discards
//! its partial tree, and the accumulated diagnostics go back to the caller.

use crate::ast::{Attribute, Document, Value};
use crate::error::{Diagnostic, Diagnostics, Result};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Tokenize and parse `input` in one call.
pub fn parse(input: &str) -> Result<Document> {
    let tokenizer = Tokenizer::new(input)?;
    Parser::new(tokenizer).parse_document()
}

/// Single-use parser with a two-token window over the token sequence.
#[derive(Debug)]
pub struct Parser {
    tokenizer: Tokenizer,
    current: Token,
    peek: Token,
    diagnostics: Diagnostics,
}

impl Parser {
    /// Prime the window with the first two tokens.
    pub fn new(mut tokenizer: Tokenizer) -> Self {
        let current = tokenizer.next_token();
        let peek = tokenizer.next_token();
        Self {
            tokenizer,
            current,
            peek,
            diagnostics: Vec::new(),
        }
    }

    /// Parse top-level values until end of input.
    ///
    /// Consumes the parser: the outcome is either the complete document or
    /// the full diagnostic list, never a partial tree.
    pub fn parse_document(mut self) -> Result<Document> {
        let mut values = Vec::new();
        while self.current.kind != TokenKind::Eof {
            match self.parse_value() {
                Some(value) => values.push(value),
                None => return Err(self.diagnostics),
            }
            self.advance();
        }
        Ok(Document { values })
    }

    /// Shift `peek` into `current` and pull the next token.
    fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.tokenizer.next_token());
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance onto `kind` when it is next; otherwise record the missing
    /// delimiter and fail.
    fn expect_peek(&mut self, kind: TokenKind, expected: char) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.diagnostics.push(Diagnostic::MissingDelimiter {
                expected,
                found: describe(&self.peek),
            });
            false
        }
    }

    /// Dispatch on the kind of `current`. `None` means the value failed and
    /// at least one diagnostic was recorded.
    fn parse_value(&mut self) -> Option<Value> {
        match self.current.kind {
            TokenKind::Number => self.parse_number(),
            TokenKind::String => Some(Value::String(self.current.literal.clone())),
            TokenKind::True | TokenKind::False => {
                Some(Value::Boolean(self.current.kind == TokenKind::True))
            }
            TokenKind::LBracket => self.parse_array(),
            TokenKind::LBrace => self.parse_object(),
            _ => {
                self.diagnostics.push(Diagnostic::UnexpectedToken {
                    found: describe(&self.current),
                });
                None
            }
        }
    }

    /// The lexical rules let runs like `1..2` through as one number token,
    /// so the conversion stays guarded.
    fn parse_number(&mut self) -> Option<Value> {
        let literal = self.current.literal.clone();
        match literal.parse::<f64>() {
            Ok(value) => Some(Value::Number { literal, value }),
            Err(_) => {
                self.diagnostics.push(Diagnostic::InvalidNumber { literal });
                None
            }
        }
    }

    fn parse_array(&mut self) -> Option<Value> {
        let mut elements = Vec::new();

        if self.peek_is(TokenKind::RBracket) {
            self.advance();
            return Some(Value::Array(elements));
        }

        self.advance();
        elements.push(self.parse_value()?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            elements.push(self.parse_value()?);
        }

        if !self.expect_peek(TokenKind::RBracket, ']') {
            return None;
        }
        Some(Value::Array(elements))
    }

    fn parse_object(&mut self) -> Option<Value> {
        let mut attributes = Vec::new();

        if self.peek_is(TokenKind::RBrace) {
            self.advance();
            return Some(Value::Object(attributes));
        }

        self.advance();
        attributes.push(self.parse_attribute()?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            attributes.push(self.parse_attribute()?);
        }

        if !self.expect_peek(TokenKind::RBrace, '}') {
            return None;
        }
        Some(Value::Object(attributes))
    }

    /// One `key:value` pair, entered with `current` on the key.
    ///
    /// The key is the literal of whatever token sits there; its kind is
    /// deliberately not checked, and the colon is skipped unverified.
    fn parse_attribute(&mut self) -> Option<Attribute> {
        let key = self.current.literal.clone();
        // past the key, past the colon, onto the value's first token
        self.advance();
        self.advance();
        let value = self.parse_value()?;
        Some(Attribute { key, value })
    }
}

/// Render a token for a diagnostic message.
fn describe(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        "end of input".to_string()
    } else {
        format!("'{}'", token.literal)
    }
}
