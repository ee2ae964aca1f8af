//! Lexical vocabulary shared by the tokenizer and parser.

/// The closed set of token kinds the tokenizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Input no lexical rule accepts. Its presence aborts tokenization.
    Illegal,
    /// End of input. The tokenizer keeps yielding this once exhausted.
    Eof,

    /// A run of letters/underscores that is not a keyword. No grammar rule
    /// consumes it, so one in value position becomes a syntax error later.
    Ident,
    /// A numeric literal. The literal text is kept for rendering.
    Number,
    /// A string literal. The literal is the raw span between the quotes,
    /// escapes left undecoded.
    String,

    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// The keyword `true`.
    True,
    /// The keyword `false`.
    False,
}

/// A token: what kind it is and the source text it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token. Its literal is empty.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

/// Classify an identifier: keyword kind if it is one, `Ident` otherwise.
pub fn lookup_ident(ident: &str) -> TokenKind {
    match ident {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        _ => TokenKind::Ident,
    }
}
