// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Lark lexical analysis.
//!
//! This module defines the tokens produced by the lexer. Each token consists
//! of a [`TokenKind`] and a [`Span`] locating it in the source text. The
//! literal text of a token is available through [`TokenKind`]'s `Display`
//! implementation: identifiers, integers, and illegal input carry their
//! scanned text, while operators and delimiters render their fixed spelling.
//!
//! Keyword classification lives here too: [`TokenKind::from_identifier_text`]
//! maps reserved words (`let`, `return`) to their keyword kinds and
//! everything else to [`TokenKind::Identifier`]. The match is exact-text, so
//! `letx` is an ordinary identifier.

use ecow::EcoString;

use super::Span;

/// The kind of token, not including source location.
///
/// This enum covers every syntactic element of Lark source. Tokens are cheap
/// to clone ([`EcoString`] for string data).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An identifier: `foo`, `foo_bar`, `_x`
    Identifier(EcoString),

    /// A base-10 integer literal: `5`, `838383`
    Integer(EcoString),

    // === Operators ===
    /// Assignment: `=`
    Assign,

    /// Addition: `+`
    Plus,

    /// Subtraction: `-`
    Minus,

    /// Multiplication: `*`
    Asterisk,

    /// Division: `/`
    Slash,

    /// Logical negation: `!`
    Bang,

    /// Less-than: `<`
    Lt,

    /// Greater-than: `>`
    Gt,

    /// Equality: `==`
    Eq,

    /// Inequality: `!=`
    NotEq,

    // === Delimiters ===
    /// Argument separator: `,`
    Comma,

    /// Statement terminator: `;`
    Semicolon,

    /// Left parenthesis: `(`
    LeftParen,

    /// Right parenthesis: `)`
    RightParen,

    /// Left brace: `{`
    LeftBrace,

    /// Right brace: `}`
    RightBrace,

    // === Keywords ===
    /// The `let` keyword
    Let,

    /// The `return` keyword
    Return,

    // === Special ===
    /// End of input
    Eof,

    /// A byte the lexer does not recognise, read as a code point (one token
    /// per raw byte; preserved for error reporting, lexing continues past it)
    Illegal(EcoString),
}

impl TokenKind {
    /// Classifies scanned identifier text, giving keywords precedence.
    ///
    /// The lookup is exact-text: only `let` and `return` are reserved, and a
    /// longer word that merely starts with a keyword stays an identifier.
    #[must_use]
    pub fn from_identifier_text(text: &str) -> Self {
        match text {
            "let" => Self::Let,
            "return" => Self::Return,
            _ => Self::Identifier(EcoString::from(text)),
        }
    }

    /// Returns `true` if this token is an identifier.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }

    /// Returns `true` if this token is a reserved keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Self::Let | Self::Return)
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this is an illegal-input token.
    #[must_use]
    pub const fn is_illegal(&self) -> bool {
        matches!(self, Self::Illegal(_))
    }

    /// Returns the scanned text if this token carries any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Identifier(s) | Self::Integer(s) | Self::Illegal(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    /// Renders the token's literal text: the text the token was scanned
    /// from (for [`TokenKind::Illegal`], the offending byte read as a code
    /// point), or the empty string for [`TokenKind::Eof`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(s) | Self::Integer(s) | Self::Illegal(s) => write!(f, "{s}"),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Asterisk => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Bang => write!(f, "!"),
            Self::Lt => write!(f, "<"),
            Self::Gt => write!(f, ">"),
            Self::Eq => write!(f, "=="),
            Self::NotEq => write!(f, "!="),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::Let => write!(f, "let"),
            Self::Return => write!(f, "return"),
            Self::Eof => Ok(()),
        }
    }
}

/// A token with its source location.
///
/// # Examples
///
/// ```
/// use lark_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier("foo".into()), Span::new(0, 3));
/// assert!(token.kind().is_identifier());
/// assert_eq!(token.span().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_exact_text() {
        assert_eq!(TokenKind::from_identifier_text("let"), TokenKind::Let);
        assert_eq!(TokenKind::from_identifier_text("return"), TokenKind::Return);
        assert_eq!(
            TokenKind::from_identifier_text("letx"),
            TokenKind::Identifier("letx".into())
        );
        assert_eq!(
            TokenKind::from_identifier_text("returns"),
            TokenKind::Identifier("returns".into())
        );
        assert_eq!(
            TokenKind::from_identifier_text("x"),
            TokenKind::Identifier("x".into())
        );
    }

    #[test]
    fn token_kind_display_is_literal_text() {
        assert_eq!(TokenKind::Identifier("foo".into()).to_string(), "foo");
        assert_eq!(TokenKind::Integer("42".into()).to_string(), "42");
        assert_eq!(TokenKind::Assign.to_string(), "=");
        assert_eq!(TokenKind::Eq.to_string(), "==");
        assert_eq!(TokenKind::NotEq.to_string(), "!=");
        assert_eq!(TokenKind::LeftBrace.to_string(), "{");
        assert_eq!(TokenKind::RightBrace.to_string(), "}");
        assert_eq!(TokenKind::Let.to_string(), "let");
        assert_eq!(TokenKind::Return.to_string(), "return");
        assert_eq!(TokenKind::Illegal("@".into()).to_string(), "@");
        assert_eq!(TokenKind::Eof.to_string(), "");
    }

    #[test]
    fn token_kind_predicates() {
        assert!(TokenKind::Identifier("x".into()).is_identifier());
        assert!(!TokenKind::Let.is_identifier());

        assert!(TokenKind::Let.is_keyword());
        assert!(TokenKind::Return.is_keyword());
        assert!(!TokenKind::Identifier("let_".into()).is_keyword());

        assert!(TokenKind::Eof.is_eof());
        assert!(!TokenKind::Semicolon.is_eof());

        assert!(TokenKind::Illegal("@".into()).is_illegal());
        assert!(!TokenKind::Bang.is_illegal());
    }

    #[test]
    fn token_kind_as_str() {
        assert_eq!(TokenKind::Identifier("foo".into()).as_str(), Some("foo"));
        assert_eq!(TokenKind::Integer("42".into()).as_str(), Some("42"));
        assert_eq!(TokenKind::Illegal("@".into()).as_str(), Some("@"));
        assert_eq!(TokenKind::Plus.as_str(), None);
        assert_eq!(TokenKind::Eof.as_str(), None);
    }

    #[test]
    fn token_accessors() {
        let token = Token::new(TokenKind::Integer("42".into()), Span::new(4, 6));
        assert_eq!(token.kind(), &TokenKind::Integer("42".into()));
        assert_eq!(token.span(), Span::new(4, 6));
        assert_eq!(token.into_kind(), TokenKind::Integer("42".into()));
    }
}
