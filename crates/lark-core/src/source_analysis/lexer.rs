// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Lark source code.
//!
//! This module converts source text into a stream of [`Token`]s, one per
//! call to [`Lexer::next_token`]. The lexer is hand-written and single-pass:
//! it holds only a cursor over the immutable source text, so re-scanning
//! requires a fresh instance.
//!
//! Character classification is single-byte: every token class is ASCII, and
//! input outside the recognised classes is consumed one raw byte at a time,
//! never multi-byte-aware.
//!
//! # Design Principles
//!
//! - **Error recovery**: never panic on malformed input; emit
//!   [`TokenKind::Illegal`] and keep scanning
//! - **Nothing dropped**: every non-whitespace byte ends up inside exactly
//!   one token's span
//! - **Precise spans**: every token carries its exact source location
//!
//! # Example
//!
//! ```
//! use lark_core::source_analysis::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let x = 5;");
//! assert_eq!(*lexer.next_token().kind(), TokenKind::Let);
//! assert_eq!(*lexer.next_token().kind(), TokenKind::Identifier("x".into()));
//! ```

use ecow::EcoString;

use super::{Span, Token, TokenKind};

/// A lexer that tokenizes Lark source code.
///
/// Produces tokens on demand via [`Lexer::next_token`], terminating with
/// [`TokenKind::Eof`] once the input is exhausted. It also implements
/// [`Iterator`], yielding every token up to (but excluding) end of input.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Current byte position in source.
    position: usize,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Lexes the next token.
    ///
    /// Skips any whitespace before the token, then dispatches on the first
    /// byte. Once the input is exhausted, every further call returns an
    /// [`TokenKind::Eof`] token with an empty span.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.current_position();
        let kind = match self.peek_byte() {
            None => TokenKind::Eof,
            Some(b) => self.lex_token_kind(b),
        };

        Token::new(kind, self.span_from(start))
    }

    /// Lexes a token kind based on the first byte.
    fn lex_token_kind(&mut self, b: u8) -> TokenKind {
        match b {
            // Identifiers and keywords
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.lex_identifier_or_keyword(),

            // Integer literals
            b'0'..=b'9' => self.lex_integer(),

            // `=` and `!` need one byte of lookahead for `==` / `!=`
            b'=' => {
                self.advance();
                if self.peek_byte() == Some(b'=') {
                    self.advance();
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                self.advance();
                if self.peek_byte() == Some(b'=') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }

            // Single-character operators
            b'+' => {
                self.advance();
                TokenKind::Plus
            }
            b'-' => {
                self.advance();
                TokenKind::Minus
            }
            b'*' => {
                self.advance();
                TokenKind::Asterisk
            }
            b'/' => {
                self.advance();
                TokenKind::Slash
            }
            b'<' => {
                self.advance();
                TokenKind::Lt
            }
            b'>' => {
                self.advance();
                TokenKind::Gt
            }

            // Delimiters
            b',' => {
                self.advance();
                TokenKind::Comma
            }
            b';' => {
                self.advance();
                TokenKind::Semicolon
            }
            b'(' => {
                self.advance();
                TokenKind::LeftParen
            }
            b')' => {
                self.advance();
                TokenKind::RightParen
            }
            b'{' => {
                self.advance();
                TokenKind::LeftBrace
            }
            b'}' => {
                self.advance();
                TokenKind::RightBrace
            }

            // Unknown byte - error recovery, one token per raw byte. The
            // literal is the byte read as a code point, so a multi-byte
            // sequence in the input becomes one illegal token per byte.
            _ => {
                self.advance();
                let mut text = EcoString::new();
                text.push(char::from(b));
                TokenKind::Illegal(text)
            }
        }
    }

    /// Lexes an identifier, classifying keywords via the keyword table.
    ///
    /// Identifier characters are ASCII letters and underscores only; digits
    /// end the run, so `x1` scans as the identifier `x` followed by the
    /// integer `1`.
    fn lex_identifier_or_keyword(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(is_identifier_byte);
        TokenKind::from_identifier_text(self.text_for(self.span_from(start)))
    }

    /// Lexes an integer literal: a maximal run of ASCII digits, base 10.
    fn lex_integer(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(|b| b.is_ascii_digit());
        TokenKind::Integer(EcoString::from(self.text_for(self.span_from(start))))
    }

    /// Skips a maximal run of whitespace (space, tab, newline, carriage return).
    fn skip_whitespace(&mut self) {
        self.advance_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    /// Peeks at the next byte without consuming it.
    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.position).copied()
    }

    /// Consumes the next byte and returns it.
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek_byte()?;
        self.position += 1;
        Some(b)
    }

    /// Consumes bytes while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.peek_byte().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    ///
    /// Only called for identifier and integer spans, which cover ASCII bytes
    /// and therefore always slice at character boundaries.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }
}

/// Returns true if the byte can appear in an identifier.
fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Convenience function to lex source into a vector of tokens (excluding EOF).
///
/// For most use cases, prefer using the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Convenience function to lex source into a vector of tokens including EOF.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind().is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}
