// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Lark source code.
//!
//! The parser pulls tokens from a [`Lexer`] on demand through a two-token
//! window (`current` and `peek`), never rewinding, and builds a
//! [`Program`]. Statements are recognised by dispatching on the current
//! token's kind; each grammar rule is a method that may call other rules.
//!
//! # Design Philosophy
//!
//! - **Always terminates** - the program loop advances unconditionally once
//!   per iteration, so malformed input can never wedge the parser
//! - **Multiple errors** - an unmet expectation aborts the current statement
//!   rule, records a [`Diagnostic`], and parsing continues with the next
//!   statement; nothing is discarded silently
//! - **Precise spans** - every diagnostic points at the token that broke the
//!   expectation
//!
//! # Grammar
//!
//! The statement grammar currently covers:
//!
//! | Rule | Shape |
//! |------|-------|
//! | let statement | `let IDENT = <value> ;` |
//! | return statement | `return <value> ;` |
//! | expression statement | `IDENT` with optional `;` |
//!
//! Value positions are scanned but not yet built into expression trees: the
//! tokens between `=` (or `return`) and the terminating `;` are consumed and
//! the node's value slot stays empty. That slot is where an expression
//! parser (Pratt / precedence climbing) plugs in.
//!
//! # Usage
//!
//! ```
//! use lark_core::source_analysis::parse;
//!
//! let (program, diagnostics) = parse("let x = 5;");
//!
//! assert!(diagnostics.is_empty());
//! assert_eq!(program.statements.len(), 1);
//! ```

use ecow::EcoString;

use crate::ast::{
    Expression, ExpressionStatement, Identifier, LetStatement, Program, ReturnStatement, Statement,
};

use super::{Lexer, Span, Token, TokenKind};

/// Parses source text into a program.
///
/// This is the main entry point for parsing. It always returns a
/// [`Program`], even if there are syntax errors: check the returned
/// diagnostics to decide whether the parse succeeded. Malformed statements
/// contribute diagnostics instead of statements, so a program with fewer
/// statements than expected comes with the reasons why.
///
/// # Examples
///
/// ```
/// use lark_core::source_analysis::parse;
///
/// let (program, diagnostics) = parse("let = 5;");
///
/// assert!(program.statements.is_empty());
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<Diagnostic>) {
    Parser::new(Lexer::new(source)).parse_program()
}

/// A syntax error recorded during parsing.
///
/// Alongside the rendered message, the unmet expectation is kept in
/// structured form: the token kind the grammar required and the kind it
/// found instead. The span points at the found token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable description of the error.
    pub message: EcoString,
    /// The source location of the offending token.
    pub span: Span,
    /// The token kind the grammar expected, for expectation failures.
    pub expected: Option<TokenKind>,
    /// The token kind actually found, for expectation failures.
    pub found: Option<TokenKind>,
}

impl Diagnostic {
    /// Creates a diagnostic for an unmet token expectation.
    #[must_use]
    pub fn expectation(expected: TokenKind, found: &Token) -> Self {
        let message = EcoString::from(format!(
            "expected {}, found {}",
            describe(&expected),
            describe(found.kind())
        ));
        Self {
            message,
            span: found.span(),
            expected: Some(expected),
            found: Some(found.kind().clone()),
        }
    }
}

/// Describes a token kind for use in diagnostic messages.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Identifier(_) => "an identifier".to_string(),
        TokenKind::Integer(_) => "an integer literal".to_string(),
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::Illegal(text) => format!("unrecognised input `{text}`"),
        other => format!("`{other}`"),
    }
}

/// The parser state: a lexer plus the two-token lookahead window.
///
/// Construction fills the window, so `current` always holds a valid token
/// (possibly [`TokenKind::Eof`]) by the time statement parsing begins. A
/// parser is single-use: [`Parser::parse_program`] consumes it.
pub struct Parser<'src> {
    /// Token source; pulled one token at a time, never rewound.
    lexer: Lexer<'src>,
    /// The token under examination.
    current: Token,
    /// One token of lookahead.
    peek: Token,
    /// Accumulated syntax errors.
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over the given lexer, pulling two tokens to fill the
    /// lookahead window.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            diagnostics: Vec::new(),
        }
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Loops until the current token is end-of-input, collecting whatever
    /// statements the grammar recognises. The single unconditional
    /// [`advance`](Self::advance) per iteration guarantees termination on
    /// any finite input, recognised or not.
    #[must_use]
    pub fn parse_program(mut self) -> (Program, Vec<Diagnostic>) {
        let start = self.current.span();
        let mut statements = Vec::new();

        while !self.current_is(&TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        let span = start.merge(self.current.span());
        (Program::new(statements, span), self.diagnostics)
    }

    // ========================================================================
    // Statement rules
    // ========================================================================

    /// Dispatches on the current token's kind.
    ///
    /// Tokens that cannot start a statement produce no statement and are
    /// consumed by the program loop's advance.
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind() {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            TokenKind::Identifier(name) => {
                let identifier = Identifier::new(name.clone(), self.current.span());
                Some(Statement::Expression(
                    self.parse_expression_statement(identifier),
                ))
            }
            _ => None,
        }
    }

    /// Parses `let IDENT = <value> ;`.
    ///
    /// An unmet expectation aborts the rule with a diagnostic; the program
    /// loop then consumes the remainder of the broken statement token by
    /// token.
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let let_span = self.current.span();

        let name = self.expect_peek_identifier()?;
        self.expect_peek(&TokenKind::Assign)?;

        // TODO: parse the value expression instead of scanning to the semicolon
        let value = None;
        self.skip_to_semicolon()?;

        Some(LetStatement {
            name,
            value,
            span: let_span.merge(self.current.span()),
        })
    }

    /// Parses `return <value> ;`.
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let return_span = self.current.span();
        self.advance();

        // TODO: parse the value expression instead of scanning to the semicolon
        let value = None;
        self.skip_to_semicolon()?;

        Some(ReturnStatement {
            value,
            span: return_span.merge(self.current.span()),
        })
    }

    /// Parses a bare identifier in statement position, with an optional
    /// trailing semicolon (optional so the REPL can accept `foo`).
    fn parse_expression_statement(&mut self, identifier: Identifier) -> ExpressionStatement {
        let mut span = identifier.span;
        let expression = Expression::Identifier(identifier);

        if self.peek_is(&TokenKind::Semicolon) {
            self.advance();
            span = span.merge(self.current.span());
        }

        ExpressionStatement { expression, span }
    }

    /// Consumes value tokens up to the terminating semicolon.
    ///
    /// Leaves `current` on the `;`. If the input ends first, records a
    /// missing-semicolon diagnostic and aborts the enclosing rule -- the
    /// end-of-input check is what keeps unterminated statements from
    /// scanning forever.
    fn skip_to_semicolon(&mut self) -> Option<()> {
        while !self.current_is(&TokenKind::Semicolon) {
            if self.current_is(&TokenKind::Eof) {
                self.diagnostics
                    .push(Diagnostic::expectation(TokenKind::Semicolon, &self.current));
                return None;
            }
            self.advance();
        }
        Some(())
    }

    // ========================================================================
    // Token window management
    // ========================================================================

    /// Shifts `peek` into `current` and pulls a new token from the lexer.
    fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Checks if the current token matches the given kind (by kind, ignoring
    /// any carried text).
    fn current_is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current.kind()) == std::mem::discriminant(kind)
    }

    /// Checks if the peek token matches the given kind.
    fn peek_is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.peek.kind()) == std::mem::discriminant(kind)
    }

    /// Expects the peek token to match the given kind, advancing onto it if
    /// it does.
    ///
    /// On mismatch, records a diagnostic and returns `None` without
    /// consuming anything. This is the parser's sole failure signal.
    fn expect_peek(&mut self, expected: &TokenKind) -> Option<()> {
        if self.peek_is(expected) {
            self.advance();
            Some(())
        } else {
            self.diagnostics
                .push(Diagnostic::expectation(expected.clone(), &self.peek));
            None
        }
    }

    /// Expects the peek token to be an identifier, advancing onto it and
    /// returning it as an AST node.
    fn expect_peek_identifier(&mut self) -> Option<Identifier> {
        if let TokenKind::Identifier(name) = self.peek.kind() {
            let identifier = Identifier::new(name.clone(), self.peek.span());
            self.advance();
            Some(identifier)
        } else {
            self.diagnostics.push(Diagnostic::expectation(
                TokenKind::Identifier(EcoString::new()),
                &self.peek,
            ));
            None
        }
    }
}
