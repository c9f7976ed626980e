// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Lark.
//!
//! The AST is an owned tree built once per parse and immutable thereafter:
//! a [`Program`] owns its statements, and each statement owns its
//! sub-expressions. There is no sharing and there are no back-references.
//!
//! Statement and expression kinds are closed enums, so adding a grammar rule
//! means adding a variant and letting exhaustive matching point at every
//! place that needs updating.
//!
//! Every node reports two pieces of text:
//! - [`token_literal`](Statement::token_literal): the literal text of the
//!   token the node originated from (`let`, `return`, an identifier's name)
//! - `Display`: a source reconstruction of the node, e.g.
//!   `let x = <value>;`
//!
//! The AST is pure data; all algorithms live in the
//! [`parser`](crate::source_analysis).

use ecow::EcoString;

use crate::source_analysis::Span;

/// The root node: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
    /// Source location spanning the entire program.
    pub span: Span,
}

impl Program {
    /// Creates a new program.
    #[must_use]
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    /// Returns the literal text of the first statement's originating token,
    /// or the empty string for an empty program.
    #[must_use]
    pub fn token_literal(&self) -> EcoString {
        self.statements
            .first()
            .map_or_else(EcoString::new, Statement::token_literal)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A Lark statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `let` binding: `let x = 5;`
    Let(LetStatement),

    /// A `return` statement: `return x;`
    Return(ReturnStatement),

    /// A bare expression in statement position: `foobar;`
    Expression(ExpressionStatement),
}

impl Statement {
    /// Returns the span of this statement.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Let(s) => s.span,
            Self::Return(s) => s.span,
            Self::Expression(s) => s.span,
        }
    }

    /// Returns the literal text of the token this statement originated from.
    #[must_use]
    pub fn token_literal(&self) -> EcoString {
        match self {
            Self::Let(_) => "let".into(),
            Self::Return(_) => "return".into(),
            Self::Expression(s) => s.expression.token_literal(),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let(s) => write!(f, "{s}"),
            Self::Return(s) => write!(f, "{s}"),
            Self::Expression(s) => write!(f, "{s}"),
        }
    }
}

/// A `let` binding.
///
/// The `value` slot is where a future expression parser plugs in; the
/// current grammar leaves it empty (see the parser's let rule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    /// The name being bound.
    pub name: Identifier,
    /// The bound value expression, when one was parsed.
    pub value: Option<Expression>,
    /// Source location of the whole statement.
    pub span: Span,
}

impl std::fmt::Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} = ", self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// A `return` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    /// The returned value expression, when one was parsed.
    pub value: Option<Expression>,
    /// Source location of the whole statement.
    pub span: Span,
}

impl std::fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return ")?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// An expression in statement position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    /// The expression itself.
    pub expression: Expression,
    /// Source location, including a trailing semicolon if present.
    pub span: Span,
}

impl std::fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A Lark expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A variable reference.
    Identifier(Identifier),
}

impl Expression {
    /// Returns the span of this expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Identifier(id) => id.span,
        }
    }

    /// Returns the literal text of the token this expression originated from.
    #[must_use]
    pub fn token_literal(&self) -> EcoString {
        match self {
            Self::Identifier(id) => id.name.clone(),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(id) => write!(f, "{id}"),
        }
    }
}

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The name of the identifier.
    pub name: EcoString,
    /// Source location.
    pub span: Span,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        let program = Program::new(Vec::new(), Span::new(0, 0));
        assert!(program.statements.is_empty());
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }

    #[test]
    fn program_token_literal_delegates_to_first_statement() {
        let statement = Statement::Let(LetStatement {
            name: Identifier::new("x", Span::new(4, 5)),
            value: None,
            span: Span::new(0, 10),
        });
        let program = Program::new(vec![statement], Span::new(0, 10));
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn let_statement_reconstruction() {
        // `let myVar = anotherVar;` built by hand, rendered back to source
        let statement = Statement::Let(LetStatement {
            name: Identifier::new("myVar", Span::new(4, 9)),
            value: Some(Expression::Identifier(Identifier::new(
                "anotherVar",
                Span::new(12, 22),
            ))),
            span: Span::new(0, 23),
        });
        assert_eq!(statement.to_string(), "let myVar = anotherVar;");
        assert_eq!(statement.token_literal(), "let");
    }

    #[test]
    fn let_statement_with_empty_value_slot() {
        let statement = Statement::Let(LetStatement {
            name: Identifier::new("x", Span::new(4, 5)),
            value: None,
            span: Span::new(0, 10),
        });
        assert_eq!(statement.to_string(), "let x = ;");
    }

    #[test]
    fn return_statement_reconstruction() {
        let with_value = Statement::Return(ReturnStatement {
            value: Some(Expression::Identifier(Identifier::new(
                "result",
                Span::new(7, 13),
            ))),
            span: Span::new(0, 14),
        });
        assert_eq!(with_value.to_string(), "return result;");
        assert_eq!(with_value.token_literal(), "return");

        let without_value = Statement::Return(ReturnStatement {
            value: None,
            span: Span::new(0, 7),
        });
        assert_eq!(without_value.to_string(), "return ;");
    }

    #[test]
    fn expression_statement_reconstruction() {
        let statement = Statement::Expression(ExpressionStatement {
            expression: Expression::Identifier(Identifier::new("foobar", Span::new(0, 6))),
            span: Span::new(0, 7),
        });
        assert_eq!(statement.to_string(), "foobar");
        assert_eq!(statement.token_literal(), "foobar");
        assert_eq!(statement.span(), Span::new(0, 7));
    }

    #[test]
    fn program_display_concatenates_statements() {
        let program = Program::new(
            vec![
                Statement::Let(LetStatement {
                    name: Identifier::new("x", Span::new(4, 5)),
                    value: Some(Expression::Identifier(Identifier::new(
                        "y",
                        Span::new(8, 9),
                    ))),
                    span: Span::new(0, 10),
                }),
                Statement::Return(ReturnStatement {
                    value: Some(Expression::Identifier(Identifier::new(
                        "x",
                        Span::new(18, 19),
                    ))),
                    span: Span::new(11, 20),
                }),
            ],
            Span::new(0, 20),
        );
        assert_eq!(program.to_string(), "let x = y;return x;");
    }
}
