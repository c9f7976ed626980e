// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for Lark source code.
//!
//! This module contains the lexer, the parser, and their shared token and
//! span types.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s, one per
//! call to [`Lexer::next_token`]. Each token carries its source location via
//! [`Span`].
//!
//! ```
//! use lark_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x + 1").collect();
//! assert_eq!(tokens.len(), 3); // x, +, 1 (EOF excluded from iterator)
//! ```
//!
//! # Parsing
//!
//! The [`parse`] function converts source text into an
//! [`ast::Program`](crate::ast::Program) using recursive descent with a
//! two-token lookahead window.
//!
//! # Error Handling
//!
//! The lexer never fails: input it does not recognise becomes
//! [`TokenKind::Illegal`] tokens and lexing continues. The parser records a
//! [`Diagnostic`] for every unmet token expectation and keeps going, so a
//! single parse reports all structural errors it encountered alongside
//! whatever statements it could build.

mod lexer;
mod parser;
mod span;
mod token;

#[cfg(test)]
mod lexer_property_tests;

pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::{Diagnostic, Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
