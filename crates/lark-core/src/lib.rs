// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lark language front end.
//!
//! This crate contains the source-text front end for Lark, a small
//! imperative language:
//! - Lexical analysis (tokenization)
//! - Parsing (AST construction) with accumulated syntax diagnostics
//!
//! The front end is a pure function of the input text: no I/O, no global
//! state, no ambient environment access. Callers hand a source string to
//! [`source_analysis::parse`] (or drive [`source_analysis::Lexer`] and
//! [`source_analysis::Parser`] directly) and receive an owned
//! [`ast::Program`] plus any diagnostics.

pub mod ast;
pub mod source_analysis;
