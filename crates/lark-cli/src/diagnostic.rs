// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Beautiful error diagnostics using miette.
//!
//! Converts lark-core parse diagnostics into miette-formatted errors with
//! source code context and an arrow pointing at the offending token.

use lark_core::source_analysis::Diagnostic as ParseDiagnostic;
use miette::{Diagnostic, SourceSpan};

/// A syntax diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(lark::parse))]
pub struct SyntaxDiagnostic {
    /// Human-readable error message
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error
    #[label("here")]
    pub span: SourceSpan,
}

impl SyntaxDiagnostic {
    /// Creates a new diagnostic from a lark-core parse diagnostic.
    pub fn from_parse_diagnostic(
        diagnostic: &ParseDiagnostic,
        source_path: &str,
        source: &str,
    ) -> Self {
        Self {
            message: diagnostic.message.to_string(),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: diagnostic.span.into(),
        }
    }
}
