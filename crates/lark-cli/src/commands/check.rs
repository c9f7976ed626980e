// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The `lark check` command: parse a source file and report syntax errors.

use std::fs;

use camino::Utf8Path;
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use tracing::debug;

use lark_core::source_analysis::parse;

use crate::diagnostic::SyntaxDiagnostic;

/// Parses the file at `path`, logging each parsed statement, and renders any
/// diagnostics with source context. Returns an error when the file has
/// syntax errors, so the process exits nonzero.
pub fn run(path: &Utf8Path) -> Result<()> {
    let source = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {path}"))?;

    let (program, diagnostics) = parse(&source);

    for statement in &program.statements {
        debug!("parsed statement: {statement}");
    }

    if diagnostics.is_empty() {
        println!(
            "{path}: {} statement(s), no syntax errors",
            program.statements.len()
        );
        return Ok(());
    }

    for diagnostic in &diagnostics {
        let report = miette::Report::new(SyntaxDiagnostic::from_parse_diagnostic(
            diagnostic,
            path.as_str(),
            &source,
        ));
        eprintln!("{report:?}");
    }
    Err(miette!(
        "{path}: {} syntax error(s)",
        diagnostics.len()
    ))
}
