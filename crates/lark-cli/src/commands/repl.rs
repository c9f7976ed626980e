// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Interactive token REPL.
//!
//! Reads one line at a time, lexes it with a fresh [`Lexer`], and prints
//! every token's kind and literal until end of input. This is a front-end
//! inspection tool: no evaluation happens here.
//!
//! ```text
//! >> let x = 5;
//! Let                  let
//! Identifier("x")      x
//! Assign               =
//! Integer("5")         5
//! Semicolon            ;
//! ```

use std::fs;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result, miette};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use lark_core::source_analysis::Lexer;

const PROMPT: &str = ">> ";

/// Runs the REPL until Ctrl-D.
pub fn run() -> Result<()> {
    println!(
        "Hello {}! This is the Lark programming language.",
        whoami::username()
    );
    println!("Type a line to see its tokens; Ctrl-D exits.");
    println!();

    let mut rl = DefaultEditor::new().into_diagnostic()?;

    let history_file = history_path()?;
    let _ = rl.load_history(&history_file);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                print_tokens(&line);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C — discard the line, keep the session
                println!();
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("Readline error: {e}");
                break;
            }
        }
    }

    let _ = rl.save_history(&history_file);
    Ok(())
}

/// Lexes a line and prints each token's kind and literal.
fn print_tokens(line: &str) {
    for token in Lexer::new(line) {
        println!("{:<20} {}", format!("{:?}", token.kind()), token.kind());
    }
}

/// History lives in `~/.lark/repl_history`.
fn history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| miette!("Could not determine home directory"))?;
    let dir = home.join(".lark");
    fs::create_dir_all(&dir).into_diagnostic()?;
    Ok(dir.join("repl_history"))
}
