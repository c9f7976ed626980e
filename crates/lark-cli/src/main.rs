// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lark command-line interface.
//!
//! This is the main entry point for the `lark` command.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use miette::Result;

mod commands;
mod diagnostic;

/// Lark: a small imperative language
#[derive(Debug, Parser)]
#[command(name = "lark")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the interactive token REPL (the default)
    Repl,

    /// Parse a source file and report syntax errors
    Check {
        /// Source file to check
        path: Utf8PathBuf,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Command::Repl) => commands::repl::run(),
        Some(Command::Check { path }) => commands::check::run(&path),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
