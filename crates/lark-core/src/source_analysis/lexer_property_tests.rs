// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the Lark lexer.
//!
//! These tests use `proptest` to verify lexer invariants over generated
//! inputs:
//!
//! 1. **Lexer never panics** — arbitrary string input always produces tokens
//! 2. **Token spans within input** — all token spans satisfy `end <= input.len()`
//! 3. **Token spans are non-overlapping** — tokens appear in source order
//! 4. **Span text equals literal** — slicing the source at a token's span
//!    reproduces the token's literal text; illegal tokens cover exactly one
//!    byte each and carry that byte as their literal
//! 5. **EOF is always last** — `lex_with_eof` always ends with EOF
//! 6. **Lexer is deterministic** — same input always produces same tokens
//! 7. **Valid fragments produce no illegal tokens**

use proptest::prelude::*;

use super::lexer::{lex, lex_with_eof};

// ============================================================================
// Generators
// ============================================================================

/// Known-valid single-token fragments that should lex without illegal tokens.
const VALID_SINGLE_TOKENS: &[&str] = &[
    "let", "return", "x", "foobar", "foo_bar", "_private", "5", "838383", "+", "-", "*", "/", "!",
    "<", ">", "=", "==", "!=", ",", ";", "(", ")", "{", "}",
];

/// Multi-token valid statements that should lex cleanly.
const VALID_STATEMENTS: &[&str] = &[
    "let x = 5;",
    "let y = 10;",
    "let foobar = 838383;",
    "let result = a + b * c;",
    "return 5;",
    "return;",
    "foobar;",
    "x != y;",
    "(a < b) == !c;",
];

fn valid_single_token() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_SINGLE_TOKENS).prop_map(std::string::ToString::to_string)
}

fn valid_statement() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_STATEMENTS).prop_map(std::string::ToString::to_string)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Property 1: Lexer never panics on arbitrary string input.
    #[test]
    fn lexer_never_panics(input in "\\PC{0,500}") {
        let _tokens = lex(&input);
    }

    /// Property 1b: Lexer never panics with lex_with_eof on arbitrary input.
    #[test]
    fn lexer_with_eof_never_panics(input in "\\PC{0,500}") {
        let _tokens = lex_with_eof(&input);
    }

    /// Property 2: All token spans are within input bounds.
    #[test]
    fn token_spans_within_input(input in "\\PC{0,500}") {
        let tokens = lex_with_eof(&input);
        let input_len = u32::try_from(input.len()).unwrap_or(u32::MAX);
        for token in &tokens {
            let span = token.span();
            prop_assert!(
                span.end() <= input_len,
                "Token {:?} span end {} exceeds input length {} for input {:?}",
                token.kind(),
                span.end(),
                input_len,
                input,
            );
            prop_assert!(
                span.start() <= span.end(),
                "Token {:?} span start {} > end {} for input {:?}",
                token.kind(),
                span.start(),
                span.end(),
                input,
            );
        }
    }

    /// Property 3: Token spans are non-overlapping and ordered.
    #[test]
    fn token_spans_non_overlapping(input in "\\PC{0,500}") {
        let tokens = lex(&input);
        for window in tokens.windows(2) {
            let prev = &window[0];
            let next = &window[1];
            prop_assert!(
                next.span().start() >= prev.span().end(),
                "Overlapping spans: {:?} at {:?} and {:?} at {:?} for input {:?}",
                prev.kind(),
                prev.span(),
                next.kind(),
                next.span(),
                input,
            );
        }
    }

    /// Property 4: The source slice at a token's span is the token's literal.
    ///
    /// This is the no-byte-dropped invariant: everything between a token's
    /// start and end ended up in that token, exactly as scanned. Illegal
    /// tokens are classified per raw byte, so their span may start inside a
    /// multi-byte sequence where slicing as `&str` is not possible; they are
    /// checked byte-wise instead.
    #[test]
    fn span_text_equals_literal(input in "\\PC{0,300}") {
        for token in lex(&input) {
            let span = token.span();
            if token.kind().is_illegal() {
                prop_assert_eq!(
                    span.len(),
                    1,
                    "illegal token {:?} should cover one byte for input {:?}",
                    token.kind(),
                    input,
                );
                let byte = input.as_bytes()[span.start() as usize];
                prop_assert_eq!(
                    token.kind().to_string(),
                    char::from(byte).to_string(),
                    "illegal token literal should be the covered byte for input {:?}",
                    input,
                );
            } else {
                // Recognised tokens cover ASCII bytes, so slicing is safe.
                let text = &input[span.as_range()];
                prop_assert_eq!(
                    text,
                    token.kind().to_string(),
                    "span of {:?} does not slice its literal for input {:?}",
                    token.kind(),
                    input,
                );
            }
        }
    }

    /// Property 5: lex_with_eof always ends with exactly one EOF.
    #[test]
    fn eof_always_last(input in "\\PC{0,500}") {
        let tokens = lex_with_eof(&input);
        prop_assert!(!tokens.is_empty(), "lex_with_eof should never return empty");
        prop_assert!(
            tokens.last().unwrap().kind().is_eof(),
            "Last token should be EOF, got {:?} for input {:?}",
            tokens.last().unwrap().kind(),
            input,
        );
        let eof_count = tokens.iter().filter(|t| t.kind().is_eof()).count();
        prop_assert_eq!(eof_count, 1, "Exactly one EOF expected for input {:?}", input);
    }

    /// Property 6: Lexer is deterministic — same input, same tokens.
    #[test]
    fn lexer_deterministic(input in "\\PC{0,200}") {
        let tokens1 = lex_with_eof(&input);
        let tokens2 = lex_with_eof(&input);
        prop_assert_eq!(&tokens1, &tokens2, "Different tokens for same input {:?}", input);
    }

    /// Property 7: Known-valid single tokens produce no illegal tokens.
    #[test]
    fn valid_tokens_no_illegal(input in valid_single_token()) {
        let tokens = lex(&input);
        prop_assert_eq!(tokens.len(), 1, "Expected one token for {:?}", input);
        prop_assert!(
            !tokens[0].kind().is_illegal(),
            "Valid input {:?} produced illegal token",
            input,
        );
    }

    /// Property 7b: Known-valid statements produce no illegal tokens.
    #[test]
    fn valid_statements_no_illegal(input in valid_statement()) {
        for token in lex(&input) {
            prop_assert!(
                !token.kind().is_illegal(),
                "Valid statement {:?} produced illegal token {:?}",
                input,
                token.kind(),
            );
        }
    }
}
