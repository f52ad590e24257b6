//! Raw token pass.
//!
//! Logos-derived scan over the fixture grammar. Literal tokens come out
//! whole here (quotes and escapes included); the segmentation pass
//! splits them into the fragment/escape tokens the quote handler
//! consumes. Unterminated literals still lex as a single token so the
//! "user just typed the opening quote" state is representable.

use logos::{Lexer, Logos};

/// Raw token from logos (before literal segmentation).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    // No skip pattern: the token list must cover every input byte.
    #[regex(r"[ \t\r\n]+")]
    Trivia,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("=")]
    Eq,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    // Double-quoted string; the closing quote is optional so an
    // unterminated literal is one token to the end of the line.
    #[regex(r#""([^"\\\n]|\\.)*"?"#)]
    Str,

    // Char literal, same unterminated handling.
    #[regex(r"'([^'\\\n]|\\.)*'?")]
    Char,

    // Fenced raw literal: run of backticks closed by a run of the same
    // length, no escapes inside. The callback extends the token past
    // the single backtick logos matched.
    #[token("`", lex_fenced)]
    Fenced,
}

/// Extend a fenced-literal token from its first backtick.
///
/// Counts the opening run, then consumes through the first closing run
/// of the same length. Without a closing run the literal is
/// unterminated and the token runs to end of input.
fn lex_fenced(lex: &mut Lexer<'_, RawToken>) {
    let rest = lex.remainder().as_bytes();

    let mut open = 1usize;
    let mut i = 0usize;
    while i < rest.len() && rest[i] == b'`' {
        open += 1;
        i += 1;
    }

    let mut run = 0usize;
    let mut close_end = None;
    let mut j = i;
    while j < rest.len() {
        if rest[j] == b'`' {
            run += 1;
            if run == open {
                close_end = Some(j + 1);
                break;
            }
        } else {
            run = 0;
        }
        j += 1;
    }

    lex.bump(close_end.unwrap_or(rest.len()));
}
