//! Literal segmentation pass.
//!
//! Splits a raw literal token into the fragment and escape tokens the
//! quote handler consumes: `"ab\nc"` becomes a `DoubleQuoted` fragment
//! `"ab`, an `Escape` token `\n`, and a `DoubleQuoted` fragment `c"`.
//! Escape tokens being distinct from the fragments around them is the
//! producer contract that makes escape neutralization a single
//! neighbor-token check.

use quill_token::{Span, Token, TokenKind, TokenList};

/// Split the literal `text` (spanning `base..base + text.len()` in the
/// document, delimiters included) into fragment and escape tokens.
///
/// A trailing lone backslash is not an escape; it stays in the final
/// fragment.
pub(crate) fn segment_literal(kind: TokenKind, text: &str, base: u32, out: &mut TokenList) {
    let mut fragment_start = 0usize;
    let mut chars = text.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            continue;
        }
        let Some((next_at, next)) = chars.next() else {
            break;
        };
        let escape_end = next_at + next.len_utf8();
        if i > fragment_start {
            push_at(out, kind, base, fragment_start, i);
        }
        push_at(out, TokenKind::Escape, base, i, escape_end);
        fragment_start = escape_end;
    }

    if fragment_start < text.len() {
        push_at(out, kind, base, fragment_start, text.len());
    }
}

fn push_at(out: &mut TokenList, kind: TokenKind, base: u32, start: usize, end: usize) {
    out.push(Token::new(
        kind,
        Span::new(base + start as u32, base + end as u32),
    ));
}
