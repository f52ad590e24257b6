//! Reference token-stream producer for the Quill quote handler.
//!
//! Lexes a small fixture grammar into the token classification
//! `quill_quote` consumes: literal fragments with escape sequences as
//! distinct tokens, fenced raw literals as single tokens, structural
//! punctuation, and trivia. The output covers the input exactly, so a
//! [`TokenCursor`](quill_token::TokenCursor) can be positioned at any
//! offset.
//!
//! This is a stand-in for a real host-language highlighter, kept to the
//! features the quote handler exercises.

use logos::Logos;

use quill_token::{PunctKind, Span, Token, TokenKind, TokenList};

mod raw;
mod segment;

use raw::RawToken;
use segment::segment_literal;

/// Lex `text` into a covering token list.
///
/// Inputs are limited to the span space: lexing stops at the last token
/// whose byte range fits in `u32`.
pub fn lex(text: &str) -> TokenList {
    let mut out = TokenList::new();
    let mut lexer = RawToken::lexer(text);

    while let Some(result) = lexer.next() {
        // Token positions must fit the 4 GiB span space; past that the
        // covering list simply stops at the last representable token.
        let Ok(span) = Span::try_from_range(lexer.span()) else {
            break;
        };
        let slice = lexer.slice();

        match result {
            Ok(RawToken::Str) => {
                segment_literal(TokenKind::DoubleQuoted, slice, span.start, &mut out);
            }
            Ok(RawToken::Char) => {
                segment_literal(TokenKind::SingleQuoted, slice, span.start, &mut out);
            }
            Ok(raw) => out.push(Token::new(flat_kind(raw), span)),
            // Unmatched bytes: still part of the covering token list.
            Err(()) => out.push(Token::new(TokenKind::Other, span)),
        }
    }

    out
}

/// Map a raw token without internal structure to its published kind.
fn flat_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Trivia | RawToken::LineComment => TokenKind::Trivia,
        RawToken::Semicolon => TokenKind::Punct(PunctKind::Semicolon),
        RawToken::Comma => TokenKind::Punct(PunctKind::Comma),
        RawToken::RParen => TokenKind::Punct(PunctKind::RParen),
        RawToken::RBracket => TokenKind::Punct(PunctKind::RBracket),
        RawToken::RBrace => TokenKind::Punct(PunctKind::RBrace),
        RawToken::Dot => TokenKind::Punct(PunctKind::Dot),
        RawToken::Plus => TokenKind::Punct(PunctKind::Plus),
        RawToken::LParen | RawToken::LBracket | RawToken::LBrace | RawToken::Eq => {
            TokenKind::Punct(PunctKind::Other)
        }
        RawToken::Fenced => TokenKind::Fenced,
        RawToken::Ident | RawToken::Number => TokenKind::Other,
        // Handled by the caller before reaching here.
        RawToken::Str | RawToken::Char => TokenKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<(TokenKind, u32, u32)> {
        lex(text)
            .iter()
            .map(|t| (t.kind, t.span.start, t.span.end))
            .collect()
    }

    #[test]
    fn statement_with_string() {
        use TokenKind::{DoubleQuoted, Other, Punct, Trivia};
        assert_eq!(
            kinds("let s = \"ab\";"),
            vec![
                (Other, 0, 3),
                (Trivia, 3, 4),
                (Other, 4, 5),
                (Trivia, 5, 6),
                (Punct(PunctKind::Other), 6, 7),
                (Trivia, 7, 8),
                (DoubleQuoted, 8, 12),
                (Punct(PunctKind::Semicolon), 12, 13),
            ]
        );
    }

    #[test]
    fn string_with_escape_is_segmented() {
        assert_eq!(
            kinds("\"a\\nb\""),
            vec![
                (TokenKind::DoubleQuoted, 0, 2),
                (TokenKind::Escape, 2, 4),
                (TokenKind::DoubleQuoted, 4, 6),
            ]
        );
    }

    #[test]
    fn char_literal_is_segmented() {
        assert_eq!(
            kinds("'\\n'"),
            vec![
                (TokenKind::SingleQuoted, 0, 1),
                (TokenKind::Escape, 1, 3),
                (TokenKind::SingleQuoted, 3, 4),
            ]
        );
    }

    #[test]
    fn fenced_literal_is_one_token() {
        assert_eq!(
            kinds("``ab``"),
            vec![(TokenKind::Fenced, 0, 6)]
        );
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert!(lex("").is_empty());
    }

    #[allow(
        clippy::unwrap_used,
        reason = "proptest macros expand to code that can panic"
    )]
    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// The token list covers the input exactly: starts at 0,
            /// ends at the input length, no gaps, no overlaps. (The
            /// no-gap half is also debug-asserted by `TokenList::push`.)
            #[test]
            fn lex_covers_input(text in r#"[ a-z0-9"'`\\;,.+(){}\[\]\n]{0,64}"#) {
                let tokens = lex(&text);
                if text.is_empty() {
                    prop_assert!(tokens.is_empty());
                } else {
                    prop_assert!(!tokens.is_empty());
                    let first = tokens.get(0).map(|t| t.span.start);
                    prop_assert_eq!(first, Some(0));
                    let mut expected_start = 0;
                    for token in &tokens {
                        prop_assert_eq!(token.span.start, expected_start);
                        prop_assert!(token.span.end > token.span.start);
                        expected_start = token.span.end;
                    }
                    prop_assert_eq!(expected_start, text.len() as u32);
                }
            }

            /// Escape tokens only ever appear inside literals: they are
            /// always two or more bytes starting with a backslash.
            #[test]
            fn escape_tokens_start_with_backslash(text in r#"["'a-z\\n ]{0,48}"#) {
                let tokens = lex(&text);
                for token in &tokens {
                    if token.kind == TokenKind::Escape {
                        let slice = &text.as_bytes()[token.span.start as usize..];
                        prop_assert_eq!(slice[0], b'\\');
                        prop_assert!(token.span.len() >= 2);
                    }
                }
            }
        }
    }
}
