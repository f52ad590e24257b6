//! Token kinds and the token list.
//!
//! The kinds are the classification a highlighting lexer hands to the
//! quote-handling core: literal tokens, escape-sequence markers inside
//! literals, structural punctuation, and trivia. Escape sequences are
//! distinct tokens from the literal fragments around them -- that contract
//! is what lets the quote handler neutralize a delimiter by looking at a
//! single neighboring token.

use std::fmt;

use crate::Span;

/// Structural punctuation the quote handler cares about.
///
/// Only the punctuation consulted by the auto-insert appropriateness
/// check is distinguished; everything else is `Other`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PunctKind {
    Semicolon,
    Comma,
    RParen,
    RBracket,
    RBrace,
    Dot,
    Plus,
    Other,
}

/// Token classification supplied by the token-stream producer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Single-quoted (character) literal or a fragment of one.
    SingleQuoted,
    /// Double-quoted string literal or a fragment of one.
    DoubleQuoted,
    /// Fence-delimited raw literal (run of repeated fence characters).
    Fenced,
    /// Escape-sequence marker inside a literal (`\"`, `\\`, `\n`, ...).
    Escape,
    /// Structural punctuation.
    Punct(PunctKind),
    /// Whitespace or comment.
    Trivia,
    /// Anything else (identifiers, numbers, operators, unknown bytes).
    Other,
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Contiguous, non-overlapping token sequence covering the lexed text.
///
/// # Invariant
///
/// Each pushed token starts exactly where the previous one ended, and no
/// token is empty. Enforced with debug assertions at `push` time; the
/// binary search in [`index_of`](TokenList::index_of) relies on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create an empty list with reserved capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token.
    ///
    /// Debug-asserts contiguity with the previously pushed token and that
    /// the span is non-empty.
    pub fn push(&mut self, token: Token) {
        debug_assert!(
            !token.span.is_empty(),
            "empty token span {:?}",
            token.span
        );
        if let Some(last) = self.tokens.last() {
            debug_assert!(
                last.span.end == token.span.start,
                "non-contiguous token: previous ends at {}, next starts at {}",
                last.span.end,
                token.span.start
            );
        }
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Index of the token containing `offset`, if any.
    ///
    /// Binary search over the sorted, non-overlapping spans.
    pub fn index_of(&self, offset: u32) -> Option<usize> {
        let idx = self.tokens.partition_point(|t| t.span.end <= offset);
        let token = self.tokens.get(idx)?;
        token.span.contains(offset).then_some(idx)
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
