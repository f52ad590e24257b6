//! Bidirectional token-stream capability.
//!
//! [`TokenStream`] is the boundary contract with the token-stream
//! producer: a position in the token sequence that can report the current
//! token and step one token in either direction. Stepping past either end
//! parks the stream on an off-end sentinel -- `at_end()` turns true, the
//! current token accessors return `None`, and one step back toward the
//! tokens restores a valid position. A second step past the same end is a
//! no-op.
//!
//! The neighbor lookups `prev_kind`/`next_kind` encapsulate the
//! step-inspect-restore dance in one place, so callers get what amounts
//! to an immutable lookup and never have to prove their own step counts
//! balance out.

use crate::{Span, Token, TokenKind, TokenList};

/// A bidirectional position in a token sequence.
///
/// Implementations must uphold: from a position where `at_end()` is
/// false, `step_back()` followed by `step_forward()` (and the reverse
/// pair) returns to the same position.
pub trait TokenStream {
    /// Kind of the current token, `None` when off either end.
    fn kind(&self) -> Option<TokenKind>;

    /// Span of the current token, `None` when off either end.
    fn span(&self) -> Option<Span>;

    /// Whether the stream is parked off either end.
    fn at_end(&self) -> bool;

    /// Step to the next token. Past the last token this parks the stream
    /// off the high end; a further step is a no-op.
    fn step_forward(&mut self);

    /// Step to the previous token. Before the first token this parks the
    /// stream off the low end; a further step is a no-op.
    fn step_back(&mut self);

    /// Kind of the token immediately before the current one.
    ///
    /// `None` off either end of the stream or when already `at_end()`.
    /// The stream position is unchanged on return.
    fn prev_kind(&mut self) -> Option<TokenKind> {
        if self.at_end() {
            return None;
        }
        self.step_back();
        let kind = self.kind();
        self.step_forward();
        kind
    }

    /// Kind of the token immediately after the current one.
    ///
    /// `None` off either end of the stream or when already `at_end()`.
    /// The stream position is unchanged on return.
    fn next_kind(&mut self) -> Option<TokenKind> {
        if self.at_end() {
            return None;
        }
        self.step_forward();
        let kind = self.kind();
        self.step_back();
        kind
    }
}

/// Slice-backed [`TokenStream`] over a [`TokenList`].
///
/// Cheap to create (per query) and `Copy`-light to clone. Positions form
/// the range `-1..=len`: `-1` is off the low end, `len` off the high end,
/// everything between is a token index.
#[derive(Clone, Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    /// Invariant: `-1 <= pos <= tokens.len()`.
    pos: isize,
}

impl<'a> TokenCursor<'a> {
    /// Cursor positioned at the first token (off the high end if the
    /// list is empty).
    pub fn new(tokens: &'a TokenList) -> Self {
        TokenCursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Cursor positioned at the token containing `offset`, or off the
    /// high end when no token contains it.
    pub fn at_offset(tokens: &'a TokenList, offset: u32) -> Self {
        let pos = match tokens.index_of(offset) {
            Some(idx) => idx as isize,
            None => tokens.len() as isize,
        };
        TokenCursor {
            tokens: tokens.as_slice(),
            pos,
        }
    }

    /// Current token index, `None` when off either end.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.pos)
            .ok()
            .filter(|&i| i < self.tokens.len())
    }

    #[inline]
    fn token(&self) -> Option<&Token> {
        self.index().map(|i| &self.tokens[i])
    }

    #[inline]
    fn token_kind_at(&self, pos: isize) -> Option<TokenKind> {
        usize::try_from(pos)
            .ok()
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.kind)
    }
}

impl TokenStream for TokenCursor<'_> {
    #[inline]
    fn kind(&self) -> Option<TokenKind> {
        self.token().map(|t| t.kind)
    }

    #[inline]
    fn span(&self) -> Option<Span> {
        self.token().map(|t| t.span)
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.index().is_none()
    }

    #[inline]
    fn step_forward(&mut self) {
        if self.pos < self.tokens.len() as isize {
            self.pos += 1;
        }
    }

    #[inline]
    fn step_back(&mut self) {
        if self.pos > -1 {
            self.pos -= 1;
        }
    }

    // Random access: neighbor lookups are pure index arithmetic, no
    // stepping involved.
    #[inline]
    fn prev_kind(&mut self) -> Option<TokenKind> {
        if self.at_end() {
            return None;
        }
        self.token_kind_at(self.pos - 1)
    }

    #[inline]
    fn next_kind(&mut self) -> Option<TokenKind> {
        if self.at_end() {
            return None;
        }
        self.token_kind_at(self.pos + 1)
    }
}
