//! Literal-grammar profiles.
//!
//! A host language's literal grammar is data, not a subclass: which token
//! kinds are string/char literals, which kinds mark escape sequences,
//! which kinds are fence-delimited raw literals and what the fence
//! character is, which literal kinds may be joined by the
//! concatenation operator, and what that operator looks like. One
//! profile value configures every algorithm in this crate.

use rustc_hash::FxHashSet;

use quill_token::{PunctKind, TokenKind};

/// Profile construction error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// The fence character must be a single ASCII character so fence
    /// runs can be counted byte-wise.
    #[error("fence character {0:?} is not ASCII")]
    FenceNotAscii(char),

    /// Every concatenatable kind must also be a literal kind.
    #[error("concatenatable kind {0:?} is not in the literal set")]
    ConcatenatableNotLiteral(TokenKind),

    /// A kind cannot be both a literal and an escape marker.
    #[error("escape kind {0:?} is also in the literal set")]
    EscapeKindIsLiteral(TokenKind),

    /// Every fenced kind must also be a literal kind, or the fence
    /// matcher could never see its opening delimiter.
    #[error("fenced kind {0:?} is not in the literal set")]
    FencedNotLiteral(TokenKind),
}

/// Literal grammar configuration for one host language.
///
/// Construct via [`QuoteProfile::builder`], or use [`QuoteProfile::default`]
/// for the conventional grammar: `'...'` char literals, `"..."` string
/// literals with backslash escapes, backtick-fenced raw literals, and
/// `+` concatenation of double-quoted strings only.
#[derive(Clone, Debug)]
pub struct QuoteProfile {
    literal_kinds: FxHashSet<TokenKind>,
    escape_kinds: FxHashSet<TokenKind>,
    concatenatable: FxHashSet<TokenKind>,
    fenced_kinds: FxHashSet<TokenKind>,
    fence_char: char,
    concat_operator: String,
}

impl Default for QuoteProfile {
    fn default() -> Self {
        QuoteProfile {
            literal_kinds: [
                TokenKind::SingleQuoted,
                TokenKind::DoubleQuoted,
                TokenKind::Fenced,
            ]
            .into_iter()
            .collect(),
            escape_kinds: [TokenKind::Escape].into_iter().collect(),
            concatenatable: [TokenKind::DoubleQuoted].into_iter().collect(),
            fenced_kinds: [TokenKind::Fenced].into_iter().collect(),
            fence_char: '`',
            concat_operator: "+".to_string(),
        }
    }
}

impl QuoteProfile {
    pub fn builder() -> QuoteProfileBuilder {
        QuoteProfileBuilder::default()
    }

    /// Whether `kind` is a string/char literal (or literal fragment).
    #[inline]
    pub fn is_literal(&self, kind: TokenKind) -> bool {
        self.literal_kinds.contains(&kind)
    }

    /// The full set of literal token kinds, in no particular order.
    pub fn literal_kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.literal_kinds.iter().copied()
    }

    /// Whether `kind` is a raw literal delimited by fence runs.
    #[inline]
    pub fn is_fenced(&self, kind: TokenKind) -> bool {
        self.fenced_kinds.contains(&kind)
    }

    /// Whether `kind` marks an escape sequence that neutralizes an
    /// adjacent delimiter.
    #[inline]
    pub fn is_escape(&self, kind: TokenKind) -> bool {
        self.escape_kinds.contains(&kind)
    }

    /// Whether `kind` participates in string concatenation.
    #[inline]
    pub fn is_concatenatable(&self, kind: TokenKind) -> bool {
        self.concatenatable.contains(&kind)
    }

    /// The fence character of raw literals. Always ASCII.
    #[inline]
    pub fn fence_char(&self) -> char {
        self.fence_char
    }

    /// The fence character as a byte, for run counting.
    #[inline]
    pub(crate) fn fence_byte(&self) -> u8 {
        self.fence_char as u8
    }

    /// The host language's string-concatenation operator text.
    #[inline]
    pub fn concat_operator(&self) -> &str {
        &self.concat_operator
    }

    /// Whether a literal delimiter may be auto-closed when the token to
    /// the right of the caret is `kind`.
    ///
    /// Trivia (whitespace/comments), closing structural punctuation,
    /// separators, and other literals all permit auto-closing; anything
    /// else (an identifier, say) means the user is probably editing
    /// existing text and an inserted quote would be noise.
    pub fn appropriate_neighbor_for_literal(&self, kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Trivia
                | TokenKind::Punct(
                    PunctKind::Semicolon
                        | PunctKind::Comma
                        | PunctKind::RParen
                        | PunctKind::RBracket
                        | PunctKind::RBrace
                )
        ) || self.is_literal(kind)
    }
}

/// Builder for [`QuoteProfile`]. Validation happens in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct QuoteProfileBuilder {
    literal_kinds: FxHashSet<TokenKind>,
    escape_kinds: FxHashSet<TokenKind>,
    concatenatable: FxHashSet<TokenKind>,
    fenced_kinds: FxHashSet<TokenKind>,
    fence_char: Option<char>,
    concat_operator: Option<String>,
}

impl QuoteProfileBuilder {
    /// Add a literal token kind.
    #[must_use]
    pub fn literal(mut self, kind: TokenKind) -> Self {
        self.literal_kinds.insert(kind);
        self
    }

    /// Add an escape-marker token kind.
    #[must_use]
    pub fn escape(mut self, kind: TokenKind) -> Self {
        self.escape_kinds.insert(kind);
        self
    }

    /// Add a concatenatable literal kind.
    #[must_use]
    pub fn concatenatable(mut self, kind: TokenKind) -> Self {
        self.concatenatable.insert(kind);
        self
    }

    /// Mark a literal kind as a fence-delimited raw literal.
    #[must_use]
    pub fn fenced(mut self, kind: TokenKind) -> Self {
        self.fenced_kinds.insert(kind);
        self
    }

    /// Set the fence character for raw literals.
    #[must_use]
    pub fn fence_char(mut self, fence: char) -> Self {
        self.fence_char = Some(fence);
        self
    }

    /// Set the concatenation operator text.
    #[must_use]
    pub fn concat_operator(mut self, op: impl Into<String>) -> Self {
        self.concat_operator = Some(op.into());
        self
    }

    /// Validate and build the profile.
    pub fn build(self) -> Result<QuoteProfile, ProfileError> {
        let fence_char = self.fence_char.unwrap_or('`');
        if !fence_char.is_ascii() {
            return Err(ProfileError::FenceNotAscii(fence_char));
        }
        if let Some(&kind) = self
            .concatenatable
            .iter()
            .find(|k| !self.literal_kinds.contains(*k))
        {
            return Err(ProfileError::ConcatenatableNotLiteral(kind));
        }
        if let Some(&kind) = self
            .escape_kinds
            .iter()
            .find(|k| self.literal_kinds.contains(*k))
        {
            return Err(ProfileError::EscapeKindIsLiteral(kind));
        }
        if let Some(&kind) = self
            .fenced_kinds
            .iter()
            .find(|k| !self.literal_kinds.contains(*k))
        {
            return Err(ProfileError::FencedNotLiteral(kind));
        }
        Ok(QuoteProfile {
            literal_kinds: self.literal_kinds,
            escape_kinds: self.escape_kinds,
            concatenatable: self.concatenatable,
            fenced_kinds: self.fenced_kinds,
            fence_char,
            concat_operator: self.concat_operator.unwrap_or_else(|| "+".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_profile_sets() {
        let profile = QuoteProfile::default();
        assert!(profile.is_literal(TokenKind::DoubleQuoted));
        assert!(profile.is_literal(TokenKind::SingleQuoted));
        assert!(profile.is_literal(TokenKind::Fenced));
        assert!(!profile.is_literal(TokenKind::Escape));
        assert!(profile.is_escape(TokenKind::Escape));
        assert!(profile.is_concatenatable(TokenKind::DoubleQuoted));
        assert!(!profile.is_concatenatable(TokenKind::SingleQuoted));
        assert!(profile.is_fenced(TokenKind::Fenced));
        assert!(!profile.is_fenced(TokenKind::DoubleQuoted));
        assert_eq!(profile.fence_char(), '`');
        assert_eq!(profile.concat_operator(), "+");
    }

    #[test]
    fn literal_kinds_returns_the_whole_set() {
        let profile = QuoteProfile::default();
        let mut kinds: Vec<TokenKind> = profile.literal_kinds().collect();
        kinds.sort_by_key(|k| format!("{k:?}"));
        assert_eq!(
            kinds,
            vec![
                TokenKind::DoubleQuoted,
                TokenKind::Fenced,
                TokenKind::SingleQuoted,
            ]
        );
        assert!(kinds.iter().all(|&k| profile.is_literal(k)));
    }

    #[test]
    fn builder_roundtrip() {
        let profile = QuoteProfile::builder()
            .literal(TokenKind::DoubleQuoted)
            .escape(TokenKind::Escape)
            .concatenatable(TokenKind::DoubleQuoted)
            .fence_char('~')
            .concat_operator("..")
            .build()
            .map_err(|e| e.to_string());
        let profile = match profile {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(profile.fence_char(), '~');
        assert_eq!(profile.concat_operator(), "..");
    }

    #[test]
    fn rejects_non_ascii_fence() {
        let err = QuoteProfile::builder().fence_char('«').build();
        assert!(matches!(err, Err(ProfileError::FenceNotAscii('«'))));
    }

    #[test]
    fn rejects_concatenatable_outside_literal_set() {
        let err = QuoteProfile::builder()
            .literal(TokenKind::DoubleQuoted)
            .concatenatable(TokenKind::SingleQuoted)
            .build();
        assert!(matches!(
            err,
            Err(ProfileError::ConcatenatableNotLiteral(TokenKind::SingleQuoted))
        ));
    }

    #[test]
    fn rejects_literal_escape_overlap() {
        let err = QuoteProfile::builder()
            .literal(TokenKind::Escape)
            .escape(TokenKind::Escape)
            .build();
        assert!(matches!(
            err,
            Err(ProfileError::EscapeKindIsLiteral(TokenKind::Escape))
        ));
    }

    #[test]
    fn rejects_fenced_outside_literal_set() {
        let err = QuoteProfile::builder()
            .literal(TokenKind::DoubleQuoted)
            .fenced(TokenKind::Fenced)
            .build();
        assert!(matches!(
            err,
            Err(ProfileError::FencedNotLiteral(TokenKind::Fenced))
        ));
    }

    #[test]
    fn appropriate_neighbors() {
        let profile = QuoteProfile::default();
        assert!(profile.appropriate_neighbor_for_literal(TokenKind::Trivia));
        assert!(profile.appropriate_neighbor_for_literal(TokenKind::Punct(PunctKind::Semicolon)));
        assert!(profile.appropriate_neighbor_for_literal(TokenKind::Punct(PunctKind::RParen)));
        assert!(profile.appropriate_neighbor_for_literal(TokenKind::DoubleQuoted));
        assert!(!profile.appropriate_neighbor_for_literal(TokenKind::Other));
        assert!(!profile.appropriate_neighbor_for_literal(TokenKind::Punct(PunctKind::Dot)));
    }
}
