//! Delimiter classification.
//!
//! Decides whether the character at an offset is the opening or closing
//! delimiter of a literal token. The positional rule over the enclosing
//! token does most of the work; the subtle part is escape
//! neutralization: a delimiter whose neighboring token is an escape
//! marker is not a delimiter at all (`"abc\"` -- the trailing `"` belongs
//! to the escape, the literal is still open).
//!
//! Both queries leave the stream position exactly where they found it,
//! so one cursor can serve several queries.

use tracing::trace;

use quill_token::TokenStream;

use crate::QuoteProfile;

/// Whether the character at `offset` opens a literal.
///
/// The stream must be positioned at the token containing `offset`. The
/// position is unchanged on return.
///
/// An off-end stream, an offset outside the current token, or a
/// non-literal token all answer `false` -- "not applicable", never an
/// error.
pub fn is_opening_quote(
    profile: &QuoteProfile,
    stream: &mut impl TokenStream,
    offset: u32,
) -> bool {
    if !base_opening(profile, stream, offset) {
        return false;
    }
    // A delimiter right after an escape marker is the escape's text, not
    // an opening quote. Off-end look-around means no neutralization.
    match stream.prev_kind() {
        Some(prev) if profile.is_escape(prev) => {
            trace!(offset, "opening quote neutralized by preceding escape");
            false
        }
        _ => true,
    }
}

/// Whether the character at `offset` closes a literal.
///
/// Mirror image of [`is_opening_quote`]: the positional rule looks at
/// the token's last character, and neutralization consults the
/// immediately following token.
pub fn is_closing_quote(
    profile: &QuoteProfile,
    stream: &mut impl TokenStream,
    offset: u32,
) -> bool {
    if !base_closing(profile, stream, offset) {
        return false;
    }
    match stream.next_kind() {
        Some(next) if profile.is_escape(next) => {
            trace!(offset, "closing quote neutralized by following escape");
            false
        }
        _ => true,
    }
}

/// Positional rule: the first character of a literal token is its
/// opening delimiter.
fn base_opening(profile: &QuoteProfile, stream: &mut impl TokenStream, offset: u32) -> bool {
    let (Some(kind), Some(span)) = (stream.kind(), stream.span()) else {
        return false;
    };
    profile.is_literal(kind) && offset == span.start
}

/// Positional rule: the last character of a literal token of length >= 2
/// is its closing delimiter. A length-1 literal token is a lone opening
/// quote, never a closing one.
fn base_closing(profile: &QuoteProfile, stream: &mut impl TokenStream, offset: u32) -> bool {
    let (Some(kind), Some(span)) = (stream.kind(), stream.span()) else {
        return false;
    };
    profile.is_literal(kind) && span.len() >= 2 && offset == span.end - 1
}
