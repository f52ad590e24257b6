//! Fence matching for raw literals.
//!
//! Raw literals are delimited by runs of a repeated fence character, and
//! the run lengths carry the matching information: an opening run of
//! length `n` at the caret is well-closed only when the run after the
//! caret has length `n - 1` -- the caret sits after the just-typed fence
//! character, so that character is counted on the leading side but not
//! the trailing side. When the rule holds, the editor may insert one
//! more fence character to close the literal.

use tracing::trace;

use quill_token::{Document, TokenStream};

use crate::classify::is_opening_quote;
use crate::QuoteProfile;

/// Text that would close the fence opened at the caret, if any.
///
/// `offset` is the caret position: the first position after the opening
/// fence run being probed. The stream must be positioned at the token
/// containing the run; position is unchanged on return.
///
/// Returns `None` whenever the probe is not a valid fence opening -- a
/// non-fenced token, an off-end stream, a neutralized fence start, or
/// run lengths that do not satisfy the match rule. Absence is the
/// answer "no fence closes here", not an error.
pub fn closing_fence_text(
    profile: &QuoteProfile,
    stream: &mut impl TokenStream,
    document: &Document,
    offset: u32,
) -> Option<String> {
    if !profile.is_fenced(stream.kind()?) {
        return None;
    }
    let span = stream.span()?;
    let fence = profile.fence_byte();

    // Run of fence characters ending at the caret, bounded by the token.
    let leading = run_backward(document, fence, span.start, offset);
    if leading == 0 {
        return None;
    }
    // The run's first character must itself be a real opening delimiter;
    // an escaped or mid-literal fence start does not open anything.
    if !is_opening_quote(profile, stream, offset - leading) {
        return None;
    }
    // Run of fence characters from the caret onward, bounded by the token.
    let trailing = run_forward(document, fence, offset, span.end);

    if trailing + 1 == leading {
        trace!(offset, leading, trailing, "fence closable at caret");
        Some(profile.fence_char().to_string())
    } else {
        None
    }
}

/// Length of the maximal fence run in `[floor, offset)`, counted
/// backward from `offset`.
fn run_backward(document: &Document, fence: u8, floor: u32, offset: u32) -> u32 {
    let mut n = 0;
    while offset - n > floor && document.byte_at(offset - n - 1) == Some(fence) {
        n += 1;
    }
    n
}

/// Length of the maximal fence run in `[offset, ceil)`, counted forward
/// from `offset`.
fn run_forward(document: &Document, fence: u8, offset: u32, ceil: u32) -> u32 {
    let mut n = 0;
    while offset + n < ceil && document.byte_at(offset + n) == Some(fence) {
        n += 1;
    }
    n
}
