//! The closing-delimiter insertion contract.
//!
//! The matcher only advises; the editor action applies the edit. The
//! contract it must honor: insert one space followed by the closing
//! text at the caret offset, then select exactly the first inserted
//! character, so the user sees where the synthesized closing landed and
//! can type over it.

use quill_token::{DocumentBuffer, Span};

/// A pending closing-delimiter edit: where, what text, what to select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosingQuoteInsertion {
    offset: u32,
    text: String,
}

impl ClosingQuoteInsertion {
    /// Describe the insertion of `closing` at `offset`.
    pub fn new(offset: u32, closing: &str) -> Self {
        ClosingQuoteInsertion {
            offset,
            text: format!(" {closing}"),
        }
    }

    /// The exact text to insert (leading space included).
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The byte offset to insert at.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// The selection the editor must set after inserting: exactly the
    /// first inserted character.
    #[inline]
    pub fn selection(&self) -> Span {
        Span::new(self.offset, self.offset + 1)
    }

    /// Apply the edit to `buffer` and return the selection to set.
    pub fn apply(&self, buffer: &mut impl DocumentBuffer) -> Span {
        buffer.insert(self.offset, &self.text);
        self.selection()
    }
}
