//! Document text access and the insertion capability.
//!
//! The quote-handling core reads the document as an immutable character
//! sequence for the duration of a query. Mutation happens only through
//! [`DocumentBuffer::insert`], invoked by the editor action that applies
//! an advised edit -- never by the matcher itself.

use crate::Span;

/// Write capability of the editing surface: insert text at a byte offset
/// as a single synchronous operation.
pub trait DocumentBuffer {
    /// Insert `text` at `offset`. `offset` must lie on a character
    /// boundary within the document.
    fn insert(&mut self, offset: u32, text: &str);
}

/// In-memory document: owned text plus byte-level read access.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Document { text: text.into() }
    }

    /// Full text of the document.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Raw bytes of the document.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Document length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte at `offset`, `None` past the end.
    #[inline]
    pub fn byte_at(&self, offset: u32) -> Option<u8> {
        self.text.as_bytes().get(offset as usize).copied()
    }

    /// Text within `span`, `None` when the span is out of bounds or cuts
    /// a character boundary.
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.text.get(span.start as usize..span.end as usize)
    }
}

impl DocumentBuffer for Document {
    fn insert(&mut self, offset: u32, text: &str) {
        self.text.insert_str(offset as usize, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slice_and_byte_access() {
        let doc = Document::new("let s = \"ab\";");
        assert_eq!(doc.slice(Span::new(8, 12)), Some("\"ab\""));
        assert_eq!(doc.byte_at(8), Some(b'"'));
        assert_eq!(doc.byte_at(13), None);
        assert_eq!(doc.slice(Span::new(0, 100)), None);
    }

    #[test]
    fn insert_at_offset() {
        let mut doc = Document::new("\"ab");
        doc.insert(3, "\"");
        assert_eq!(doc.text(), "\"ab\"");
    }

    #[test]
    fn insert_in_middle() {
        let mut doc = Document::new("ac");
        doc.insert(1, "b");
        assert_eq!(doc.text(), "abc");
    }
}
