//! Token, span, and document model for Quill.
//!
//! Standalone foundation crate: the token classification a highlighting
//! lexer produces, compact spans, the [`TokenStream`] bidirectional
//! cursor capability, and read/insert access to the document text. The
//! quote-handling algorithms live in `quill_quote`; a reference
//! token-stream producer lives in `quill_lexer`.

mod document;
mod span;
mod stream;
mod token;

pub use document::{Document, DocumentBuffer};
pub use span::{Span, SpanError};
pub use stream::{TokenCursor, TokenStream};
pub use token::{PunctKind, Token, TokenKind, TokenList};
