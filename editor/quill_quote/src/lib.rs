//! Quote/literal boundary matching for editor actions.
//!
//! Given a bidirectional view of a token stream and a caret offset, this
//! crate answers the questions a quote-aware editor action asks:
//!
//! - is the character at the caret an opening or a closing delimiter
//!   ([`is_opening_quote`], [`is_closing_quote`]), with escape sequences
//!   correctly neutralizing adjacent delimiters;
//! - what text closes the raw-literal fence opened at the caret
//!   ([`closing_fence_text`]), by matching fence-run lengths;
//! - may two adjacent literals be joined with the concatenation operator
//!   ([`may_concatenate`]), and does the join need parentheses
//!   ([`requires_parens`]).
//!
//! Every query is a pure computation over an immutable snapshot of the
//! token stream and document text: no I/O, no retained state, answers by
//! value or absence, never errors. The host language's literal grammar
//! is configured by a [`QuoteProfile`] value.

mod classify;
mod concat;
mod fence;
mod insert;
mod profile;

pub use classify::{is_closing_quote, is_opening_quote};
pub use concat::{may_concatenate, requires_parens, NodeKind, SyntaxNode};
pub use fence::closing_fence_text;
pub use insert::ClosingQuoteInsertion;
pub use profile::{ProfileError, QuoteProfile, QuoteProfileBuilder};
