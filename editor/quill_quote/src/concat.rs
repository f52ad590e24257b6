//! Concatenation advice.
//!
//! When an editor action splits a literal (or joins two), it needs to
//! know whether the host language allows joining the pieces with the
//! concatenation operator, and whether the result must be parenthesized
//! to keep its meaning. `"some string".len()` split in the middle must
//! become `("some" + " string").len()` -- member access binds tighter
//! than the inserted operator.

use quill_token::TokenKind;

use crate::QuoteProfile;

/// Syntactic classification of a node in the external syntax tree.
///
/// Only the shapes the parenthesization rule distinguishes are named;
/// everything else is `Other`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// A literal expression wrapping a literal token.
    LiteralExpr,
    /// A member/property access expression (`expr.member`).
    MemberAccess,
    /// A binary expression (`a + b`).
    BinaryExpr,
    /// A call expression.
    Call,
    /// Anything else.
    Other,
}

/// Minimal read capability over the external syntax tree: a node's kind
/// and its parent. The tree itself is owned by the host; the adviser
/// only walks two levels up.
pub trait SyntaxNode {
    fn node_kind(&self) -> NodeKind;
    fn parent(&self) -> Option<&dyn SyntaxNode>;
}

/// Whether two adjacent literal tokens may be joined with the
/// concatenation operator.
///
/// True only when both kinds are in the profile's concatenatable set --
/// for the default profile, plain double-quoted strings. Char literals
/// and raw fenced literals never concatenate.
pub fn may_concatenate(profile: &QuoteProfile, a: TokenKind, b: TokenKind) -> bool {
    profile.is_concatenatable(a) && profile.is_concatenatable(b)
}

/// Whether concatenating at `element` requires wrapping the literal in
/// parentheses first.
///
/// True iff the element's parent is a literal expression whose own
/// parent is a member access: the bare literal binds tighter to the
/// `.member` than the inserted operator would.
pub fn requires_parens(element: &dyn SyntaxNode) -> bool {
    let Some(parent) = element.parent() else {
        return false;
    };
    if parent.node_kind() != NodeKind::LiteralExpr {
        return false;
    }
    matches!(
        parent.parent().map(SyntaxNode::node_kind),
        Some(NodeKind::MemberAccess)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parent-linked node standing in for a real syntax tree.
    struct Node<'a> {
        kind: NodeKind,
        parent: Option<&'a Node<'a>>,
    }

    impl<'a> Node<'a> {
        fn root(kind: NodeKind) -> Self {
            Node { kind, parent: None }
        }

        fn child(&'a self, kind: NodeKind) -> Node<'a> {
            Node {
                kind,
                parent: Some(self),
            }
        }
    }

    impl SyntaxNode for Node<'_> {
        fn node_kind(&self) -> NodeKind {
            self.kind
        }

        fn parent(&self) -> Option<&dyn SyntaxNode> {
            self.parent.map(|p| p as &dyn SyntaxNode)
        }
    }

    #[test]
    fn concatenatable_pairs() {
        let profile = QuoteProfile::default();
        assert!(may_concatenate(
            &profile,
            TokenKind::DoubleQuoted,
            TokenKind::DoubleQuoted
        ));
        assert!(!may_concatenate(
            &profile,
            TokenKind::DoubleQuoted,
            TokenKind::SingleQuoted
        ));
        assert!(!may_concatenate(
            &profile,
            TokenKind::SingleQuoted,
            TokenKind::SingleQuoted
        ));
        assert!(!may_concatenate(
            &profile,
            TokenKind::Fenced,
            TokenKind::DoubleQuoted
        ));
        assert!(!may_concatenate(&profile, TokenKind::Fenced, TokenKind::Fenced));
    }

    #[test]
    fn literal_under_member_access_needs_parens() {
        // "abc".len(): literal token <- literal expr <- member access
        let access = Node::root(NodeKind::MemberAccess);
        let literal_expr = access.child(NodeKind::LiteralExpr);
        let leaf = literal_expr.child(NodeKind::Other);
        assert!(requires_parens(&leaf));
    }

    #[test]
    fn literal_in_binary_expr_needs_no_parens() {
        // "abc" + x: literal token <- literal expr <- binary expr
        let binary = Node::root(NodeKind::BinaryExpr);
        let literal_expr = binary.child(NodeKind::LiteralExpr);
        let leaf = literal_expr.child(NodeKind::Other);
        assert!(!requires_parens(&leaf));
    }

    #[test]
    fn literal_without_grandparent_needs_no_parens() {
        let literal_expr = Node::root(NodeKind::LiteralExpr);
        let leaf = literal_expr.child(NodeKind::Other);
        assert!(!requires_parens(&leaf));
    }

    #[test]
    fn orphan_leaf_needs_no_parens() {
        let leaf = Node::root(NodeKind::Other);
        assert!(!requires_parens(&leaf));
    }

    #[test]
    fn non_literal_parent_needs_no_parens() {
        let access = Node::root(NodeKind::MemberAccess);
        let call = access.child(NodeKind::Call);
        let leaf = call.child(NodeKind::Other);
        assert!(!requires_parens(&leaf));
    }
}
