//! Source-order walk that collects magic number positions.

use super::classifier::{is_magic, NumericLiteralToken};
use swift_lint_core::{NodeId, NodeKind, Span, SyntaxTree};
use tracing::trace;

/// Collects the positions of magic numbers in one tree.
///
/// Create one per file; the visitor only reads the tree.
#[derive(Debug)]
pub struct LiteralVisitor<'t> {
    tree: &'t SyntaxTree,
    violations: Vec<Span>,
}

impl<'t> LiteralVisitor<'t> {
    /// Creates a visitor over `tree` with no findings yet.
    #[must_use]
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self {
            tree,
            violations: Vec::new(),
        }
    }

    /// Walks the whole tree depth-first in source order.
    ///
    /// Findings replace those of any previous walk.
    pub fn walk(&mut self) {
        self.violations.clear();
        let Some(root) = self.tree.root() else {
            return;
        };

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            match node.kind {
                NodeKind::IntegerLiteral | NodeKind::FloatLiteral => self.visit_literal(id),
                NodeKind::Attribute | NodeKind::AvailabilityCondition => {}
                _ => stack.extend(self.tree.children(id).iter().rev()),
            }
        }
    }

    fn visit_literal(&mut self, id: NodeId) {
        let Some(token) = NumericLiteralToken::from_node(self.tree, id) else {
            return;
        };
        let magic = is_magic(&token, self.tree);
        trace!(literal = token.text, line = token.span.line, magic, "Classified literal");
        if magic {
            self.violations.push(token.span);
        }
    }

    /// Positions found by the last walk, in source order.
    #[must_use]
    pub fn violations(&self) -> &[Span] {
        &self.violations
    }

    /// Consumes the visitor and returns its findings.
    #[must_use]
    pub fn into_violations(self) -> Vec<Span> {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(offset: usize) -> Span {
        Span::new(offset, 2, 1, offset + 1)
    }

    /// `foo(12 + 34)` with the second operand nested one level deeper.
    fn call_tree() -> SyntaxTree {
        let mut b = SyntaxTree::builder();
        let root = b.push(None, NodeKind::SourceFile, Span::default(), None);
        let call = b.push(Some(root), NodeKind::Other, Span::default(), None);
        let args = b.push(Some(call), NodeKind::Other, Span::default(), None);
        b.push(Some(args), NodeKind::IntegerLiteral, span(4), Some("12"));
        let rhs = b.push(Some(args), NodeKind::Other, Span::default(), None);
        b.push(Some(rhs), NodeKind::IntegerLiteral, span(9), Some("34"));
        b.build()
    }

    #[test]
    fn findings_are_in_source_order() {
        let tree = call_tree();
        let mut visitor = LiteralVisitor::new(&tree);
        visitor.walk();
        assert_eq!(visitor.violations(), &[span(4), span(9)]);
    }

    #[test]
    fn walking_twice_gives_the_same_result() {
        let tree = call_tree();
        let mut visitor = LiteralVisitor::new(&tree);
        visitor.walk();
        let first = visitor.violations().to_vec();
        visitor.walk();
        assert_eq!(visitor.into_violations(), first);
    }

    #[test]
    fn exempt_and_initializer_literals_are_skipped() {
        let mut b = SyntaxTree::builder();
        let root = b.push(None, NodeKind::SourceFile, Span::default(), None);
        let decl = b.push(Some(root), NodeKind::Other, Span::default(), None);
        let init = b.push(Some(decl), NodeKind::InitializerClause, Span::default(), None);
        b.push(Some(init), NodeKind::IntegerLiteral, span(10), Some("123"));
        let expr = b.push(Some(root), NodeKind::Other, Span::default(), None);
        b.push(Some(expr), NodeKind::IntegerLiteral, span(20), Some("0"));
        b.push(Some(expr), NodeKind::FloatLiteral, span(30), Some("1.0"));
        let tree = b.build();

        let mut visitor = LiteralVisitor::new(&tree);
        visitor.walk();
        assert!(visitor.violations().is_empty());
    }

    #[test]
    fn attribute_subtrees_are_not_entered() {
        let mut b = SyntaxTree::builder();
        let root = b.push(None, NodeKind::SourceFile, Span::default(), None);
        let attr = b.push(Some(root), NodeKind::Attribute, Span::default(), None);
        b.push(Some(attr), NodeKind::IntegerLiteral, span(12), Some("13"));
        let cond = b.push(Some(root), NodeKind::AvailabilityCondition, Span::default(), None);
        b.push(Some(cond), NodeKind::FloatLiteral, span(40), Some("10.10"));
        let call = b.push(Some(root), NodeKind::Other, Span::default(), None);
        b.push(Some(call), NodeKind::IntegerLiteral, span(60), Some("42"));
        let tree = b.build();

        let mut visitor = LiteralVisitor::new(&tree);
        visitor.walk();
        assert_eq!(visitor.violations(), &[span(60)]);
    }

    #[test]
    fn empty_tree_has_no_findings() {
        let tree = SyntaxTree::default();
        let mut visitor = LiteralVisitor::new(&tree);
        visitor.walk();
        assert!(visitor.into_violations().is_empty());
    }
}
