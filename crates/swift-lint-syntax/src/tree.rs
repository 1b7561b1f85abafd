//! Arena syntax tree.
//!
//! Nodes are appended in pre-order, which makes the arena index order equal
//! to the order in which nodes start in the source text. Children are owned
//! by index; parents are plain back-references.

/// Index of a node inside a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the arena index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Closed set of node kinds exposed to rules.
///
/// Everything the lowering does not need to distinguish becomes
/// [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a file.
    SourceFile,
    /// Integer literal expression (decimal, hex, octal or binary).
    IntegerLiteral,
    /// Floating-point literal expression.
    FloatLiteral,
    /// Right-hand side of `let`/`var`, a default parameter value or an enum
    /// case raw value.
    InitializerClause,
    /// `@attribute(...)`, including its argument list.
    Attribute,
    /// `#available(...)` / `#unavailable(...)` condition.
    AvailabilityCondition,
    /// String literal of any flavour. Interpolations remain children.
    StringLiteral,
    /// Line or block comment.
    Comment,
    /// Region the parser could not make sense of.
    Error,
    /// Any other construct.
    Other,
}

impl NodeKind {
    /// Returns true for integer and floating-point literal expressions.
    #[must_use]
    pub fn is_numeric_literal(self) -> bool {
        matches!(self, Self::IntegerLiteral | Self::FloatLiteral)
    }
}

/// Source span of a node, measured at its first non-trivia character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column in characters (1-indexed).
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(offset: usize, length: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            length,
            line,
            column,
        }
    }
}

/// A node stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Kind of this node.
    pub kind: NodeKind,
    /// Location of the node in the source.
    pub span: Span,
    /// Source text, kept for numeric literals only.
    pub text: Option<Box<str>>,
    /// Enclosing node; `None` for the root.
    pub parent: Option<NodeId>,
    /// Child nodes in source order.
    pub children: Vec<NodeId>,
}

impl SyntaxNode {
    /// Returns the recorded text, or an empty string.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Immutable syntax tree of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    /// Starts building a tree by hand.
    #[must_use]
    pub fn builder() -> TreeBuilder {
        TreeBuilder::default()
    }

    /// Returns the root node id, if the tree is not empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    /// Looks up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Returns the kind of a node's parent.
    #[must_use]
    pub fn parent_kind(&self, id: NodeId) -> Option<NodeKind> {
        self.parent(id).and_then(|p| self.get(p)).map(|n| n.kind)
    }

    /// Iterates over the ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Returns the children of a node in source order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Iterates over all nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(index_to_u32(i)), n))
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if the parser recovered from at least one error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.nodes.iter().any(|n| n.kind == NodeKind::Error)
    }
}

fn index_to_u32(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Appends nodes to a [`SyntaxTree`] in pre-order.
///
/// Used by the Swift lowering and by tests that need a tree with an exact
/// shape.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<SyntaxNode>,
}

impl TreeBuilder {
    /// Appends a node under `parent` and returns its id.
    ///
    /// Nodes must be pushed in source order. A `parent` that does not exist
    /// yet is recorded as no parent.
    pub fn push(
        &mut self,
        parent: Option<NodeId>,
        kind: NodeKind,
        span: Span,
        text: Option<&str>,
    ) -> NodeId {
        let id = NodeId(index_to_u32(self.nodes.len()));
        let parent = parent.filter(|p| p.index() < self.nodes.len());
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        self.nodes.push(SyntaxNode {
            kind,
            span,
            text: text.map(Into::into),
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Finishes the tree.
    #[must_use]
    pub fn build(self) -> SyntaxTree {
        SyntaxTree { nodes: self.nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (SyntaxTree, NodeId, NodeId, NodeId) {
        let mut b = SyntaxTree::builder();
        let root = b.push(None, NodeKind::SourceFile, Span::new(0, 13, 1, 1), None);
        let init = b.push(
            Some(root),
            NodeKind::InitializerClause,
            Span::new(10, 3, 1, 11),
            None,
        );
        let lit = b.push(
            Some(init),
            NodeKind::IntegerLiteral,
            Span::new(10, 3, 1, 11),
            Some("123"),
        );
        (b.build(), root, init, lit)
    }

    #[test]
    fn test_parent_links() {
        let (tree, root, init, lit) = sample();
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.parent(lit), Some(init));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent_kind(lit), Some(NodeKind::InitializerClause));
        assert_eq!(tree.children(root), &[init]);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let (tree, root, init, lit) = sample();
        let ancestors: Vec<NodeId> = tree.ancestors(lit).collect();
        assert_eq!(ancestors, vec![init, root]);
    }

    #[test]
    fn test_literal_text() {
        let (tree, _, init, lit) = sample();
        assert_eq!(tree.get(lit).map(SyntaxNode::text), Some("123"));
        assert_eq!(tree.get(init).map(SyntaxNode::text), Some(""));
    }

    #[test]
    fn test_unknown_parent_is_dropped() {
        let mut b = SyntaxTree::builder();
        let orphan = b.push(
            Some(NodeId(7)),
            NodeKind::FloatLiteral,
            Span::default(),
            Some("2.0"),
        );
        let tree = b.build();
        assert_eq!(tree.parent(orphan), None);
    }

    #[test]
    fn test_empty_tree() {
        let tree = SyntaxTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert!(!tree.has_errors());
    }
}
