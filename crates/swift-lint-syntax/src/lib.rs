//! # swift-lint-syntax
//!
//! Tree-sitter powered Swift parsing for swift-lint.
//!
//! Rules never see tree-sitter types. The parser lowers the concrete syntax
//! tree produced by `tree-sitter-swift` into a small arena tree:
//!
//! - [`SyntaxTree`] stores nodes in pre-order, so node order is source order
//! - [`NodeKind`] is the closed set of node kinds rules can match on
//! - parents are [`NodeId`] back-references into the arena, never owners
//! - [`SwiftParser`] performs the parse and the lowering

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod swift;
pub mod tree;

pub use swift::{SwiftParser, SyntaxError};
pub use tree::{NodeId, NodeKind, Span, SyntaxNode, SyntaxTree, TreeBuilder};
