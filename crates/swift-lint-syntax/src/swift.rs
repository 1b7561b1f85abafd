//! Swift parsing using Tree-sitter.

use tracing::debug;
use tree_sitter::{Language, Node, Parser};

use crate::tree::{NodeId, NodeKind, Span, SyntaxTree, TreeBuilder};

/// Errors raised while producing a [`SyntaxTree`].
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    /// The bundled grammar is incompatible with the linked tree-sitter.
    #[error("Failed to load Swift grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Tree-sitter gave up without producing a tree.
    #[error("Parser produced no syntax tree")]
    NoTree,
}

/// Parses Swift source into a [`SyntaxTree`].
///
/// A fresh tree-sitter parser is created per call, so a single
/// `SwiftParser` can be shared between threads.
pub struct SwiftParser {
    language: Language,
}

impl SwiftParser {
    /// File extensions handled by this parser.
    pub const EXTENSIONS: &'static [&'static str] = &["swift"];

    /// Creates a new Swift parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_swift::LANGUAGE.into(),
        }
    }

    /// Parses a whole file.
    ///
    /// Syntax errors do not fail the parse: tree-sitter recovers and the
    /// affected region shows up as [`NodeKind::Error`].
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or tree-sitter
    /// produces no tree at all.
    pub fn parse(&self, source: &str) -> Result<SyntaxTree, SyntaxError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;

        let tree = parser.parse(source, None).ok_or(SyntaxError::NoTree)?;
        let lowered = Lowering::new(source).run(tree.root_node());

        if lowered.has_errors() {
            debug!("Recovered from syntax errors ({} nodes)", lowered.len());
        }

        Ok(lowered)
    }
}

impl Default for SwiftParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a tree-sitter node onto the closed [`NodeKind`] set.
fn kind_for(node: &Node<'_>) -> NodeKind {
    if node.is_error() {
        return NodeKind::Error;
    }
    match node.kind() {
        "source_file" => NodeKind::SourceFile,
        "integer_literal" | "hex_literal" | "oct_literal" | "bin_literal" => {
            NodeKind::IntegerLiteral
        }
        "real_literal" => NodeKind::FloatLiteral,
        "attribute" => NodeKind::Attribute,
        "availability_condition" => NodeKind::AvailabilityCondition,
        "line_string_literal" | "multi_line_string_literal" | "raw_string_literal" => {
            NodeKind::StringLiteral
        }
        "comment" | "multiline_comment" => NodeKind::Comment,
        _ => NodeKind::Other,
    }
}

/// Whether a child in the given field of `parent_kind` is the value bound
/// by a declaration.
fn is_initializer_slot(parent_kind: &str, field: Option<&str>) -> bool {
    matches!(
        (parent_kind, field),
        ("property_declaration", Some("value"))
            | ("enum_entry", Some("raw_value"))
            | (_, Some("default_value"))
    )
}

struct Lowering<'s> {
    source: &'s str,
    builder: TreeBuilder,
}

impl<'s> Lowering<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            builder: SyntaxTree::builder(),
        }
    }

    fn span(&self, node: &Node<'_>) -> Span {
        let start = node.start_byte();
        let point = node.start_position();
        let line_start = start.saturating_sub(point.column);
        let column = self
            .source
            .get(line_start..start)
            .map_or(point.column, |prefix| prefix.chars().count());
        Span::new(
            start,
            node.end_byte().saturating_sub(start),
            point.row + 1,
            column + 1,
        )
    }

    fn push(&mut self, parent: NodeId, node: &Node<'_>) -> NodeId {
        let kind = kind_for(node);
        let text = if kind.is_numeric_literal() {
            node.utf8_text(self.source.as_bytes()).ok()
        } else {
            None
        };
        let span = self.span(node);
        self.builder.push(Some(parent), kind, span, text)
    }

    /// Pre-order walk with an explicit ancestor stack.
    fn run(mut self, root: Node<'_>) -> SyntaxTree {
        let root_span = self.span(&root);
        let root_id = self
            .builder
            .push(None, NodeKind::SourceFile, root_span, None);

        let mut cursor = root.walk();
        let mut ancestors: Vec<(NodeId, &'static str)> = vec![(root_id, root.kind())];

        if !cursor.goto_first_child() {
            return self.builder.build();
        }

        loop {
            let node = cursor.node();
            let lowered = (node.is_named() || node.is_error()) && !node.is_missing();

            if lowered {
                if let Some(&(parent, parent_kind)) = ancestors.last() {
                    let parent = if is_initializer_slot(parent_kind, cursor.field_name()) {
                        let span = self.span(&node);
                        self.builder
                            .push(Some(parent), NodeKind::InitializerClause, span, None)
                    } else {
                        parent
                    };
                    let id = self.push(parent, &node);

                    if cursor.goto_first_child() {
                        ancestors.push((id, node.kind()));
                        continue;
                    }
                }
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return self.builder.build();
                }
                ancestors.pop();
            }
        }
    }
}
