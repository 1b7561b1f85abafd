//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // swift-lint: allow(no-magic-numbers) reason="HTTP status code"
//! ```
//!
//! A directive applies to its own line and to the line below it.

use std::collections::{HashMap, HashSet};

use swift_lint_syntax::{NodeKind, SyntaxTree};

/// Prefix every allowance comment starts with.
pub const DIRECTIVE_PREFIX: &str = "swift-lint:";

/// Result of checking for allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule names that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

/// Allowance directives of one file, keyed by the line they start on.
///
/// Only line comments the parser recognised are considered, so `//`
/// inside a string literal never starts a directive.
#[derive(Debug, Clone, Default)]
pub struct AllowDirectives {
    by_line: HashMap<usize, AllowDirective>,
}

impl AllowDirectives {
    /// Collects the directives from the comment nodes of `tree`.
    #[must_use]
    pub fn from_tree(content: &str, tree: &SyntaxTree) -> Self {
        let by_line = tree
            .iter()
            .filter(|(_, node)| node.kind == NodeKind::Comment)
            .filter_map(|(_, node)| {
                let span = node.span;
                let text = content.get(span.offset..span.offset + span.length)?;
                parse_comment(text).map(|directive| (span.line, directive))
            })
            .collect();
        Self { by_line }
    }

    /// Checks whether `rule_name` is allowed on `line` (1-indexed).
    ///
    /// A directive on the line itself or on the line above applies.
    #[must_use]
    pub fn check(&self, line: usize, rule_name: &str) -> AllowCheck {
        [line.saturating_sub(1), line]
            .into_iter()
            .filter(|&l| l > 0)
            .filter_map(|l| self.by_line.get(&l))
            .find(|d| d.rules.contains(rule_name) || d.rules.contains("all"))
            .map_or(AllowCheck::Denied, |d| AllowCheck::Allowed {
                reason: d.reason.clone(),
            })
    }

    /// Number of directives found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_line.len()
    }

    /// Returns true if the file has no directives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}

/// Parses the text of a `//` comment.
fn parse_comment(comment: &str) -> Option<AllowDirective> {
    let comment_content = comment.strip_prefix("//")?.trim_start_matches('/').trim();

    let directive = comment_content.strip_prefix(DIRECTIVE_PREFIX)?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules: HashSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest
        .strip_prefix("reason=")
        .map(str::trim)
        .and_then(|r| r.strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()));

    Some(AllowDirective { rules, reason })
}
