//! Decides whether a single numeric literal is a magic number.

use swift_lint_core::{NodeId, NodeKind, Span, SyntaxTree};

/// Values that are never magic.
const EXEMPT_VALUES: [f64; 2] = [0.0, 1.0];

/// Integer or floating-point literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `42`, `0xFF`, `1_000`
    Integer,
    /// `2.0`, `1e-3`, `1_000.000_01`
    Float,
}

/// A numeric literal together with the context the classifier looks at.
#[derive(Debug, Clone, Copy)]
pub struct NumericLiteralToken<'t> {
    /// Node of the literal expression.
    pub id: NodeId,
    /// Text as written, separators included.
    pub text: &'t str,
    /// Integer or floating-point.
    pub kind: LiteralKind,
    /// Position of the first character of the literal.
    pub span: Span,
    /// Enclosing node of the literal expression.
    pub parent: Option<NodeId>,
}

impl<'t> NumericLiteralToken<'t> {
    /// Reads the literal at `id`, or `None` if the node is not a numeric
    /// literal.
    #[must_use]
    pub fn from_node(tree: &'t SyntaxTree, id: NodeId) -> Option<Self> {
        let node = tree.get(id)?;
        let kind = match node.kind {
            NodeKind::IntegerLiteral => LiteralKind::Integer,
            NodeKind::FloatLiteral => LiteralKind::Float,
            _ => return None,
        };
        Some(Self {
            id,
            text: node.text(),
            kind,
            span: node.span,
            parent: node.parent,
        })
    }
}

/// Returns true if the literal should be replaced by a named constant.
///
/// Not magic:
/// - text that does not parse as a number
/// - the values `0` and `1`
/// - a literal without a parent
/// - the value bound by a declaration's initializer
/// - anything inside an attribute or availability condition
#[must_use]
pub fn is_magic(token: &NumericLiteralToken<'_>, tree: &SyntaxTree) -> bool {
    let Some(value) = numeric_value(token.text) else {
        return false;
    };
    if EXEMPT_VALUES.contains(&value) {
        return false;
    }

    let Some(parent) = token.parent.and_then(|p| tree.get(p)) else {
        return false;
    };
    if parent.kind == NodeKind::InitializerClause {
        return false;
    }

    !in_attribute_context(tree, token.id)
}

/// Parses literal text into its value, ignoring `_` digit separators.
///
/// Decimal integers and floats, `0x` hexadecimal integers and hexadecimal
/// floats with a binary exponent (`0x1.8p1`) are understood. A sign inside
/// the text is part of the value.
#[must_use]
pub fn numeric_value(text: &str) -> Option<f64> {
    let canonical: String = text.chars().filter(|&c| c != '_').collect();

    let (negative, digits) = match canonical.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, canonical.strip_prefix('+').unwrap_or(&canonical)),
    };

    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        parse_hex(hex)?
    } else if digits.starts_with(|c: char| c.is_ascii_digit()) {
        digits.parse::<f64>().ok()?
    } else {
        return None;
    };

    magnitude
        .is_finite()
        .then_some(if negative { -magnitude } else { magnitude })
}

/// `<hex>[.<hex>][p<exp>]`, the text after `0x`.
fn parse_hex(text: &str) -> Option<f64> {
    let (mantissa, exponent) = match text.split_once(['p', 'P']) {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().ok()?),
        None => (text, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let whole = hex_digits(whole)?;
    let mut scale = 1.0_f64;
    let mut fraction_value = 0.0_f64;
    for c in fraction.chars() {
        scale /= 16.0;
        fraction_value += f64::from(c.to_digit(16)?) * scale;
    }

    Some((whole + fraction_value) * 2.0_f64.powi(exponent))
}

fn hex_digits(digits: &str) -> Option<f64> {
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(16).map(|d| acc * 16.0 + f64::from(d))
    })
}

fn in_attribute_context(tree: &SyntaxTree, id: NodeId) -> bool {
    tree.ancestors(id)
        .filter_map(|a| tree.get(a))
        .any(|n| matches!(n.kind, NodeKind::Attribute | NodeKind::AvailabilityCondition))
}
