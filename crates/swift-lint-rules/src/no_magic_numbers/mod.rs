//! SL001: Flag numeric literals that should be named constants.
//!
//! # Rationale
//!
//! A bare `42` in an expression says nothing about what it means, and the
//! same value repeated across a codebase drifts apart when one copy is
//! changed. Binding the value to a name once (`let retryLimit = 42`)
//! documents it and keeps every use in sync.
//!
//! Not reported:
//! - the values `0` and `1`, in any spelling
//! - the value a declaration is initialised with (`let x = 42`, default
//!   parameter values, enum raw values)
//! - literals inside attributes and `#available` conditions
//!
//! # Configuration
//!
//! The rule is opt-in.
//!
//! ```toml
//! [rules.no-magic-numbers]
//! enabled = true
//! severity = "warning"   # or "error"
//! ```
//!
//! # Suppression
//!
//! - `// swift-lint: allow(no-magic-numbers)` on the line or the line above
//! - at error severity, add `reason="..."` to the directive

mod classifier;
mod examples;
mod visitor;

pub use classifier::{is_magic, numeric_value, LiteralKind, NumericLiteralToken};
pub use visitor::LiteralVisitor;

use swift_lint_core::utils::AllowDirectives;
use swift_lint_core::{
    ConfigError, FileContext, Location, Rule, RuleConfig, RuleDescription, RuleKind, Severity,
    Span, Suggestion, SyntaxTree, Violation,
};
use tracing::{debug, warn};

/// Rule code for no-magic-numbers.
pub const CODE: &str = "SL001";

/// Rule name for no-magic-numbers.
pub const NAME: &str = "no-magic-numbers";

/// Documentation and fixture corpora for no-magic-numbers.
pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: NAME,
    name: "No Magic Numbers",
    description: "Magic numbers should be replaced by named constants",
    kind: RuleKind::Idiomatic,
    opt_in: true,
    non_triggering_examples: examples::NON_TRIGGERING,
    triggering_examples: examples::TRIGGERING,
};

const OPTIONS: &[&str] = &[];

/// Reports numeric literals that should be replaced by named constants.
#[derive(Debug, Clone)]
pub struct NoMagicNumbers {
    /// Severity violations are reported with.
    pub severity: Severity,
}

impl Default for NoMagicNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl NoMagicNumbers {
    /// Creates a new rule reporting at warning severity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Builds the rule from its `[rules.no-magic-numbers]` block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if the block asks for a
    /// severity the rule does not report at.
    pub fn from_config(config: Option<&RuleConfig>) -> Result<Self, ConfigError> {
        let mut rule = Self::new();
        let Some(config) = config else {
            return Ok(rule);
        };

        match config.severity {
            Some(Severity::Info) => {
                return Err(ConfigError::InvalidOption {
                    rule: NAME.to_string(),
                    message: "severity must be \"warning\" or \"error\"".to_string(),
                });
            }
            Some(severity) => rule.severity = severity,
            None => {}
        }

        for key in config.options.keys() {
            if !OPTIONS.contains(&key.as_str()) {
                warn!(rule = NAME, option = %key, "Ignoring unknown rule option");
            }
        }

        Ok(rule)
    }

    fn violation(&self, ctx: &FileContext, span: Span, message: String) -> Violation {
        Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::from_span(ctx.relative_path.clone(), span),
            message,
        )
    }
}

impl Rule for NoMagicNumbers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        DESCRIPTION.description
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn is_opt_in(&self) -> bool {
        DESCRIPTION.opt_in
    }

    fn documentation(&self) -> Option<&'static RuleDescription> {
        Some(&DESCRIPTION)
    }

    fn check(&self, ctx: &FileContext, tree: &SyntaxTree) -> Vec<Violation> {
        let mut visitor = LiteralVisitor::new(tree);
        visitor.walk();

        let directives = AllowDirectives::from_tree(ctx.content, tree);
        let mut violations = Vec::new();
        for span in visitor.into_violations() {
            let allow_check = directives.check(span.line, NAME);
            if allow_check.is_allowed() {
                if self.requires_allow_reason() && allow_check.reason().is_none() {
                    violations.push(
                        Violation::new(
                            CODE,
                            NAME,
                            Severity::Warning,
                            Location::from_span(ctx.relative_path.clone(), span),
                            format!("Allow directive for '{NAME}' is missing required reason"),
                        )
                        .with_suggestion(Suggestion::new(
                            "Add reason=\"...\" to explain why this exception is necessary",
                        )),
                    );
                }
                continue;
            }

            let text = ctx
                .content
                .get(span.offset..span.offset + span.length)
                .unwrap_or_default();
            violations.push(
                self.violation(
                    ctx,
                    span,
                    format!("Magic number `{text}` should be replaced by a named constant"),
                )
                .with_suggestion(Suggestion::new(
                    "Extract the value into a `let` constant with a descriptive name",
                )),
            );
        }

        debug!(
            file = %ctx.relative_path.display(),
            count = violations.len(),
            "no-magic-numbers finished"
        );
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use swift_lint_core::Example;
    use swift_lint_syntax::SwiftParser;

    fn check_with(rule: &NoMagicNumbers, code: &str) -> Vec<Violation> {
        let tree = SwiftParser::new().parse(code).expect("Failed to parse");
        let ctx = FileContext::for_source(Path::new("test.swift"), code);
        rule.check(&ctx, &tree)
    }

    fn check_code(code: &str) -> Vec<Violation> {
        check_with(&NoMagicNumbers::new(), code)
    }

    fn flagged(code: &str) -> Vec<String> {
        check_code(code)
            .iter()
            .map(|v| code[v.location.offset..v.location.offset + v.location.length].to_string())
            .collect()
    }

    #[test]
    fn test_initializer_is_allowed() {
        assert!(check_code("var foo = 123").is_empty());
        assert!(check_code("static let bar: Double = 0.123").is_empty());
    }

    #[test]
    fn test_zero_and_one_subscripts_are_allowed() {
        assert!(check_code("array[0] + array[1]").is_empty());
    }

    #[test]
    fn test_detects_call_argument() {
        let violations = check_code("foo(321)");
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.code, CODE);
        assert_eq!(v.rule, NAME);
        assert_eq!(v.severity, Severity::Warning);
        assert_eq!((v.location.line, v.location.column), (1, 5));
        assert_eq!(
            v.message,
            "Magic number `321` should be replaced by a named constant"
        );
        assert!(v.suggestion.is_some());
    }

    #[test]
    fn test_detects_in_source_order() {
        assert_eq!(flagged("let box = array[12 + 14]"), ["12", "14"]);
        assert_eq!(
            flagged("Color.primary.opacity(isAnimate ? 0.1 : 1.5)"),
            ["0.1", "1.5"]
        );
    }

    #[test]
    fn test_detects_nested_operand_of_initializer() {
        assert_eq!(flagged("let a = b + 2.0"), ["2.0"]);
    }

    #[test]
    fn test_detects_hex_float_operand() {
        assert_eq!(flagged("let h = 0x1p4 + 3"), ["0x1p4", "3"]);
        assert_eq!(flagged("scale(0x1.8p1, 0x1p0)"), ["0x1.8p1"]);
    }

    #[test]
    fn test_default_parameter_value_is_allowed() {
        assert!(check_code("func retry(times: Int = 3) {}").is_empty());
    }

    #[test]
    fn test_reports_on_correct_line() {
        let code = "func f() {\n    let x = 2\n    send(x * 60)\n}";
        let violations = check_code(code);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 3);
        assert_eq!(violations[0].location.column, 14);
    }

    #[test]
    fn test_check_is_idempotent() {
        let rule = NoMagicNumbers::new();
        let code = "let box = array[12 + 14]";
        let first = check_with(&rule, code);
        let second = check_with(&rule, code);
        assert_eq!(
            first.iter().map(|v| &v.location).collect::<Vec<_>>(),
            second.iter().map(|v| &v.location).collect::<Vec<_>>()
        );
    }

    fn assert_fixture(example: &Example) {
        let source = example.source();
        let offsets: Vec<usize> = check_code(&source)
            .iter()
            .map(|v| v.location.offset)
            .collect();
        assert_eq!(
            offsets,
            example.marker_offsets(),
            "unexpected findings for:\n{}",
            example.code
        );
    }

    #[test]
    fn test_non_triggering_examples() {
        for example in DESCRIPTION.non_triggering_examples {
            assert_fixture(example);
        }
    }

    #[test]
    fn test_triggering_examples() {
        for example in DESCRIPTION.triggering_examples {
            assert!(!example.marker_offsets().is_empty());
            assert_fixture(example);
        }
    }

    #[test]
    fn test_description_metadata() {
        let rule = NoMagicNumbers::new();
        assert!(rule.is_opt_in());
        assert_eq!(rule.description(), DESCRIPTION.description);
        let doc = rule.documentation().expect("documentation");
        assert_eq!(doc.identifier, "no-magic-numbers");
        assert_eq!(doc.kind, RuleKind::Idiomatic);
        assert_eq!(doc.non_triggering_examples.len(), 10);
        assert_eq!(doc.triggering_examples.len(), 6);
    }

    #[test]
    fn test_custom_severity() {
        let rule = NoMagicNumbers::new().severity(Severity::Error);
        let violations = check_with(&rule, "foo(321)");
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_from_config() {
        let config = RuleConfig {
            severity: Some(Severity::Error),
            ..RuleConfig::default()
        };
        let rule = NoMagicNumbers::from_config(Some(&config)).expect("valid config");
        assert_eq!(rule.severity, Severity::Error);

        let rule = NoMagicNumbers::from_config(None).expect("valid config");
        assert_eq!(rule.severity, Severity::Warning);
    }

    #[test]
    fn test_from_config_rejects_info() {
        let config = RuleConfig {
            severity: Some(Severity::Info),
            ..RuleConfig::default()
        };
        let err = NoMagicNumbers::from_config(Some(&config)).expect_err("info is rejected");
        assert!(matches!(err, ConfigError::InvalidOption { .. }));
    }

    #[test]
    fn test_allow_directive() {
        let code = "// swift-lint: allow(no-magic-numbers)\nfoo(321)\nbar(42) // swift-lint: allow(no-magic-numbers)";
        assert!(check_code(code).is_empty());
    }

    #[test]
    fn test_allow_directive_without_reason_at_error() {
        let rule = NoMagicNumbers::new().severity(Severity::Error);
        let code = "foo(321) // swift-lint: allow(no-magic-numbers)";
        let violations = check_with(&rule, code);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert!(violations[0].message.contains("missing required reason"));

        let code = "foo(321) // swift-lint: allow(no-magic-numbers) reason=\"protocol constant\"";
        assert!(check_with(&rule, code).is_empty());
    }

    #[test]
    fn test_directive_inside_string_does_not_allow() {
        let code = "let u = \"// swift-lint: allow(no-magic-numbers)\"; foo(42)";
        assert_eq!(flagged(code), ["42"]);
    }

    #[test]
    fn test_one_directive_covers_every_literal_on_its_lines() {
        let code = "// swift-lint: allow(no-magic-numbers) reason=\"grid\"\nlayout(3, 4, 5)\nlayout(6, 7)";
        assert_eq!(flagged(code), ["6", "7"]);
    }
}
