//! Rule traits for defining lint rules.

use crate::context::FileContext;
use crate::description::RuleDescription;
use crate::types::{Severity, Violation};
use swift_lint_syntax::SyntaxTree;

/// A per-file lint rule over a parsed Swift [`SyntaxTree`].
///
/// Rules are shared between the threads analysing different files, so they
/// must not keep per-file state on `self`. Build a visitor inside
/// [`Rule::check`] instead.
///
/// # Example
///
/// ```ignore
/// use swift_lint_core::{FileContext, Rule, Severity, SyntaxTree, Violation};
///
/// pub struct NoEmptyFiles;
///
/// impl Rule for NoEmptyFiles {
///     fn name(&self) -> &'static str { "no-empty-files" }
///     fn code(&self) -> &'static str { "SL100" }
///
///     fn check(&self, ctx: &FileContext, tree: &SyntaxTree) -> Vec<Violation> {
///         let mut visitor = EmptyFileVisitor::new(ctx);
///         visitor.visit(tree);
///         visitor.violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-magic-numbers").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "SL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the severity violations from this rule are reported with.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Whether the rule only runs when configuration enables it.
    fn is_opt_in(&self) -> bool {
        false
    }

    /// Static documentation, including example corpora, if the rule has any.
    fn documentation(&self) -> Option<&'static RuleDescription> {
        None
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `tree` - The parsed syntax tree of the file
    ///
    /// # Returns
    ///
    /// Violations in the order they appear in the file.
    fn check(&self, ctx: &FileContext, tree: &SyntaxTree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
