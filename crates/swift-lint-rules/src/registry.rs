//! Lookup of built-in rules by name and from configuration.

use crate::no_magic_numbers::{self, NoMagicNumbers};
use swift_lint_core::{Config, ConfigError, RuleBox};
use tracing::warn;

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(NoMagicNumbers::new())]
}

/// Finds a built-in rule by name (`no-magic-numbers`) or code (`SL001`).
#[must_use]
pub fn rule_by_name(name_or_code: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name() == name_or_code || rule.code().eq_ignore_ascii_case(name_or_code))
}

/// Builds every built-in rule from its configuration block.
///
/// Enablement is left to the analyzer; this only applies rule options.
///
/// # Errors
///
/// Returns an error if a rule rejects its configuration.
pub fn configured_rules(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    for name in config.rules.keys() {
        if rule_by_name(name).is_none() {
            warn!(rule = %name, "Configuration for unknown rule is ignored");
        }
    }

    Ok(vec![Box::new(NoMagicNumbers::from_config(
        config.rule(no_magic_numbers::NAME),
    )?)])
}
