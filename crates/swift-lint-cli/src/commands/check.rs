//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use swift_lint_core::{Analyzer, Config, RuleBox};
use swift_lint_rules::{configured_rules, rule_by_name};

use crate::config_resolver::ConfigLookup;
use crate::OutputFormat;

/// Runs the check command.
///
/// Returns `true` if a violation reached the configured failure threshold.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<&str>,
    exclude: Vec<String>,
    lookup: &ConfigLookup,
) -> Result<bool> {
    let (mut config, _) = lookup.load(path)?;
    let rules = select_rules(&mut config, rules_filter)?;
    let fail_threshold = config.fail_threshold();

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .excludes(exclude);
    for rule in rules {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} rules",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    Ok(result.has_violations_at(fail_threshold))
}

/// Builds the configured rules, narrowed to `filter` when given.
///
/// Rules named in the filter are enabled in `config`, so opt-in rules can be
/// run without editing the configuration file.
fn select_rules(config: &mut Config, filter: Option<&str>) -> Result<Vec<RuleBox>> {
    let Some(filter) = filter else {
        return configured_rules(config).context("Invalid rule configuration");
    };

    let mut wanted = Vec::new();
    for name in filter.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match rule_by_name(name) {
            Some(rule) => {
                config.enable_rule(rule.name());
                wanted.push(rule.name());
            }
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    let rules = configured_rules(config).context("Invalid rule configuration")?;
    Ok(rules
        .into_iter()
        .filter(|rule| wanted.contains(&rule.name()))
        .collect())
}
