//! Rules command implementation.

use anyhow::{bail, Result};
use swift_lint_rules::{all_rules, rule_by_name, Rule};

/// Runs the rules command.
///
/// With a rule name, prints that rule's documentation. With `verbose`,
/// prints the documentation of every rule.
pub fn run(rule: Option<&str>, verbose: bool) -> Result<()> {
    if let Some(name) = rule {
        let Some(rule) = rule_by_name(name) else {
            bail!("Unknown rule: {name}");
        };
        println!("{}", documentation(rule.as_ref()));
        return Ok(());
    }

    if verbose {
        for rule in all_rules() {
            println!("{}", documentation(rule.as_ref()));
        }
        return Ok(());
    }

    println!("Available rules:\n");
    println!("{:<10} {:<25} {:<8} Description", "Code", "Name", "Opt-in");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {:<8} {}",
            rule.code(),
            rule.name(),
            if rule.is_opt_in() { "yes" } else { "no" },
            rule.description()
        );
    }

    println!("\nOpt-in rules run only when enabled in swift-lint.toml or named with --rules:");
    println!("  swift-lint check --rules no-magic-numbers");
    println!("  swift-lint check --rules SL001");

    Ok(())
}

fn documentation(rule: &dyn Rule) -> String {
    rule.documentation().map_or_else(
        || format!("# {}\n\n{}\n", rule.name(), rule.description()),
        |doc| doc.to_markdown(),
    )
}
