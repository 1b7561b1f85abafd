//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use std::collections::HashMap;
use std::path::Path;
use swift_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Pretty => print_pretty(result, root),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
    if result.files_skipped > 0 {
        println!("Skipped {} file(s) that could not be parsed", result.files_skipped);
    }
}

/// Renders each violation against its source with miette.
fn print_pretty(result: &LintResult, root: &Path) {
    let mut sources: HashMap<&Path, Option<String>> = HashMap::new();

    for violation in &result.violations {
        let file = violation.location.file.as_path();
        let source = sources
            .entry(file)
            .or_insert_with(|| std::fs::read_to_string(root.join(file)).ok());

        match source {
            Some(content) => {
                let report = diagnostic_report(violation, content.clone());
                println!("{report:?}");
            }
            None => println!("{violation}"),
        }
    }

    print_summary(result);
}

fn diagnostic_report(violation: &Violation, content: String) -> Report {
    let name = violation.location.file.display().to_string();
    Report::new(ViolationDiagnostic::from(violation))
        .with_source_code(NamedSource::new(name, content))
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{}", compact_line(violation));
    }
}

fn compact_line(violation: &Violation) -> String {
    violation.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use swift_lint_core::Location;

    fn violation() -> Violation {
        Violation::new(
            "SL001",
            "no-magic-numbers",
            Severity::Warning,
            Location::new(PathBuf::from("Sources/Main.swift"), 1, 5).with_span(4, 3),
            "Magic number `321` should be replaced by a named constant",
        )
    }

    #[test]
    fn compact_format() {
        assert_eq!(
            compact_line(&violation()),
            "Sources/Main.swift:1:5: warning [SL001] Magic number `321` should be replaced by a named constant"
        );
    }

    #[test]
    fn pretty_report_carries_source() {
        let report = diagnostic_report(&violation(), "foo(321)\n".to_string());
        assert!(report.source_code().is_some());
        assert!(report.to_string().starts_with("[SL001]"));
    }

    #[test]
    fn json_serializes_locations() {
        let mut result = LintResult::new();
        result.violations.push(violation());
        result.files_checked = 1;
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["violations"][0]["location"]["offset"], 4);
        assert_eq!(json["files_checked"], 1);
    }
}
