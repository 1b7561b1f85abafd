//! Static rule metadata and example corpora.

use std::fmt;

/// Marks the expected position of a violation inside a triggering example.
pub const VIOLATION_MARKER: char = '↓';

/// Category a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Likely bugs.
    Lint,
    /// Language idioms.
    Idiomatic,
    /// Formatting and naming.
    Style,
    /// Size and complexity limits.
    Metrics,
    /// Runtime cost.
    Performance,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lint => write!(f, "lint"),
            Self::Idiomatic => write!(f, "idiomatic"),
            Self::Style => write!(f, "style"),
            Self::Metrics => write!(f, "metrics"),
            Self::Performance => write!(f, "performance"),
        }
    }
}

/// A snippet of Swift source used for documentation and as a fixture.
///
/// In triggering examples every [`VIOLATION_MARKER`] sits directly before
/// the character a violation is expected at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// Source code, possibly containing markers.
    pub code: &'static str,
}

impl Example {
    /// Creates an example.
    #[must_use]
    pub const fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Source code with all markers removed.
    #[must_use]
    pub fn source(&self) -> String {
        self.code.replace(VIOLATION_MARKER, "")
    }

    /// Byte offsets of the markers within [`Example::source`].
    #[must_use]
    pub fn marker_offsets(&self) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut removed = 0;
        for (i, c) in self.code.char_indices() {
            if c == VIOLATION_MARKER {
                offsets.push(i - removed);
                removed += c.len_utf8();
            }
        }
        offsets
    }
}

/// Static description of a rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleDescription {
    /// Kebab-case identifier used in configuration.
    pub identifier: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Rule category.
    pub kind: RuleKind,
    /// Whether the rule must be enabled explicitly.
    pub opt_in: bool,
    /// Snippets the rule must accept.
    pub non_triggering_examples: &'static [Example],
    /// Snippets the rule must flag, with markers.
    pub triggering_examples: &'static [Example],
}

impl RuleDescription {
    /// Renders the description as Markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

/// Markdown rendering.
impl fmt::Display for RuleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}\n", self.name)?;
        writeln!(f, "{}\n", self.description)?;
        writeln!(f, "* **Identifier:** `{}`", self.identifier)?;
        writeln!(f, "* **Kind:** {}", self.kind)?;
        writeln!(
            f,
            "* **Enabled by default:** {}",
            if self.opt_in { "No" } else { "Yes" }
        )?;

        let sections = [
            ("Non Triggering Examples", self.non_triggering_examples),
            ("Triggering Examples", self.triggering_examples),
        ];
        for (title, examples) in sections {
            writeln!(f, "\n## {title}")?;
            for example in examples {
                writeln!(f, "\n```swift\n{}\n```", example.code)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NON_TRIGGERING: &[Example] = &[Example::new("var foo = 123")];
    static TRIGGERING: &[Example] = &[Example::new("foo(↓321)")];

    fn description() -> RuleDescription {
        RuleDescription {
            identifier: "test-rule",
            name: "Test Rule",
            description: "A test rule",
            kind: RuleKind::Idiomatic,
            opt_in: true,
            non_triggering_examples: NON_TRIGGERING,
            triggering_examples: TRIGGERING,
        }
    }

    #[test]
    fn marker_offsets_account_for_removed_markers() {
        let example = Example::new("array[↓12 + ↓14]");
        assert_eq!(example.source(), "array[12 + 14]");
        assert_eq!(example.marker_offsets(), vec![6, 11]);
    }

    #[test]
    fn example_without_markers() {
        let example = Example::new("var foo = 123");
        assert_eq!(example.source(), "var foo = 123");
        assert!(example.marker_offsets().is_empty());
    }

    #[test]
    fn markdown_lists_metadata_and_examples() {
        let md = description().to_markdown();
        assert!(md.starts_with("# Test Rule\n"));
        assert!(md.contains("* **Identifier:** `test-rule`"));
        assert!(md.contains("* **Kind:** idiomatic"));
        assert!(md.contains("* **Enabled by default:** No"));
        assert!(md.contains("```swift\nfoo(↓321)\n```"));
    }

    #[test]
    fn markdown_writes_into_any_formatter() {
        let mut out = String::new();
        fmt::Write::write_fmt(&mut out, format_args!("{}", description()))
            .expect("writing to a String succeeds");
        assert_eq!(out, description().to_markdown());
        let non_triggering = out.find("## Non Triggering Examples").expect("section");
        let triggering = out.find("## Triggering Examples").expect("section");
        assert!(non_triggering < triggering);
        assert!(out.ends_with("```\n"));
    }
}
