//! # swift-lint-rules
//!
//! Built-in lint rules for swift-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Kind | Opt-in | Description |
//! |------|------|------|--------|-------------|
//! | SL001 | `no-magic-numbers` | idiomatic | yes | Magic numbers should be replaced by named constants |
//!
//! ## Usage
//!
//! ```ignore
//! use swift_lint_core::{Analyzer, Config};
//! use swift_lint_rules::configured_rules;
//!
//! let config = Config::from_file("swift-lint.toml".as_ref())?;
//! let mut builder = Analyzer::builder().root("./Sources").config(config.clone());
//! for rule in configured_rules(&config)? {
//!     builder = builder.rule_box(rule);
//! }
//! let result = builder.build()?.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod no_magic_numbers;
mod registry;

pub use no_magic_numbers::NoMagicNumbers;
pub use registry::{all_rules, configured_rules, rule_by_name};

/// Re-export core types for convenience.
pub use swift_lint_core::{Rule, Severity, Violation};
