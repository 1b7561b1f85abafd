//! # swift-lint-core
//!
//! Core framework for linting Swift sources.
//!
//! This crate provides the foundational traits and types for building
//! Swift lint rules. It includes:
//!
//! - [`Rule`] trait for per-file rules over a parsed [`SyntaxTree`]
//! - [`RuleDescription`] for static rule metadata and example corpora
//! - [`Analyzer`] for discovering files and dispatching rules in parallel
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use swift_lint_core::{Analyzer, Config};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./Sources")
//!     .config(Config::from_file("swift-lint.toml".as_ref())?)
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod description;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use description::{Example, RuleDescription, RuleKind, VIOLATION_MARKER};
pub use rule::{Rule, RuleBox};
pub use swift_lint_syntax::{NodeId, NodeKind, Span, SyntaxNode, SyntaxTree};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
pub use utils::allowance::{AllowCheck, AllowDirectives};
