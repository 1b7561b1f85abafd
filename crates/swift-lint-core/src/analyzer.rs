//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use swift_lint_syntax::SwiftParser;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a Swift source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Directory walk error.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Worker pool could not be created.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a per-file rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-file rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or an
    /// exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        for pattern in &exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            config,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Files are analysed in parallel; every file gets its own parse tree and
/// every rule builds its own visitor per file.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the registered rules that configuration enables.
    #[must_use]
    pub fn enabled_rules(&self) -> Vec<&dyn Rule> {
        self.rules
            .iter()
            .map(|rule| rule.as_ref())
            .filter(|rule| {
                let enabled = self.config.is_rule_enabled(rule.name(), rule.is_opt_in());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect()
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails or a file cannot be read.
    /// Files that cannot be parsed are counted as skipped.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {}", self.root.display());

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let rules = self.enabled_rules();
        if rules.is_empty() {
            warn!("No rules enabled; opt-in rules must be enabled in configuration");
        }

        let outcomes: Vec<Result<Vec<Violation>, AnalyzerError>> = self.in_pool(|| {
            files
                .par_iter()
                .map(|path| self.analyze_file(path, &rules))
                .collect()
        })?;

        let mut result = LintResult::new();
        for outcome in outcomes {
            match outcome {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    result.files_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Runs `job` on a dedicated pool when parallelism is configured.
    fn in_pool<T, F>(&self, job: F) -> Result<T, AnalyzerError>
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match self.config.analyzer.parallelism {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                Ok(pool.install(job))
            }
            None => Ok(job()),
        }
    }

    /// Analyzes a single file on disk.
    fn analyze_file(
        &self,
        path: &Path,
        rules: &[&dyn Rule],
    ) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.check_source(path, &content, rules)
    }

    /// Analyzes in-memory source as if it were the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed.
    pub fn analyze_source(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Vec<Violation>, AnalyzerError> {
        self.check_source(path, content, &self.enabled_rules())
    }

    fn check_source(
        &self,
        path: &Path,
        content: &str,
        rules: &[&dyn Rule],
    ) -> Result<Vec<Violation>, AnalyzerError> {
        let tree = SwiftParser::new()
            .parse(content)
            .map_err(|e| AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let ctx = FileContext::new(path, content, &self.root);
        let mut violations = Vec::new();

        for rule in rules {
            let rule_violations = rule.check(&ctx, &tree);
            let rule_violations = self.apply_severity_override(*rule, rule_violations);
            violations.extend(rule_violations);
        }

        Ok(violations)
    }

    /// Applies severity overrides from configuration.
    ///
    /// Only violations reported at the rule's own severity are rewritten;
    /// anything a rule deliberately reports at another level keeps it.
    fn apply_severity_override(
        &self,
        rule: &dyn Rule,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule.name()) {
            let own = rule.default_severity();
            for v in violations.iter_mut().filter(|v| v.severity == own) {
                v.severity = severity;
            }
        }
        violations
    }

    /// Discovers all Swift source files to analyze, in path order.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let respect_gitignore = self.config.analyzer.respect_gitignore;
        let walker = ignore::WalkBuilder::new(&self.root)
            .git_ignore(respect_gitignore)
            .git_exclude(respect_gitignore)
            .git_global(respect_gitignore)
            .require_git(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if !entry.file_type().is_some_and(|t| t.is_file())
                || !path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| SwiftParser::EXTENSIONS.contains(&e))
            {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/Pods/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty()
                && normalized_pattern != "/"
                && path_str.contains(&normalized_pattern)
            {
                return true;
            }
        }

        false
    }
}
