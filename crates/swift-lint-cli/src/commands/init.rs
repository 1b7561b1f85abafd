//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# swift-lint configuration

# Exit with a failure status at this severity or above (default: "error")
# fail_on = "warning"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./Sources"

# Glob patterns to exclude from analysis
exclude = [
    "**/.build/**",
    "**/Pods/**",
    "**/Carthage/**",
    "**/DerivedData/**",
]

# Respect .gitignore files
respect_gitignore = true

# Number of files analyzed in parallel (default: one per CPU)
# parallelism = 4

# Rule configurations
# Opt-in rules must be enabled explicitly

[rules.no-magic-numbers]
enabled = true
# severity = "error"  # "warning" (default) or "error"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("swift-lint.toml"), force)?;

    println!("Created swift-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit swift-lint.toml to configure rules");
    println!("  2. Run: swift-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
