//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# brace-lint configuration

# Starting point for rule settings: "recommended" or "strict"
preset = "recommended"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/*.min.js",
]

# File extensions to analyze
extensions = ["js", "mjs", "cjs", "jsx"]

# Respect .gitignore files
respect_gitignore = true

[rules.brace-style]
enabled = true
# severity = "warning"  # Override default severity
# style = "1tbs"        # 1tbs | stroustrup | allman
# allow_single_line = true
"#;

/// Name of the file written by `init`.
pub const CONFIG_FILE: &str = "brace-lint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to pick a brace style");
    println!("  2. Run: brace-lint check");
    println!("  3. Run: brace-lint check --fix");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
