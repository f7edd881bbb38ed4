//! Check command implementation.

use anyhow::{Context, Result};
use brace_lint_core::{Analyzer, Config};
use brace_lint_rules::{brace_style, rules_from_config};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::{OutputFormat, StyleArg};

/// Command-line options for `check`.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Rewrite files with available fixes.
    pub fix: bool,
    /// Style override.
    pub style: Option<StyleArg>,
    /// Force the single-line exemption on.
    pub allow_single_line: bool,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
}

/// Runs the check command.
pub fn run(path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let mut config = load_config(source)?;
    apply_overrides(&mut config, options);

    let rules = rules_from_config(&config).context("Invalid rule configuration")?;

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .excludes(options.exclude.iter().cloned())
        .fix(options.fix);

    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format, analyzer.root())?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Folds command-line style flags into the rule's config block.
fn apply_overrides(config: &mut Config, options: &CheckOptions) {
    if options.style.is_none() && !options.allow_single_line {
        return;
    }

    let block = config
        .rules
        .entry(brace_style::NAME.to_string())
        .or_default();

    if let Some(style) = options.style {
        block.options.insert(
            "style".to_string(),
            toml::Value::String(style.config_name().to_string()),
        );
    }
    if options.allow_single_line {
        block
            .options
            .insert("allow_single_line".to_string(), toml::Value::Boolean(true));
    }
}
