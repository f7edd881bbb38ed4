//! Brace conventions and the per-session style policy.

use brace_lint_core::{ConfigError, RuleConfig};
use serde::{Deserialize, Serialize};

/// A brace-placement convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BraceStyle {
    /// Opening brace on the controlling line; closing brace shares a line
    /// with a following `else`/`catch`/`finally`.
    #[default]
    #[serde(rename = "1tbs", alias = "one-true-brace")]
    OneTrueBrace,
    /// Opening brace on the controlling line; closing brace and a following
    /// keyword on separate lines.
    #[serde(rename = "stroustrup")]
    Stroustrup,
    /// Opening brace always on its own line.
    #[serde(rename = "allman")]
    Allman,
}

impl BraceStyle {
    /// Returns the configuration name of this style.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneTrueBrace => "1tbs",
            Self::Stroustrup => "stroustrup",
            Self::Allman => "allman",
        }
    }
}

impl std::fmt::Display for BraceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured style for one check session.
///
/// Immutable once built; the per-node effective style is derived from it and
/// passed down explicitly during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StylePolicy {
    /// Style applied to blocks outside conditional chains.
    pub style: BraceStyle,
    /// Exempt blocks whose braces share one line.
    pub allow_single_line: bool,
}

impl StylePolicy {
    /// Creates a policy from its parts.
    #[must_use]
    pub fn new(style: BraceStyle, allow_single_line: bool) -> Self {
        Self {
            style,
            allow_single_line,
        }
    }

    /// Overrides fields present in a `[rules.brace-style]` block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown `style` value or a
    /// non-boolean `allow_single_line`.
    pub fn merge(mut self, config: &RuleConfig) -> Result<Self, ConfigError> {
        if let Some(style) = config.get_option::<BraceStyle>("style")? {
            self.style = style;
        }
        if let Some(allow) = config.get_option::<bool>("allow_single_line")? {
            self.allow_single_line = allow;
        }
        Ok(self)
    }
}
