//! Rule presets for common configurations.

use crate::brace_style::{self, BraceStyle, BraceStyleRule, StylePolicy};
use brace_lint_core::{Config, ConfigError, RuleBox};

/// Preset configurations for brace-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 1TBS, single-line blocks allowed.
    Recommended,
    /// 1TBS, every block broken over lines.
    Strict,
}

impl Preset {
    /// Looks up a preset by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Returns the configuration name of this preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
        }
    }

    /// Returns the configured rule for this preset.
    #[must_use]
    pub fn brace_style(self) -> BraceStyleRule {
        match self {
            Self::Recommended => {
                BraceStyleRule::new().with_policy(StylePolicy::new(BraceStyle::OneTrueBrace, true))
            }
            Self::Strict => {
                BraceStyleRule::new().with_policy(StylePolicy::new(BraceStyle::OneTrueBrace, false))
            }
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        vec![Box::new(self.brace_style())]
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `brace-style` (BL001) - 1TBS with `allow_single_line`
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    Preset::Recommended.rules()
}

/// Returns the strict set of rules.
///
/// Includes:
/// - `brace-style` (BL001) - 1TBS, no single-line exemption
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    Preset::Strict.rules()
}

/// Returns all available rules with their default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(BraceStyleRule::new())]
}

/// Builds the rule set described by a configuration file.
///
/// The preset (if any) supplies the starting settings, and each rule's
/// `[rules.<name>]` block is applied on top.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for an unknown preset name or an
/// unsupported rule option.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    let base = match config.preset.as_deref() {
        Some(name) => Preset::from_name(name)
            .ok_or_else(|| ConfigError::Invalid {
                key: "preset".to_string(),
                message: format!("unknown preset `{name}`"),
            })?
            .brace_style(),
        None => BraceStyleRule::new(),
    };

    let rule = match config.rule(brace_style::NAME) {
        Some(block) => base.configure(block)?,
        None => base,
    };

    Ok(vec![Box::new(rule)])
}
