//! # brace-lint-rules
//!
//! Built-in lint rules for brace-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | BL001 | `brace-style` | Enforces consistent brace placement for blocks |
//!
//! ## Usage
//!
//! ```ignore
//! use brace_lint_core::Analyzer;
//! use brace_lint_rules::{BraceStyle, BraceStyleRule};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(BraceStyleRule::new().style(BraceStyle::Stroustrup))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod brace_style;
mod presets;

pub use brace_style::{BraceStyle, BraceStyleRule, StylePolicy, ViolationKind};
pub use presets::{all_rules, recommended_rules, rules_from_config, strict_rules, Preset};

/// Re-export core types for convenience.
pub use brace_lint_core::{Rule, Severity, Violation};
