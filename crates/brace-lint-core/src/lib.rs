//! # brace-lint-core
//!
//! Core framework for brace-style linting of JavaScript sources.
//!
//! This crate provides the foundational traits and types for building
//! token-aware style rules. It includes:
//!
//! - [`SourceTree`] for token and syntax tree access, backed by Tree-sitter
//! - [`Rule`] trait for per-file rules
//! - [`Analyzer`] for orchestrating lint execution and fix passes
//! - [`Violation`] and [`TextEdit`] for representing findings and their fixes
//!
//! ## Example
//!
//! ```ignore
//! use brace_lint_core::{Analyzer, Rule, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .fix(true)
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub mod fixer;
pub mod source;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, FixedSource};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use fixer::{apply_fixes, FixOutcome};
pub use rule::{Rule, RuleBox};
pub use source::{Node, SourceError, SourceTree, Token, TokenId};
pub use types::{
    Label, LintResult, Location, Severity, Suggestion, TextEdit, Violation, ViolationDiagnostic,
};
