//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::source::SourceTree;
use crate::types::{Severity, Violation};

/// A per-file lint rule based on token and syntax tree analysis.
///
/// Implement this trait to create rules that analyze individual source files.
/// Rules receive the parsed [`SourceTree`] and walk its nodes, consulting the
/// token stream for adjacency and line positions.
///
/// # Example
///
/// ```ignore
/// use brace_lint_core::{FileContext, Rule, Severity, SourceTree, Violation};
///
/// pub struct NoEmptyFile;
///
/// impl Rule for NoEmptyFile {
///     fn name(&self) -> &'static str { "no-empty-file" }
///     fn code(&self) -> &'static str { "BL900" }
///
///     fn check(&self, ctx: &FileContext, source: &SourceTree) -> Vec<Violation> {
///         if source.tokens().is_empty() { /* ... */ }
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "brace-style").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "BL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether violations of this rule may carry automatic fixes.
    fn is_fixable(&self) -> bool {
        false
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `source` - The parsed tokens and syntax tree of the file
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(&self, ctx: &FileContext, source: &SourceTree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext, source: &SourceTree) -> Vec<Violation> {
            source
                .tokens()
                .iter()
                .filter(|t| t.is("{"))
                .map(|t| {
                    Violation::new(
                        self.code(),
                        self.name(),
                        self.default_severity(),
                        Location::new(ctx.relative_path.clone(), t.line, t.column),
                        "Test violation",
                    )
                })
                .collect()
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(!rule.is_fixable());
    }

    #[test]
    fn test_rule_sees_tokens() {
        let content = "function f() {\n}\n";
        let source = SourceTree::parse(content).unwrap();
        let ctx = FileContext::new(Path::new("a.js"), content, Path::new("."));
        let violations = TestRule.check(&ctx, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 1);
    }
}
