//! Rule enforcing a consistent brace placement style.
//!
//! # Rationale
//!
//! Mixed brace placement makes control flow harder to scan. This rule holds
//! every block, class body and switch body to one convention, and treats
//! `else if` chains specially: a plain `if`/`else` stays in 1TBS form while a
//! chain of `else if` branches is laid out Stroustrup style, one `}` per line.
//!
//! # Checked Constructs
//!
//! - Braced blocks that are not bare statements in a statement list
//! - Class bodies
//! - Switch bodies
//! - `}` followed by `else`, `catch` or `finally`
//!
//! # Configuration
//!
//! - `style`: `"1tbs"` (default), `"stroustrup"` or `"allman"`
//! - `allow_single_line`: exempt blocks whose braces share a line (default: false)

mod chain_break;
mod complexity;
mod curly_pair;
mod fix;
mod keyword;
mod policy;
mod report;

pub use policy::{BraceStyle, StylePolicy};
pub use report::ViolationKind;

use brace_lint_core::{
    ConfigError, FileContext, Node, Rule, RuleConfig, Severity, SourceTree, Violation,
};
use tracing::debug;

use chain_break::validate_chain_breaks;
use complexity::{block_consequence, effective_style, is_complex};
use curly_pair::validate_curly_pair;
use keyword::validate_curly_before_keyword;
use report::Reporter;

/// Rule code for brace-style.
pub const CODE: &str = "BL001";

/// Rule name for brace-style.
pub const NAME: &str = "brace-style";

/// Parents whose direct block children are bare statements and not checked.
const STATEMENT_LISTS: &[&str] = &["program", "statement_block", "switch_case", "switch_default"];

/// Enforces brace placement for blocks, class bodies and switch bodies.
#[derive(Debug, Clone)]
pub struct BraceStyleRule {
    policy: StylePolicy,
    severity: Severity,
}

impl Default for BraceStyleRule {
    fn default() -> Self {
        Self::new()
    }
}

impl BraceStyleRule {
    /// Creates a new rule with 1TBS and no single-line exemption.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: StylePolicy::default(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from a `[rules.brace-style]` block, starting from
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an option has an unsupported value.
    pub fn from_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        Self::new().configure(config)
    }

    /// Applies a `[rules.brace-style]` block on top of the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an option has an unsupported value.
    pub fn configure(mut self, config: &RuleConfig) -> Result<Self, ConfigError> {
        self.policy = self.policy.merge(config)?;
        if let Some(severity) = config.severity {
            self.severity = severity;
        }
        Ok(self)
    }

    /// Sets the configured style.
    #[must_use]
    pub fn style(mut self, style: BraceStyle) -> Self {
        self.policy.style = style;
        self
    }

    /// Sets whether single-line blocks are exempt.
    #[must_use]
    pub fn allow_single_line(mut self, allow: bool) -> Self {
        self.policy.allow_single_line = allow;
        self
    }

    /// Replaces the whole policy.
    #[must_use]
    pub fn with_policy(mut self, policy: StylePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the active policy.
    #[must_use]
    pub fn policy(&self) -> StylePolicy {
        self.policy
    }
}

impl Rule for BraceStyleRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces consistent brace placement for blocks"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn check(&self, ctx: &FileContext, source: &SourceTree) -> Vec<Violation> {
        let mut visitor = BraceVisitor {
            reporter: Reporter::new(ctx, source, self.policy, self.severity),
        };
        visitor.visit(source.root(), self.policy.style);
        visitor.reporter.finish()
    }
}

struct BraceVisitor<'a> {
    reporter: Reporter<'a>,
}

impl BraceVisitor<'_> {
    /// Visits `node`, checking it under `style`, then its children.
    fn visit(&mut self, node: Node<'_>, style: BraceStyle) {
        let configured = self.reporter.policy.style;
        let mut child_style = configured;

        match node.kind() {
            "statement_block" => {
                let nested = node
                    .parent()
                    .is_some_and(|p| STATEMENT_LISTS.contains(&p.kind()));
                if !nested {
                    self.check_node_braces(node, style);
                }
            }
            "class_body" => self.check_node_braces(node, style),
            "switch_statement" => self.check_switch(node, style),
            "if_statement" => return self.visit_if(node),
            "else_clause" => child_style = style,
            "try_statement" => self.check_try(node, style),
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, child_style);
        }
    }

    fn visit_if(&mut self, node: Node<'_>) {
        let source = self.reporter.source;
        let complex = is_complex(source, node);
        let style = effective_style(source, node);
        debug!(
            "Conditional at line {} is {} ({style})",
            node.start_position().row + 1,
            if complex { "complex" } else { "simple" }
        );

        let chain_ok = !complex || validate_chain_breaks(&mut self.reporter, node);
        if chain_ok && node.child_by_field_name("alternative").is_some() {
            if let Some(close) = block_consequence(node).and_then(|b| source.last_token(b)) {
                validate_curly_before_keyword(&mut self.reporter, close, style);
            }
        }

        let configured = self.reporter.policy.style;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            let child_style = match child.kind() {
                "statement_block" | "else_clause" => style,
                _ => configured,
            };
            self.visit(child, child_style);
        }
    }

    fn check_node_braces(&mut self, node: Node<'_>, style: BraceStyle) {
        let source = self.reporter.source;
        if let (Some(open), Some(close)) = (source.first_token(node), source.last_token(node)) {
            validate_curly_pair(&mut self.reporter, open, close, style);
        }
    }

    /// The opening brace is the token before the first case, or before the
    /// closing brace when there are no cases.
    fn check_switch(&mut self, node: Node<'_>, style: BraceStyle) {
        let source = self.reporter.source;
        let Some(close) = source.last_token(node) else {
            return;
        };
        let first_case = node.child_by_field_name("body").and_then(|body| {
            let mut cursor = body.walk();
            let found = body
                .named_children(&mut cursor)
                .find(|c| matches!(c.kind(), "switch_case" | "switch_default"));
            found
        });
        let open = match first_case {
            Some(case) => source.token_before_node(case),
            None => source.token_before(close),
        };
        if let Some(open) = open {
            validate_curly_pair(&mut self.reporter, open, close, style);
        }
    }

    fn check_try(&mut self, node: Node<'_>, style: BraceStyle) {
        let source = self.reporter.source;
        let handler = node.child_by_field_name("handler");
        let finalizer = node.child_by_field_name("finalizer");

        if let Some(close) = node
            .child_by_field_name("body")
            .and_then(|b| source.last_token(b))
        {
            validate_curly_before_keyword(&mut self.reporter, close, style);
        }

        if finalizer.is_some() {
            if let Some(close) = handler
                .and_then(|h| h.child_by_field_name("body"))
                .and_then(|b| source.last_token(b))
            {
                validate_curly_before_keyword(&mut self.reporter, close, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check_with(rule: &BraceStyleRule, code: &str) -> Vec<Violation> {
        let source = SourceTree::parse(code).unwrap();
        let ctx = FileContext::new(Path::new("test.js"), code, Path::new("."));
        rule.check(&ctx, &source)
    }

    fn kinds(violations: &[Violation]) -> Vec<&str> {
        violations
            .iter()
            .filter_map(|v| v.kind.as_deref())
            .collect()
    }

    #[test]
    fn rule_metadata() {
        let rule = BraceStyleRule::new();
        assert_eq!(rule.name(), "brace-style");
        assert_eq!(rule.code(), "BL001");
        assert!(rule.is_fixable());
        assert_eq!(rule.policy(), StylePolicy::default());
    }

    #[test]
    fn function_body_on_next_line() {
        let v = check_with(&BraceStyleRule::new(), "function f()\n{\n  return 1;\n}\n");
        assert_eq!(kinds(&v), ["next-line-open"]);
        assert_eq!(v[0].location.line, 2);
    }

    #[test]
    fn bare_nested_block_is_not_checked() {
        let v = check_with(&BraceStyleRule::new(), "{ a(); }\nfunction f() {\n  { b(); }\n}\n");
        assert!(v.is_empty());
    }

    #[test]
    fn class_body_is_checked() {
        let v = check_with(&BraceStyleRule::new(), "class A\n{\n  m() {\n  }\n}\n");
        assert_eq!(kinds(&v), ["next-line-open"]);
    }

    #[test]
    fn switch_body_is_checked() {
        let v = check_with(
            &BraceStyleRule::new().style(BraceStyle::Allman),
            "switch (x) {\n  case 1:\n    break;\n}\n",
        );
        assert_eq!(kinds(&v), ["same-line-open"]);
    }

    #[test]
    fn empty_switch_uses_closing_neighbour() {
        let v = check_with(&BraceStyleRule::new(), "switch (x)\n{\n}\n");
        assert_eq!(kinds(&v), ["next-line-open"]);
    }

    #[test]
    fn try_catch_finally_keywords() {
        let code = "try {\n  a();\n}\ncatch (e) {\n  b();\n}\nfinally {\n  c();\n}\n";
        let v = check_with(&BraceStyleRule::new(), code);
        assert_eq!(kinds(&v), ["next-line-close", "next-line-close"]);

        let v = check_with(&BraceStyleRule::new().style(BraceStyle::Stroustrup), code);
        assert!(v.is_empty());
    }

    #[test]
    fn simple_if_else_uses_1tbs_under_any_style() {
        let code = "if (a) {\n  b();\n}\nelse {\n  c();\n}\n";
        let v = check_with(&BraceStyleRule::new().style(BraceStyle::Stroustrup), code);
        assert_eq!(kinds(&v), ["next-line-close"]);
    }

    #[test]
    fn property_named_else_keeps_if_simple() {
        let code = "x.else\nif (a) {\n  b();\n} else {\n  c();\n}\n";
        assert!(check_with(&BraceStyleRule::new(), code).is_empty());
    }

    #[test]
    fn stroustrup_else_if_chain_passes() {
        let code = "if (a) {\n  b();\n}\nelse if (c) {\n  d();\n}\nelse {\n  e();\n}\n";
        assert!(check_with(&BraceStyleRule::new(), code).is_empty());
    }

    #[test]
    fn allow_single_line_exempts_blocks() {
        let code = "function f() { return 1; }\n";
        assert_eq!(
            kinds(&check_with(&BraceStyleRule::new(), code)),
            ["block-same-line", "single-line-close"]
        );
        assert!(check_with(&BraceStyleRule::new().allow_single_line(true), code).is_empty());
    }

    #[test]
    fn configure_reads_rule_block() {
        let config = brace_lint_core::Config::parse(
            "[rules.brace-style]\nstyle = \"allman\"\nseverity = \"warning\"\n",
        )
        .unwrap();
        let rule = BraceStyleRule::from_config(config.rule(NAME).unwrap()).unwrap();
        assert_eq!(rule.policy().style, BraceStyle::Allman);
        assert_eq!(rule.default_severity(), Severity::Warning);
    }
}
