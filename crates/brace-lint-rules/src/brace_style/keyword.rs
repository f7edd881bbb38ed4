//! Adjacency between a closing brace and a continuation keyword
//! (`else`, `catch`, `finally`).

use brace_lint_core::TokenId;

use super::fix::{insert_newline_after, remove_newline_between};
use super::policy::BraceStyle;
use super::report::{Reporter, ViolationKind};

/// Checks the `}` that is immediately followed by a continuation keyword.
pub(crate) fn validate_curly_before_keyword(
    reporter: &mut Reporter<'_>,
    curly: TokenId,
    style: BraceStyle,
) {
    let source = reporter.source;
    let Some(keyword) = source.token_after(curly) else {
        return;
    };
    let same_line = source.on_same_line(curly, keyword);

    if style == BraceStyle::OneTrueBrace && !same_line {
        let fix = remove_newline_between(source, curly, keyword);
        reporter.report_token(ViolationKind::NextLineClose, curly, fix);
    }

    if style != BraceStyle::OneTrueBrace && same_line {
        let fix = insert_newline_after(source, curly);
        reporter.report_token(ViolationKind::SameLineClose, curly, Some(fix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brace_style::policy::StylePolicy;
    use brace_lint_core::{FileContext, Severity, SourceTree, TextEdit, Violation};
    use std::path::Path;

    fn check(code: &str, style: BraceStyle) -> Vec<Violation> {
        let source = SourceTree::parse(code).unwrap();
        let ctx = FileContext::new(Path::new("test.js"), code, Path::new("."));
        let mut reporter = Reporter::new(&ctx, &source, StylePolicy::default(), Severity::Error);
        let curly = source.tokens().iter().position(|t| t.is("}")).unwrap();
        validate_curly_before_keyword(&mut reporter, curly, style);
        reporter.finish()
    }

    #[test]
    fn one_true_brace_wants_cuddled_else() {
        assert!(check("if (a) {\n} else {\n}\n", BraceStyle::OneTrueBrace).is_empty());

        let v = check("if (a) {\n}\nelse {\n}\n", BraceStyle::OneTrueBrace);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind.as_deref(), Some("next-line-close"));
        assert_eq!(v[0].edit(), Some(&TextEdit::replace(10, 11, " ")));
    }

    #[test]
    fn stroustrup_wants_separate_lines() {
        assert!(check("if (a) {\n}\nelse {\n}\n", BraceStyle::Stroustrup).is_empty());

        let v = check("try {\n} catch (e) {\n}\n", BraceStyle::Stroustrup);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind.as_deref(), Some("same-line-close"));
        assert_eq!(v[0].edit(), Some(&TextEdit::insert_at(7, "\n")));
    }

    #[test]
    fn allman_behaves_like_stroustrup() {
        let v = check("try {\n} finally {\n}\n", BraceStyle::Allman);
        assert_eq!(v[0].kind.as_deref(), Some("same-line-close"));
    }

    #[test]
    fn comment_before_keyword_withholds_fix() {
        let v = check("if (a) {\n} /* no */\nelse {\n}\n", BraceStyle::OneTrueBrace);
        assert_eq!(v.len(), 1);
        assert!(v[0].edit().is_none());
    }
}
