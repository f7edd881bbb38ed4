//! Opening/closing brace placement for block-like nodes.

use brace_lint_core::TokenId;

use super::fix::{insert_newline_after, insert_newline_before, remove_newline_between};
use super::policy::BraceStyle;
use super::report::{Reporter, ViolationKind};

/// Checks one brace pair against `style`.
///
/// `open` and `close` are the braces delimiting a block body, class body or
/// switch body. A missing neighbour token means the corresponding check
/// does not apply.
pub(crate) fn validate_curly_pair(
    reporter: &mut Reporter<'_>,
    open: TokenId,
    close: TokenId,
    style: BraceStyle,
) {
    let source = reporter.source;
    if reporter.policy.allow_single_line && source.on_same_line(open, close) {
        return;
    }

    if let Some(before_open) = source.token_before(open) {
        let same_line = source.on_same_line(before_open, open);

        if style != BraceStyle::Allman && !same_line {
            let fix = remove_newline_between(source, before_open, open);
            reporter.report_token(ViolationKind::NextLineOpen, open, fix);
        }

        if style == BraceStyle::Allman && same_line {
            let fix = insert_newline_before(source, open);
            reporter.report_token(ViolationKind::SameLineOpen, open, Some(fix));
        }
    }

    if let Some(after_open) = source.token_after(open) {
        if after_open != close && source.on_same_line(open, after_open) {
            let fix = insert_newline_after(source, open);
            reporter.report_token(ViolationKind::BlockSameLine, open, Some(fix));
        }
    }

    if let Some(before_close) = source.token_before(close) {
        if before_close != open && source.on_same_line(before_close, close) {
            let fix = insert_newline_before(source, close);
            reporter.report_token(ViolationKind::SingleLineClose, close, Some(fix));
        }
    }
}
