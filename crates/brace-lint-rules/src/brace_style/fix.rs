//! Whitespace-only edits for brace placement.
//!
//! Every edit either inserts a single newline or collapses a run of pure
//! whitespace between two tokens into one space. Nothing else is ever
//! rewritten.

use brace_lint_core::{SourceTree, TextEdit, TokenId};

/// Joins `left` and `right` onto one line.
///
/// Returns `None` when anything other than whitespace (a comment) sits
/// between the two tokens.
pub(crate) fn remove_newline_between(
    source: &SourceTree,
    left: TokenId,
    right: TokenId,
) -> Option<TextEdit> {
    if !source.text_between(left, right).trim().is_empty() {
        return None;
    }
    let start = source.token(left).end;
    let end = source.token(right).start;
    Some(TextEdit::replace(start, end, " "))
}

/// Starts a new line right before `token`.
pub(crate) fn insert_newline_before(source: &SourceTree, token: TokenId) -> TextEdit {
    TextEdit::insert_at(source.token(token).start, "\n")
}

/// Starts a new line right after `token`.
pub(crate) fn insert_newline_after(source: &SourceTree, token: TokenId) -> TextEdit {
    TextEdit::insert_at(source.token(token).end, "\n")
}
