//! Applies the automatic edits attached to violations.
//!
//! Edits are applied in one pass over the text, sorted by start offset. An
//! edit that starts at or before the end of the previously applied edit is
//! left for a later pass, so edits never overlap within a pass. Callers loop
//! (re-check, re-apply) until nothing applies or [`MAX_FIX_PASSES`] is hit.

use crate::types::{TextEdit, Violation};

/// Upper bound on check/fix rounds for a single file.
pub const MAX_FIX_PASSES: usize = 10;

/// Outcome of applying one round of edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The rewritten text.
    pub output: String,
    /// Number of edits applied.
    pub applied: usize,
    /// Number of edits deferred because they overlapped an earlier edit.
    pub skipped: usize,
}

impl FixOutcome {
    /// Returns true if the text changed.
    #[must_use]
    pub fn changed(&self, original: &str) -> bool {
        self.applied > 0 && self.output != original
    }
}

/// Applies all non-overlapping edits carried by `violations` to `text`.
#[must_use]
pub fn apply_fixes(text: &str, violations: &[Violation]) -> FixOutcome {
    let edits: Vec<&TextEdit> = violations.iter().filter_map(Violation::edit).collect();
    apply_edits(text, edits)
}

/// Applies non-overlapping edits to `text`.
#[must_use]
pub fn apply_edits<'a>(text: &str, edits: impl IntoIterator<Item = &'a TextEdit>) -> FixOutcome {
    let mut edits: Vec<&TextEdit> = edits.into_iter().collect();
    edits.sort_by_key(|e| (e.start, e.end));

    let mut output = String::with_capacity(text.len() + edits.len());
    let mut cursor = 0;
    let mut last_end: Option<usize> = None;
    let mut applied = 0;
    let mut skipped = 0;

    for edit in edits {
        let in_bounds = edit.start <= edit.end
            && edit.end <= text.len()
            && text.is_char_boundary(edit.start)
            && text.is_char_boundary(edit.end);
        let overlaps = last_end.is_some_and(|end| edit.start <= end);

        if !in_bounds || overlaps {
            tracing::debug!("Deferring edit at {}..{}", edit.start, edit.end);
            skipped += 1;
            continue;
        }

        output.push_str(&text[cursor..edit.start]);
        output.push_str(&edit.replacement);
        cursor = edit.end;
        last_end = Some(edit.end);
        applied += 1;
    }
    output.push_str(&text[cursor..]);

    FixOutcome {
        output,
        applied,
        skipped,
    }
}
