//! Context types for rule execution.

use crate::source::Token;
use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Created fresh for each file and discarded when the file is done.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Builds a location pointing at `token`.
    #[must_use]
    pub fn location_of(&self, token: &Token) -> Location {
        Location::new(self.relative_path.clone(), token.line, token.column)
            .with_span(token.start, token.end - token.start)
    }

    /// Builds a location covering the byte range `[start, end)`.
    #[must_use]
    pub fn location_for_range(&self, start: usize, end: usize) -> Location {
        let (line, column) = self.line_col(start);
        Location::new(self.relative_path.clone(), line, column).with_span(start, end - start)
    }

    /// Calculates the 1-indexed line and column of a byte offset.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let before = &self.content[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, offset - line_start + 1)
    }
}
