//! Shared output formatting for lint results.

use anyhow::Result;
use brace_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use miette::GraphicalReportHandler;
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the analyzed directory; pretty output rereads files from it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => return print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            let fixable = if suggestion.edit.is_some() {
                " (fixable)"
            } else {
                ""
            };
            println!("  = help: {}{fixable}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );

    let fixable = result.fixable_count();
    if fixable > 0 {
        println!("{fixable} violation(s) can be fixed with --fix");
    }
    if result.files_fixed > 0 {
        println!("Fixed {} file(s)", result.files_fixed);
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

fn print_pretty(result: &LintResult, root: &Path) -> Result<()> {
    let handler = GraphicalReportHandler::new();

    for violation in &result.violations {
        let Some(text) = read_source(root, violation) else {
            print!("{}", violation.format());
            continue;
        };

        let diagnostic = ViolationDiagnostic::new(violation, text);
        let mut rendered = String::new();
        handler.render_report(&mut rendered, &diagnostic)?;
        println!("{rendered}");
    }

    print_summary(result);
    Ok(())
}

fn read_source(root: &Path, violation: &Violation) -> Option<String> {
    let path = if root.is_file() {
        root.to_path_buf()
    } else {
        root.join(&violation.location.file)
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("Cannot reread {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brace_lint_core::Location;
    use std::path::PathBuf;

    #[test]
    fn read_source_joins_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.js"), "x();\n").unwrap();

        let violation = Violation::new(
            "BL001",
            "brace-style",
            Severity::Error,
            Location::new(PathBuf::from("a.js"), 1, 1),
            "msg",
        );
        assert_eq!(read_source(dir.path(), &violation).as_deref(), Some("x();\n"));

        let missing = Violation::new(
            "BL001",
            "brace-style",
            Severity::Error,
            Location::new(PathBuf::from("gone.js"), 1, 1),
            "msg",
        );
        assert!(read_source(dir.path(), &missing).is_none());
    }
}
