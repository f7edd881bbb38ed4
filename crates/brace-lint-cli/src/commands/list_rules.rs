//! List rules command implementation.

use brace_lint_rules::{all_rules, BraceStyle};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        let fixable = if rule.is_fixable() { " (fixable)" } else { "" };
        println!(
            "{:<10} {:<25} {}{fixable}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nStyles:");
    for style in [BraceStyle::OneTrueBrace, BraceStyle::Stroustrup, BraceStyle::Allman] {
        println!("  {style}");
    }

    println!("\nPresets:");
    println!("  recommended  - 1tbs, single-line blocks allowed");
    println!("  strict       - 1tbs, every block broken over lines");

    println!("\nOverride the style from the command line, e.g.:");
    println!("  brace-lint check --style stroustrup");
    println!("  brace-lint check --style allman --allow-single-line");
}
