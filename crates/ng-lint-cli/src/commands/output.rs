//! Shared output formatting for lint results.
//!
//! Text output groups violations by file so a run over many files reads as
//! one report per file. Compact output is one line per violation via the
//! `Display` impl on `Violation`; JSON is the serde serialization of the
//! whole result, including suggestions and their edits.

use anyhow::Result;
use ng_lint_core::{LintResult, Severity, Violation};
use std::fmt::Write as _;
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => print!("{}", render_compact(result)),
    }
    Ok(())
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Info => "\x1b[34m",
    }
}

fn has_edit(violation: &Violation) -> bool {
    violation
        .suggestion
        .as_ref()
        .is_some_and(|s| s.edit.is_some())
}

fn render_text(result: &LintResult) -> String {
    let mut out = String::new();
    let mut current_file: Option<&Path> = None;

    for violation in &result.violations {
        if current_file != Some(violation.location.file.as_path()) {
            if current_file.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "\x1b[4m{}\x1b[0m", violation.location.file.display());
            current_file = Some(violation.location.file.as_path());
        }

        let fix_marker = if has_edit(violation) {
            "  (fix available)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {}:{}  {}{}\x1b[0m  {}  {}{}",
            violation.location.line,
            violation.location.column,
            severity_color(violation.severity),
            violation.severity,
            violation.code,
            violation.message,
            fix_marker,
        );
        if let Some(suggestion) = &violation.suggestion {
            let _ = writeln!(out, "       help: {}", suggestion.message);
        }
        if let Some(doc_ref) = &violation.doc_ref {
            let _ = writeln!(out, "       see: {doc_ref}");
        }
    }

    if !result.violations.is_empty() {
        out.push('\n');
    }

    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        severity_color(Severity::Error)
    } else if warnings > 0 {
        severity_color(Severity::Warning)
    } else {
        "\x1b[32m"
    };
    let _ = writeln!(
        out,
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );

    let fixable = result.violations.iter().filter(|v| has_edit(v)).count();
    if fixable > 0 {
        let _ = writeln!(
            out,
            "{fixable} violation(s) carry a suggested edit; use --format json to export them."
        );
    }

    out
}

fn render_compact(result: &LintResult) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let _ = writeln!(out, "{violation}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ng_lint_core::{Location, Suggestion, TextEdit};
    use std::path::PathBuf;

    fn violation(file: &str, line: usize, code: &str) -> Violation {
        Violation::new(
            code,
            "test-rule",
            Severity::Error,
            Location::new(PathBuf::from(file), line, 1),
            "something is off",
        )
    }

    fn result_of(violations: Vec<Violation>) -> LintResult {
        let mut result = LintResult::new();
        result.files_checked = 2;
        result.violations = violations;
        result
    }

    #[test]
    fn text_output_groups_by_file_and_marks_fixes() {
        let fixable = violation("a.ts", 1, "NG005").with_suggestion(Suggestion::with_edit(
            "Insert the license banner at the top of the file",
            TextEdit::insert_at_start(PathBuf::from("a.ts"), "/* banner */\n"),
        ));
        let plain = violation("b.ts", 3, "NG004");
        let text = render_text(&result_of(vec![fixable, plain]));

        // One header per file, not per violation.
        assert_eq!(text.matches("a.ts").count(), 1);
        assert!(text.contains("(fix available)"));
        assert!(text.contains("help: Insert the license banner"));
        assert!(text.contains("1 violation(s) carry a suggested edit"));
        assert!(text.contains("Found 2 error(s), 0 warning(s), 0 info(s) in 2 file(s)"));
    }

    #[test]
    fn text_output_includes_doc_ref() {
        let v = violation("a.ts", 1, "NG001")
            .with_doc_ref("https://angular.io/guide/styleguide#symbols-and-file-names");
        let text = render_text(&result_of(vec![v]));
        assert!(text.contains("see: https://angular.io/guide/styleguide"));
    }

    #[test]
    fn compact_output_includes_doc_ref() {
        let v = violation("src/a.ts", 4, "NG001")
            .with_doc_ref("https://angular.io/guide/styleguide#symbols-and-file-names");
        let compact = render_compact(&result_of(vec![v]));
        assert!(compact.starts_with("src/a.ts:4:1: error [NG001] something is off"));
        assert!(compact.contains("(see: https://angular.io/guide/styleguide"));
    }

    #[test]
    fn empty_result_renders_summary_only() {
        let mut result = LintResult::new();
        result.files_checked = 3;
        let text = render_text(&result);
        assert!(text.contains("Found 0 error(s), 0 warning(s), 0 info(s) in 3 file(s)"));
        assert!(!text.contains("suggested edit"));
        assert!(render_compact(&result).is_empty());
    }
}
