//! Report formatting and printing utilities.
//!
//! Fragments go to stdout; diagnostics go to stderr in cargo-style format.
//! Every printer has a `_to` variant taking a writer so output can be tested.

use std::io::{self, Write};

use colored::Colorize;

use crate::{
    fragment::Fragment,
    issues::{Issue, LineLocation, Report, ReportLocation, Severity},
};

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print fragments to stdout, one block each.
pub fn print_fragments(fragments: &[Fragment]) -> io::Result<()> {
    print_fragments_to(fragments, &mut io::stdout().lock())
}

pub fn print_fragments_to<W: Write>(fragments: &[Fragment], writer: &mut W) -> io::Result<()> {
    for fragment in fragments {
        writeln!(writer, "{}", fragment)?;
    }
    writer.flush()
}

/// Print issues to stderr.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stderr().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Line(loc) => print_line_context(loc, writer, max_line_width),
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        ReportLocation::None => {}
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_line_context<W: Write>(loc: &LineLocation, writer: &mut W, max_line_width: usize) {
    let _ = writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        loc.file_path,
        loc.line
    );
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        loc.line.to_string().blue(),
        "|".blue(),
        loc.source_line,
        width = max_line_width
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Line(loc) => Some(loc.line),
            ReportLocation::File { .. } | ReportLocation::None => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
