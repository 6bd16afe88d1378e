//! Diagnostic types produced while extracting grammar fragments.
//!
//! None of these abort a run. A `MissingInput` skips the component whose
//! listing could not be read; everything else is informational and the
//! offending line (or nothing) is dropped.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingInput,
    UnparsedLine,
    UnknownClass,
    HierarchyInconsistency,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingInput => write!(f, "missing-input"),
            Rule::UnparsedLine => write!(f, "unparsed-line"),
            Rule::UnknownClass => write!(f, "unknown-class"),
            Rule::HierarchyInconsistency => write!(f, "hierarchy-inconsistency"),
        }
    }
}

// ============================================================
// Location
// ============================================================

/// A line inside one of the raw listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLocation {
    pub file_path: String,
    /// 1-based.
    pub line: usize,
    pub source_line: String,
}

impl LineLocation {
    pub fn new(file_path: impl Into<String>, line: usize, source_line: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            source_line: source_line.into(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// An input listing could not be opened or read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingInputIssue {
    pub file_path: String,
    /// Which component was skipped because of it.
    pub component: String,
    pub error: String,
}

impl MissingInputIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingInput
    }
}

/// A non-blank line matched none of the recognised patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparsedLineIssue {
    pub location: LineLocation,
}

impl UnparsedLineIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnparsedLine
    }
}

/// A widget method was declared on a class outside the known-class set.
///
/// The method is still grouped under the literal class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClassIssue {
    pub location: LineLocation,
    pub class: String,
}

impl UnknownClassIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownClass
    }
}

/// A parent class owns methods that not every listed child declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyInconsistencyIssue {
    pub parent: String,
    /// Sorted.
    pub extra_methods: Vec<String>,
}

impl HierarchyInconsistencyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::HierarchyInconsistency
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingInput(MissingInputIssue),
    UnparsedLine(UnparsedLineIssue),
    UnknownClass(UnknownClassIssue),
    HierarchyInconsistency(HierarchyInconsistencyIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingInput(_) => MissingInputIssue::severity(),
            Issue::UnparsedLine(_) => UnparsedLineIssue::severity(),
            Issue::UnknownClass(_) => UnknownClassIssue::severity(),
            Issue::HierarchyInconsistency(_) => HierarchyInconsistencyIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingInput(_) => MissingInputIssue::rule(),
            Issue::UnparsedLine(_) => UnparsedLineIssue::rule(),
            Issue::UnknownClass(_) => UnknownClassIssue::rule(),
            Issue::HierarchyInconsistency(_) => HierarchyInconsistencyIssue::rule(),
        }
    }

    pub fn unparsed_line(location: LineLocation) -> Self {
        Issue::UnparsedLine(UnparsedLineIssue { location })
    }
}

// ============================================================
// Report Trait
// ============================================================

/// Where an issue points to, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLocation<'a> {
    /// A specific line of a listing (has source text for context display).
    Line(&'a LineLocation),
    /// File-level only.
    File { path: &'a str },
    /// Not tied to any input line (hierarchy checks run on grouped data).
    None,
}

/// Trait for types that can be reported on the error stream.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingInputIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("skipped {} output", self.component))
    }
}

impl Report for UnparsedLineIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line(&self.location)
    }

    fn message(&self) -> String {
        "line not matched".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for UnknownClassIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line(&self.location)
    }

    fn message(&self) -> String {
        format!("class not found: {}", self.class)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("methods are kept but take no part in the hierarchy collapse".to_string())
    }
}

impl Report for HierarchyInconsistencyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::None
    }

    fn message(&self) -> String {
        format!("{} has methods not shared by all children", self.parent)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.extra_methods.join(", "))
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> Option<&str> {
        match self.location() {
            ReportLocation::Line(loc) => Some(&loc.file_path),
            ReportLocation::File { path } => Some(path),
            ReportLocation::None => None,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Line(loc) => loc.line,
            ReportLocation::File { .. } | ReportLocation::None => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        // Sort by: file_path (None last), line, message
        match (self.sort_file_path(), other.sort_file_path()) {
            (Some(a), Some(b)) => a
                .cmp(b)
                .then_with(|| self.sort_line().cmp(&other.sort_line()))
                .then_with(|| self.message().cmp(&other.message())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self
                .rule()
                .cmp(&other.rule())
                .then_with(|| self.message().cmp(&other.message())),
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
