//! Widget method listing extraction.
//!
//! Two line shapes carry a method:
//!
//! - declarations: `Frame:SetPoint(point, relativeTo) - Sets an anchor`
//! - forwards: `frame = Frame:CreateTexture(name) - Creates a texture`
//!
//! Bare class names are section headers. Methods are grouped per class and
//! then collapsed through the [`ClassHierarchy`].

use std::sync::LazyLock;

use regex::Regex;

use super::Extraction;
use crate::{
    hierarchy::ClassHierarchy,
    issues::{Issue, LineLocation, UnknownClassIssue},
    source::RawListing,
};

static FORWARD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^=]+=\s*(\w+:\w+)\(").unwrap());
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\S+)").unwrap());
static METHOD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+):(\w+)(?:\(|$)").unwrap());

/// The call target of a line, before splitting into class and method.
fn call_target(line: &str) -> Option<&str> {
    if line.contains('=')
        && let Some(caps) = FORWARD_REGEX.captures(line)
    {
        return caps.get(1).map(|m| m.as_str());
    }

    TOKEN_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split `Class:method(...)` into its parts.
fn parse_method(target: &str) -> Option<(&str, &str)> {
    let caps = METHOD_REGEX.captures(target)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Group widget methods per class without collapsing.
pub fn group_widget_methods(listing: &RawListing, hierarchy: &ClassHierarchy) -> Extraction {
    let mut out = Extraction::default();

    for (line_no, raw) in listing.numbered() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let location = || LineLocation::new(listing.file_path(), line_no, raw);

        let Some(target) = call_target(line) else {
            out.issues.push(Issue::unparsed_line(location()));
            continue;
        };

        if hierarchy.is_known(target) {
            continue;
        }

        let Some((class, method)) = parse_method(target) else {
            out.issues.push(Issue::unparsed_line(location()));
            continue;
        };

        if !hierarchy.is_known(class) {
            out.issues.push(Issue::UnknownClass(UnknownClassIssue {
                location: location(),
                class: class.to_string(),
            }));
        }

        out.insert(class, method);
    }

    out
}

/// Extract per-class method groups and hoist shared methods onto parents.
pub fn extract_widgets(listing: &RawListing, hierarchy: &ClassHierarchy) -> Extraction {
    let grouped = group_widget_methods(listing, hierarchy);
    let (groups, hierarchy_issues) = hierarchy.collapse(&grouped.groups);

    let mut issues = grouped.issues;
    issues.extend(hierarchy_issues);

    Extraction { groups, issues }
}
