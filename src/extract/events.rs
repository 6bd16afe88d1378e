//! Event listing extraction.
//!
//! Lines look like `UNIT_HEALTH Fired when a unit's health changes`; only the
//! leading identifier is kept. Events marked `REMOVED ` are skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::Extraction;
use crate::{
    issues::{Issue, LineLocation},
    source::RawListing,
};

pub const EVENT_GROUP: &str = "event";

const REMOVED_PREFIX: &str = "REMOVED ";

static EVENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][A-Z0-9]*_[A-Z0-9_]*[A-Z0-9])(?:\s|$)").unwrap());

pub fn extract_events(listing: &RawListing) -> Extraction {
    let mut out = Extraction::default();

    for (line_no, raw) in listing.numbered() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(REMOVED_PREFIX) {
            continue;
        }

        match EVENT_REGEX.captures(line) {
            Some(caps) => out.insert(EVENT_GROUP, &caps[1]),
            None => out.issues.push(Issue::unparsed_line(LineLocation::new(
                listing.file_path(),
                line_no,
                raw,
            ))),
        }
    }

    out
}
