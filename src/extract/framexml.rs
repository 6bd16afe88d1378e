//! FrameXML function listing: a flat list of names, one fragment.

use std::sync::LazyLock;

use regex::Regex;

use super::Extraction;
use crate::{
    issues::{Issue, LineLocation},
    source::RawListing,
};

pub const FRAMEXML_GROUP: &str = "framexml";

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+(?:\.\w+)*$").unwrap());

pub fn extract_framexml(listing: &RawListing) -> Extraction {
    let mut out = Extraction::default();

    for (line_no, raw) in listing.numbered() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if NAME_REGEX.is_match(line) {
            out.insert(FRAMEXML_GROUP, regex::escape(line));
        } else {
            out.issues.push(Issue::unparsed_line(LineLocation::new(
                listing.file_path(),
                line_no,
                raw,
            )));
        }
    }

    out
}
