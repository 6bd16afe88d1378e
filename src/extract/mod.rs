//! Extractors turning raw listings into grouped names.
//!
//! Each extractor is a pure function of a [`RawListing`](crate::source::RawListing)
//! (plus its static word lists) and returns an [`Extraction`]: the grouped
//! names ready for formatting and any diagnostics raised along the way.

use std::collections::{BTreeMap, BTreeSet};

use crate::issues::Issue;

pub mod events;
pub mod framexml;
pub mod functions;
pub mod widgets;

/// A set of distinct names sharing one category key.
pub type NameGroup = BTreeSet<String>;

/// Category key -> names. Ordered so output is stable between runs.
pub type Grouping = BTreeMap<String, NameGroup>;

/// Result of running one extractor over one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub groups: Grouping,
    pub issues: Vec<Issue>,
}

impl Extraction {
    /// Add a name to the group `key`, creating the group if needed.
    pub fn insert(&mut self, key: &str, name: impl Into<String>) {
        self.groups
            .entry(key.to_string())
            .or_default()
            .insert(name.into());
    }

    pub fn group(&self, key: &str) -> Option<&NameGroup> {
        self.groups.get(key)
    }
}
