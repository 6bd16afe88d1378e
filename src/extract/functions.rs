//! Global function listing extraction.
//!
//! Every identifier lands in one of two groups: `lua` for names that look like
//! built-in language functions (all lowercase) and `api` for the game API.
//! Dotted `Table.func` entries are compressed per table into a single
//! `Table\.(a|b|c)` alternation, the same way the host Lua grammar handles its
//! standard libraries.

use std::sync::LazyLock;

use regex::Regex;

use super::Extraction;
use crate::{
    issues::{Issue, LineLocation},
    source::RawListing,
};

pub const LUA_GROUP: &str = "lua";
pub const API_GROUP: &str = "api";

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+) Functions").unwrap());
static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+\.?\w+$").unwrap());

/// Lowercase functions that belong to the game API rather than to Lua.
pub const LOWERCASE_API_FUNCTIONS: &[&str] = &[
    "debugbreak",
    "debugdump",
    "debuginfo",
    "debugload",
    "debuglocals",
    "debugprint",
    "debugprofilestart",
    "debugprofilestop",
    "debugstack",
    "debugtimestamp",
    "hooksecure",
    "issecure",
    "issecurevariable",
    "forceinsecure",
    "securecall",
    "getprinthandler",
    "print",
    "setprinthandler",
    "tostringall",
];

/// Standard library entries already highlighted by the host Lua grammar.
pub const STDLIB_FUNCTIONS: &[&str] = &[
    "coroutine.create",
    "coroutine.resume",
    "coroutine.running",
    "coroutine.status",
    "coroutine.wrap",
    "coroutine.yield",
    "math.abs",
    "math.acos",
    "math.asin",
    "math.atan",
    "math.atan2",
    "math.ceil",
    "math.cos",
    "math.cosh",
    "math.deg",
    "math.exp",
    "math.floor",
    "math.fmod",
    "math.frexp",
    "math.ldexp",
    "math.log",
    "math.log10",
    "math.max",
    "math.min",
    "math.modf",
    "math.pow",
    "math.rad",
    "math.random",
    "math.randomseed",
    "math.sin",
    "math.sinh",
    "math.sqrt",
    "math.tan",
    "math.tanh",
    "os.clock",
    "os.date",
    "os.difftime",
    "os.time",
    "string.byte",
    "string.char",
    "string.dump",
    "string.find",
    "string.format",
    "string.gmatch",
    "string.gsub",
    "string.len",
    "string.lower",
    "string.match",
    "string.rep",
    "string.reverse",
    "string.sub",
    "string.upper",
    "table.concat",
    "table.insert",
    "table.maxn",
    "table.remove",
    "table.sort",
];

/// Non-standard built-ins that never show up in the listing.
pub const SUPPLEMENTARY_LUA_FUNCTIONS: &[&str] = &[
    // replaced math.random, kept around
    "fastrandom",
    // math.mod was renamed math.fmod
    "fmod",
    "mod",
    // degree-based trig
    "acos",
    "asin",
    "atan",
    "atan2",
    "cos",
    "rad",
    "sin",
    "tan",
    // string library aliases and utf8 helpers
    "strbyte",
    "strchar",
    "strcmputf8i",
    "strconcat",
    "strfind",
    "strjoin",
    "strlen",
    "strlenutf8",
    "strlower",
    "strmatch",
    "strrep",
    "strrev",
    "strsplit",
    "strsub",
    "strtrim",
    "strupper",
    "table.wipe",
    "wipe",
];

/// The word lists driving classification.
#[derive(Debug, Clone)]
pub struct FunctionLists<'a> {
    /// Lowercase names that still belong in `api`.
    pub lowercase_api: &'a [&'a str],
    /// Names dropped entirely.
    pub stdlib: &'a [&'a str],
    /// Names appended to `lua` unconditionally.
    pub supplementary: &'a [&'a str],
}

impl Default for FunctionLists<'static> {
    fn default() -> Self {
        Self {
            lowercase_api: LOWERCASE_API_FUNCTIONS,
            stdlib: STDLIB_FUNCTIONS,
            supplementary: SUPPLEMENTARY_LUA_FUNCTIONS,
        }
    }
}

/// Collects consecutive `prefix.suffix` entries sharing one prefix.
#[derive(Debug, Default)]
struct PrefixAccumulator {
    pending: Option<PendingTable>,
}

#[derive(Debug)]
struct PendingTable {
    group: &'static str,
    prefix: String,
    suffixes: Vec<String>,
}

impl PrefixAccumulator {
    fn push(&mut self, group: &'static str, prefix: &str, suffix: &str, out: &mut Extraction) {
        if let Some(pending) = &mut self.pending
            && pending.group == group
            && pending.prefix == prefix
        {
            if !pending.suffixes.iter().any(|s| s == suffix) {
                pending.suffixes.push(suffix.to_string());
            }
            return;
        }

        self.flush(out);
        self.pending = Some(PendingTable {
            group,
            prefix: prefix.to_string(),
            suffixes: vec![suffix.to_string()],
        });
    }

    fn flush(&mut self, out: &mut Extraction) {
        if let Some(pending) = self.pending.take() {
            out.insert(
                pending.group,
                format!(r"{}\.({})", pending.prefix, pending.suffixes.join("|")),
            );
        }
    }
}

/// Pick the group for a name, or `None` if it is a standard-library entry.
fn classify(name: &str, lists: &FunctionLists<'_>) -> Option<&'static str> {
    if lists.stdlib.contains(&name) {
        return None;
    }
    if name == name.to_lowercase() && !lists.lowercase_api.contains(&name) {
        Some(LUA_GROUP)
    } else {
        Some(API_GROUP)
    }
}

/// Extract `lua` and `api` groups from a global function listing.
///
/// Section headers (`... Functions`) are skipped; they do not split groups.
pub fn extract_functions(listing: &RawListing, lists: &FunctionLists<'_>) -> Extraction {
    let mut out = Extraction::default();
    let mut tables = PrefixAccumulator::default();

    for (line_no, raw) in listing.numbered() {
        let line = raw.trim();
        if line.is_empty() || HEADER_REGEX.is_match(line) {
            continue;
        }

        if !LINE_REGEX.is_match(line) {
            out.issues.push(Issue::unparsed_line(LineLocation::new(
                listing.file_path(),
                line_no,
                raw,
            )));
            continue;
        }

        let Some(group) = classify(line, lists) else {
            continue;
        };

        match line.split_once('.') {
            Some((prefix, suffix)) => tables.push(group, prefix, suffix, &mut out),
            None => {
                tables.flush(&mut out);
                out.insert(group, line);
            }
        }
    }
    tables.flush(&mut out);

    for name in lists.supplementary {
        out.insert(LUA_GROUP, regex::escape(name));
    }

    out
}
