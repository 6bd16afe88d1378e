//! Rendering grouped names into CSON grammar rules.

use std::fmt;

use crate::extract::NameGroup;

/// Which template a fragment is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Global functions called as `Name(`, `Name "`, `Name {` or `Name [[`.
    Function,
    /// Event names inside a string literal.
    Event,
    /// Methods called through `.` or `:` on a widget.
    Widget,
}

impl FragmentKind {
    /// The regex with `{}` standing in for the alternation.
    fn template(self) -> &'static str {
        match self {
            FragmentKind::Function => r#"(?<![^.]\.|:)\b({})\b(?=\s*(?:[({"']|\[\[))"#,
            FragmentKind::Event => r#"('|")({})\1"#,
            FragmentKind::Widget => r"(?<=[.:])\s*\b({})\b(?=[( {])",
        }
    }

    fn scope(self, key: &str) -> String {
        match self {
            FragmentKind::Function => format!("support.function.wow.{}", key),
            FragmentKind::Event => "constant.wow.event".to_string(),
            FragmentKind::Widget => format!("support.function.wow.widget.{}", key),
        }
    }
}

/// One emitted highlighting rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub key: String,
    /// Regex alternatives, already valid regex syntax.
    pub names: Vec<String>,
}

impl Fragment {
    pub fn new(kind: FragmentKind, key: &str, names: &NameGroup) -> Self {
        Self {
            kind,
            key: key.to_string(),
            names: names.iter().cloned().collect(),
        }
    }

    /// The unescaped regex for this rule.
    pub fn pattern(&self) -> String {
        self.kind.template().replacen("{}", &self.names.join("|"), 1)
    }

    pub fn scope(&self) -> String {
        self.kind.scope(&self.key)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "  match: '{}'", cson_escape(&self.pattern()))?;
        writeln!(f, "  name: '{}'", cson_escape(&self.scope()))?;
        write!(f, "}}")
    }
}

/// Escape text for a single-quoted CSON string.
pub fn cson_escape(text: &str) -> String {
    text.replace('\\', r"\\").replace('\'', r"\'")
}
