//! Runs the extractors over their listings and turns groups into fragments.
//!
//! Components are independent: a listing that cannot be read only skips the
//! component that needed it.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::{
    config::Config,
    extract::{
        Extraction, events::extract_events, framexml::extract_framexml,
        functions::{FunctionLists, extract_functions},
        widgets::extract_widgets,
    },
    fragment::{Fragment, FragmentKind},
    hierarchy::ClassHierarchy,
    issues::{Issue, MissingInputIssue},
    source::{RawListing, read_listing},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Component {
    Functions,
    Framexml,
    Widgets,
    Events,
}

impl Component {
    /// All components, in output order.
    pub fn all() -> Vec<Component> {
        vec![
            Component::Functions,
            Component::Framexml,
            Component::Widgets,
            Component::Events,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::Functions => "functions",
            Component::Framexml => "framexml",
            Component::Widgets => "widgets",
            Component::Events => "events",
        }
    }

    fn fragment_kind(self) -> FragmentKind {
        match self {
            Component::Functions | Component::Framexml => FragmentKind::Function,
            Component::Widgets => FragmentKind::Widget,
            Component::Events => FragmentKind::Event,
        }
    }

    fn extract(self, listing: &RawListing) -> Extraction {
        match self {
            Component::Functions => extract_functions(listing, &FunctionLists::default()),
            Component::Framexml => extract_framexml(listing),
            Component::Widgets => extract_widgets(listing, &ClassHierarchy::wow()),
            Component::Events => extract_events(listing),
        }
    }
}

/// Resolved paths of every input listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub api: PathBuf,
    pub framexml: PathBuf,
    pub widget: PathBuf,
    pub events: PathBuf,
}

impl Inputs {
    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self {
            api: Config::resolve(root, &config.api_file),
            framexml: Config::resolve(root, &config.framexml_file),
            widget: Config::resolve(root, &config.widget_file),
            events: Config::resolve(root, &config.events_file),
        }
    }

    pub fn path_for(&self, component: Component) -> &Path {
        match component {
            Component::Functions => &self.api,
            Component::Framexml => &self.framexml,
            Component::Widgets => &self.widget,
            Component::Events => &self.events,
        }
    }
}

/// What one component produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOutput {
    pub component: Component,
    /// Empty when the listing could not be read.
    pub fragments: Vec<Fragment>,
    pub issues: Vec<Issue>,
    /// Whether the listing was read at all.
    pub skipped: bool,
}

/// Turn an extraction into fragments, one per group in key order.
pub fn fragments(component: Component, extraction: &Extraction) -> Vec<Fragment> {
    extraction
        .groups
        .iter()
        .map(|(key, names)| Fragment::new(component.fragment_kind(), key, names))
        .collect()
}

/// Run one component over an already-read listing.
pub fn run_listing(component: Component, listing: &RawListing) -> ComponentOutput {
    let extraction = component.extract(listing);
    ComponentOutput {
        component,
        fragments: fragments(component, &extraction),
        issues: extraction.issues,
        skipped: false,
    }
}

/// Read the component's listing and run it.
pub fn run_component(component: Component, inputs: &Inputs) -> ComponentOutput {
    let path = inputs.path_for(component);

    match read_listing(path) {
        Ok(listing) => run_listing(component, &listing),
        Err(err) => ComponentOutput {
            component,
            fragments: Vec::new(),
            issues: vec![Issue::MissingInput(MissingInputIssue {
                file_path: path.to_string_lossy().to_string(),
                component: component.name().to_string(),
                error: format!("{:#}", err),
            })],
            skipped: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use regex::Regex;
    use tempfile::TempDir;

    use crate::extract::functions::SUPPLEMENTARY_LUA_FUNCTIONS;
    use crate::generate::*;

    fn inputs(root: &Path) -> Inputs {
        Inputs::from_config(root, &Config::default())
    }

    #[test]
    fn test_missing_listing_skips_component() {
        let dir = TempDir::new().unwrap();

        let output = run_component(Component::Events, &inputs(dir.path()));

        assert!(output.skipped);
        assert!(output.fragments.is_empty());
        assert_eq!(output.issues.len(), 1);
        assert!(matches!(&output.issues[0], Issue::MissingInput(i) if i.component == "events"));
    }

    #[test]
    fn test_events_component() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("raw_events"),
            "REMOVED PLAYER_DIED text\nPLAYER_ALIVE fires when\n\nUNIT_HEALTH changes\n",
        )
        .unwrap();

        let output = run_component(Component::Events, &inputs(dir.path()));

        assert!(!output.skipped);
        assert_eq!(output.fragments.len(), 1);
        assert_eq!(
            output.fragments[0].pattern(),
            r#"('|")(PLAYER_ALIVE|UNIT_HEALTH)\1"#
        );
    }

    #[test]
    fn test_latin1_listing_is_not_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("raw_events"),
            b"PLAYER_ALIVE fires when the caf\xe9 opens\nUNIT_HEALTH changes\n",
        )
        .unwrap();

        let output = run_component(Component::Events, &inputs(dir.path()));

        assert!(!output.skipped);
        assert!(output.issues.is_empty());
        assert_eq!(
            output.fragments[0].pattern(),
            r#"('|")(PLAYER_ALIVE|UNIT_HEALTH)\1"#
        );
    }

    #[test]
    fn test_widget_fragments_per_class() {
        let listing = RawListing::from_text(
            "raw_widget",
            "Button:Click()\nButton:Show()\nCheckButton:Show()\nCheckButton:Click()\nCheckButton:GetChecked()\n",
        );

        let output = run_listing(Component::Widgets, &listing);

        let scopes: Vec<_> = output.fragments.iter().map(|f| f.scope()).collect();
        assert_eq!(
            scopes,
            vec![
                "support.function.wow.widget.Button",
                "support.function.wow.widget.CheckButton",
            ]
        );
        assert_eq!(output.fragments[1].names, vec!["GetChecked"]);
    }

    #[test]
    fn test_every_name_comes_from_the_listing() {
        // A plain or dotted identifier, or one table with its members compressed.
        let shape = Regex::new(r"^\w+(?:\\\.\w+)*$|^\w+\\\.\(\w+(?:\|\w+)*\)$").unwrap();
        let word = Regex::new(r"\w+").unwrap();
        let cases = [
            (
                Component::Functions,
                "GetTime\nC_Timer.After\nC_Timer.After\nbit.band\nUnit.Name(x)\nstring.format\n",
            ),
            (
                Component::Framexml,
                "ChatFrame_AddMessage\nPaperDollFrame.Show\nnot a name\n",
            ),
            (
                Component::Widgets,
                "Frame:Show()\nFrame:Show.\nButton:Hide|Show()\nt = Frame:CreateTexture(n)\n",
            ),
            (
                Component::Events,
                "PLAYER_LOGIN fires\nREMOVED UNIT_DIED x\nUNIT_HEALTH.* bad\n",
            ),
        ];

        for (component, text) in cases {
            let mut allowed: BTreeSet<&str> = word.find_iter(text).map(|m| m.as_str()).collect();
            if component == Component::Functions {
                for name in SUPPLEMENTARY_LUA_FUNCTIONS {
                    allowed.extend(word.find_iter(name).map(|m| m.as_str()));
                }
            }

            let output = run_listing(component, &RawListing::from_text("listing", text));

            assert!(!output.fragments.is_empty(), "{}", component.name());
            for name in output.fragments.iter().flat_map(|f| &f.names) {
                assert!(shape.is_match(name), "{}: {}", component.name(), name);
                for atom in word.find_iter(name) {
                    assert!(
                        allowed.contains(atom.as_str()),
                        "{}: {} in {}",
                        component.name(),
                        atom.as_str(),
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_config_paths_are_resolved() {
        let config = Config {
            api_file: "lists/api.txt".to_string(),
            ..Config::default()
        };

        let inputs = Inputs::from_config(Path::new("root"), &config);

        assert_eq!(
            inputs.path_for(Component::Functions),
            Path::new("root/lists/api.txt")
        );
        assert_eq!(
            inputs.path_for(Component::Framexml),
            Path::new("root/raw_framexml")
        );
    }
}
