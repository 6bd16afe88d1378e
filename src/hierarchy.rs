//! The widget class hierarchy and method hoisting.
//!
//! Widget documentation repeats every inherited method on each subclass page.
//! Collapsing a method that all children of a parent declare back onto the
//! parent keeps the number of grammar rules bounded by the hierarchy rather
//! than by the number of listed methods.

use std::collections::BTreeSet;

use crate::{
    extract::{Grouping, NameGroup},
    issues::{HierarchyInconsistencyIssue, Issue},
};

/// Every widget class the listing is expected to mention.
pub const WOW_CLASSES: &[&str] = &[
    "ArchaeologyDigSiteFrame",
    "Alpha",
    "Animation",
    "AnimationGroup",
    "Button",
    "Browser",
    "CheckButton",
    "ColorSelect",
    "ControlPoint",
    "Cooldown",
    "DressUpModel",
    "EditBox",
    "Font",
    "FontInstance",
    "FontString",
    "Frame",
    "GameTooltip",
    "LayeredRegion",
    "MessageFrame",
    "Minimap",
    "MovieFrame",
    "ParentedObject",
    "Path",
    "PlayerModel",
    "QuestPOIFrame",
    "Region",
    "Rotation",
    "Scale",
    "ScenarioPOIFrame",
    "ScriptObject",
    "ScrollFrame",
    "ScrollingMessageFrame",
    "SimpleHTML",
    "Slider",
    "StatusBar",
    "TabardModel",
    "Texture",
    "Translation",
    "UIObject",
    "VisibleRegion",
];

/// Parents in processing order.
///
/// Leaf-ward parents come first so each parent is collapsed before it is
/// itself trimmed as somebody else's child. Hand-verified; the graph is not a
/// tree (e.g. `EditBox` sits under both `Frame` and `FontInstance`), so this
/// is not derived at runtime.
pub const WOW_PROCESS_ORDER: &[&str] = &[
    "PlayerModel",
    "Button",
    "Frame",
    "LayeredRegion",
    "VisibleRegion",
    "Region",
    "Animation",
    "ParentedObject",
    "FontInstance",
    "UIObject",
    "ScriptObject",
];

/// Direct children of each parent.
pub const WOW_CHILDREN: &[(&str, &[&str])] = &[
    ("ScriptObject", &["Frame", "Animation", "AnimationGroup"]),
    ("UIObject", &["ParentedObject", "FontInstance"]),
    (
        "FontInstance",
        &[
            "FontString",
            "Font",
            "EditBox",
            "MessageFrame",
            "ScrollingMessageFrame",
        ],
    ),
    (
        "ParentedObject",
        &["Region", "ControlPoint", "AnimationGroup", "Animation"],
    ),
    (
        "Animation",
        &["Alpha", "Path", "Rotation", "Scale", "Translation"],
    ),
    ("Region", &["VisibleRegion"]),
    ("VisibleRegion", &["LayeredRegion", "Frame"]),
    ("LayeredRegion", &["Texture", "FontString"]),
    (
        "Frame",
        &[
            "ArchaeologyDigSiteFrame",
            "Browser",
            "Button",
            "ColorSelect",
            "Cooldown",
            "GameTooltip",
            "Minimap",
            "MovieFrame",
            "PlayerModel",
            "QuestPOIFrame",
            "ScenarioPOIFrame",
            "ScrollFrame",
            "SimpleHTML",
            "Slider",
            "StatusBar",
            "EditBox",
            "MessageFrame",
            "ScrollingMessageFrame",
        ],
    ),
    ("Button", &["CheckButton"]),
    ("PlayerModel", &["TabardModel", "DressUpModel"]),
];

/// Static description of which widget classes inherit from which.
#[derive(Debug, Clone)]
pub struct ClassHierarchy {
    known: BTreeSet<String>,
    order: Vec<String>,
    children: Vec<(String, Vec<String>)>,
}

impl ClassHierarchy {
    /// Build a hierarchy from an explicit class set, process order and adjacency list.
    ///
    /// Parents in `order` without an adjacency entry are treated as having no children.
    pub fn new(known: &[&str], order: &[&str], children: &[(&str, &[&str])]) -> Self {
        Self {
            known: known.iter().map(|c| c.to_string()).collect(),
            order: order.iter().map(|c| c.to_string()).collect(),
            children: children
                .iter()
                .map(|(parent, kids)| {
                    (
                        parent.to_string(),
                        kids.iter().map(|c| c.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// The curated WoW widget hierarchy.
    pub fn wow() -> Self {
        Self::new(WOW_CLASSES, WOW_PROCESS_ORDER, WOW_CHILDREN)
    }

    pub fn is_known(&self, class: &str) -> bool {
        self.known.contains(class)
    }

    pub fn children_of(&self, parent: &str) -> &[String] {
        self.children
            .iter()
            .find(|(p, _)| p == parent)
            .map(|(_, kids)| kids.as_slice())
            .unwrap_or(&[])
    }

    pub fn process_order(&self) -> &[String] {
        &self.order
    }

    /// Hoist methods shared by a parent and all of its children onto the parent.
    ///
    /// Intersections are always taken against the groups as passed in, and
    /// removals are applied to a fresh copy, so the result does not depend on
    /// removals made for earlier parents. A class missing from `groups` counts
    /// as having no methods; it is never added to the output.
    pub fn collapse(&self, groups: &Grouping) -> (Grouping, Vec<Issue>) {
        let mut collapsed = groups.clone();
        let mut issues = Vec::new();
        let empty = NameGroup::new();

        for parent in &self.order {
            let Some(parent_methods) = groups.get(parent) else {
                continue;
            };
            let children = self.children_of(parent);

            let common: NameGroup = children.iter().fold(parent_methods.clone(), |acc, child| {
                let child_methods = groups.get(child).unwrap_or(&empty);
                acc.intersection(child_methods).cloned().collect()
            });

            for child in children {
                if let Some(child_methods) = collapsed.get_mut(child) {
                    child_methods.retain(|method| !common.contains(method));
                }
            }

            if common != *parent_methods {
                issues.push(Issue::HierarchyInconsistency(HierarchyInconsistencyIssue {
                    parent: parent.clone(),
                    extra_methods: parent_methods.difference(&common).cloned().collect(),
                }));
            }
        }

        (collapsed, issues)
    }
}
