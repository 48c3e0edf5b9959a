//! The menu node tree supplied by the host.
//!
//! A [`MenuNode`] is read-only input: the renderer walks the tree and builds
//! new markup, never mutating the nodes. The host owns the data source —
//! ordering of `children` is the display order, and the tree is assumed
//! finite and acyclic (the walker adds a depth guard as a defensive measure,
//! not a contract).

use serde::{Deserialize, Serialize};

/// Optional anchor attributes carried by a menu item.
///
/// Empty fields produce no attribute at all — not an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuAttrs {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub rel: String,
}

/// One item in a navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Host-assigned identifier, used for the per-item identity class.
    pub id: u64,
    pub label: String,
    /// Link target; empty renders a link-less anchor (no `href` attribute).
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub attrs: MenuAttrs,
    /// Host-assigned CSS classes for this item.
    #[serde(default)]
    pub raw_classes: Vec<String>,
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(id: u64, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            url: url.into(),
            attrs: MenuAttrs::default(),
            raw_classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child, returning `self` for chaining.
    pub fn child(mut self, node: MenuNode) -> Self {
        self.children.push(node);
        self
    }

    /// Adds a host class, returning `self` for chaining.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.raw_classes.push(class.into());
        self
    }

    /// Sets anchor attributes, returning `self` for chaining.
    pub fn attrs(mut self, attrs: MenuAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Parses a node tree from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of nodes in this subtree (including `self`).
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::count).sum::<usize>()
    }
}
