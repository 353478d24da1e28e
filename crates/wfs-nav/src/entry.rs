//! Navigation tree data model.
//!
//! The navigation forest is supplied by configuration and read-only at
//! runtime. Entries are plain data: a title, an optional route, and ordered
//! children. Everything else in the sidebar is derived from this forest plus
//! the current location.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in the navigation forest.
///
/// An entry with children is a branch, rendered as a disclosure. An entry
/// with a path is navigable. The two are independent: an entry may be both,
/// and an entry with neither renders to nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display title. Unique among siblings; node identity derives from it.
    pub title: String,
    /// Absolute route this entry links to, if it is navigable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Ordered child entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    /// Create a navigable entry without children.
    pub fn link(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    /// Create a non-navigable entry (a pure section label).
    pub fn group(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: None,
            children: Vec::new(),
        }
    }

    /// Attach children, making this entry a branch.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NavEntry>) -> Self {
        self.children = children;
        self
    }

    /// True if this entry has at least one child.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// True if this entry has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True if this entry links somewhere.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.path.is_some()
    }
}

/// Entry in the quick-access strip shown at the top of the mobile sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    /// Display title.
    pub title: String,
    /// Link target (absolute route or full URL).
    pub href: String,
    /// External links open in a new tab.
    #[serde(default)]
    pub external: bool,
}

impl QuickLink {
    /// Create a site-internal quick link.
    pub fn internal(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            external: false,
        }
    }

    /// Create an external quick link.
    pub fn external(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            external: true,
        }
    }
}

/// Stable identity of an entry within a forest.
///
/// Minted from the title path: the titles of the ancestor chain joined with
/// `/`. Sibling titles are locally unique, so the joined path identifies
/// exactly one node, and two branches sharing a title under different
/// parents keep distinct identities (and distinct open/closed state).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(String);

impl NodeId {
    /// Identity of a root entry.
    #[must_use]
    pub fn root(title: &str) -> Self {
        Self(title.to_owned())
    }

    /// Identity of a child of this node.
    #[must_use]
    pub fn child(&self, title: &str) -> Self {
        Self(format!("{}/{title}", self.0))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visit every entry of the forest in pre-order.
///
/// The callback receives the minted [`NodeId`], the entry, and its depth
/// (0 for roots).
pub fn walk(forest: &[NavEntry], f: &mut impl FnMut(&NodeId, &NavEntry, usize)) {
    walk_level(forest, None, 0, f);
}

fn walk_level(
    entries: &[NavEntry],
    parent: Option<&NodeId>,
    depth: usize,
    f: &mut impl FnMut(&NodeId, &NavEntry, usize),
) {
    for entry in entries {
        let id = match parent {
            Some(parent) => parent.child(&entry.title),
            None => NodeId::root(&entry.title),
        };
        f(&id, entry, depth);
        walk_level(&entry.children, Some(&id), depth + 1, f);
    }
}
