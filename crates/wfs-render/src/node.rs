//! Renderable sidebar tree.
//!
//! Transforms the navigation forest plus the current location and disclosure
//! state into a tree of renderable nodes. Variants are chosen by capability,
//! not type: a navigable entry without children becomes a link, an entry
//! with children becomes a disclosure, and an entry with neither produces
//! nothing. No validation happens here; malformed entries pass through.

use serde::Serialize;

use wfs_nav::{DisclosureState, NavEntry, NodeId, has_active_descendant, is_active};

/// A renderable node of the sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SidebarNode {
    /// Plain navigable link.
    Link(LinkNode),
    /// Collapsible branch with an expand/collapse trigger.
    Disclosure(DisclosureNode),
}

/// A leaf link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkNode {
    /// Display title.
    pub title: String,
    /// Link target route.
    pub href: String,
    /// True if this link matches the current location.
    pub active: bool,
    /// Indentation depth, 0 for roots.
    pub level: usize,
}

/// A disclosure (branch) node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisclosureNode {
    /// Stable identity used to track open state.
    pub id: NodeId,
    /// Display title of the trigger label.
    pub title: String,
    /// Route of the trigger label, when the branch is itself navigable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// True if the trigger label matches the current location.
    pub active: bool,
    /// True if this entry or any descendant is active.
    pub contains_active: bool,
    /// Current expanded state.
    pub open: bool,
    /// Indentation depth, 0 for roots.
    pub level: usize,
    /// Child nodes. Always present; `open` only toggles their visibility.
    pub children: Vec<SidebarNode>,
}

/// Render the forest into sidebar nodes, starting at level 0.
#[must_use]
pub fn render_forest(
    forest: &[NavEntry],
    current_path: &str,
    disclosure: &DisclosureState,
) -> Vec<SidebarNode> {
    render_level(forest, current_path, disclosure, None, 0)
}

fn render_level(
    entries: &[NavEntry],
    current_path: &str,
    disclosure: &DisclosureState,
    parent: Option<&NodeId>,
    level: usize,
) -> Vec<SidebarNode> {
    let mut nodes = Vec::with_capacity(entries.len());
    for entry in entries {
        let active = is_active(entry.path.as_deref(), current_path);
        if entry.is_branch() {
            let id = match parent {
                Some(parent) => parent.child(&entry.title),
                None => NodeId::root(&entry.title),
            };
            let children =
                render_level(&entry.children, current_path, disclosure, Some(&id), level + 1);
            nodes.push(SidebarNode::Disclosure(DisclosureNode {
                open: disclosure.is_open(&id),
                contains_active: has_active_descendant(entry, current_path),
                id,
                title: entry.title.clone(),
                href: entry.path.clone(),
                active,
                level,
                children,
            }));
        } else if let Some(href) = &entry.path {
            nodes.push(SidebarNode::Link(LinkNode {
                title: entry.title.clone(),
                href: href.clone(),
                active,
                level,
            }));
        }
        // Neither path nor children: nothing to render.
    }
    nodes
}
