//! Disclosure (accordion) open-state tracking.
//!
//! The sidebar starts fully expanded: every branch is in the default-open
//! set, independent of the current location. The tree is shallow and small,
//! so discoverability wins over a minimal open set, and every ancestor chain
//! of the active entry is trivially expanded on load.

use std::collections::BTreeSet;

use crate::entry::{NavEntry, NodeId, walk};

/// Collect the ids of every branch in the forest, at any depth.
///
/// Pre-order traversal; the result does not depend on the current path.
#[must_use]
pub fn default_open_ids(forest: &[NavEntry]) -> BTreeSet<NodeId> {
    let mut ids = BTreeSet::new();
    walk(forest, &mut |id, entry, _depth| {
        if entry.is_branch() {
            ids.insert(id.clone());
        }
    });
    ids
}

/// Open/closed state of the disclosure tree.
///
/// Branches toggle independently; any number may be open at once. The state
/// is initialized once per mount and is not recomputed when the current path
/// changes afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureState {
    open: BTreeSet<NodeId>,
}

impl DisclosureState {
    /// State with every branch of `forest` open.
    #[must_use]
    pub fn expanded(forest: &[NavEntry]) -> Self {
        Self {
            open: default_open_ids(forest),
        }
    }

    /// State with every branch closed.
    #[must_use]
    pub fn collapsed() -> Self {
        Self::default()
    }

    /// True if the branch is currently expanded.
    #[must_use]
    pub fn is_open(&self, id: &NodeId) -> bool {
        self.open.contains(id)
    }

    /// Flip a branch, returning its new open state.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.clone());
            true
        }
    }

    /// Expand a branch.
    pub fn open(&mut self, id: &NodeId) {
        self.open.insert(id.clone());
    }

    /// Collapse a branch.
    pub fn close(&mut self, id: &NodeId) {
        self.open.remove(id);
    }

    /// Ids currently open, in sorted order.
    pub fn open_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.open.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn forest() -> Vec<NavEntry> {
        vec![NavEntry::link("Blog", "/blog").with_children(vec![
            NavEntry::link("Quick Start Tutorial", "/blog/002-quick-start-tutorial"),
            NavEntry::link("FAQ", "/blog/005-faq"),
            NavEntry::link("Use Cases", "/use-case").with_children(vec![
                NavEntry::link("Data Analysis Workflow", "/use-case/data-analysis"),
                NavEntry::link("Code Review Workflow", "/use-case/code-review"),
            ]),
        ])]
    }

    #[test]
    fn test_default_open_ids_collects_branches_at_any_depth() {
        let ids = default_open_ids(&forest());

        let expected: BTreeSet<NodeId> = [
            NodeId::root("Blog"),
            NodeId::root("Blog").child("Use Cases"),
        ]
        .into_iter()
        .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_default_open_ids_ignores_leaves() {
        let forest = vec![NavEntry::link("About", "/about")];

        assert!(default_open_ids(&forest).is_empty());
    }

    #[test]
    fn test_default_open_ids_empty_forest() {
        assert!(default_open_ids(&[]).is_empty());
    }

    #[test]
    fn test_single_branch_forest_opens_that_branch() {
        let forest = vec![
            NavEntry::link("Blog", "/blog")
                .with_children(vec![NavEntry::link("FAQ", "/blog/005-faq")]),
        ];

        let ids = default_open_ids(&forest);

        assert_eq!(ids.len(), 1);
        assert!(ids.contains(&NodeId::root("Blog")));
    }

    #[test]
    fn test_expanded_opens_every_branch() {
        let state = DisclosureState::expanded(&forest());

        assert!(state.is_open(&NodeId::root("Blog")));
        assert!(state.is_open(&NodeId::root("Blog").child("Use Cases")));
    }

    #[test]
    fn test_collapsed_has_nothing_open() {
        let state = DisclosureState::collapsed();

        assert!(!state.is_open(&NodeId::root("Blog")));
        assert_eq!(state.open_ids().count(), 0);
    }

    #[test]
    fn test_toggle_flips_and_reports_new_state() {
        let mut state = DisclosureState::collapsed();
        let id = NodeId::root("Blog");

        assert!(state.toggle(&id));
        assert!(state.is_open(&id));
        assert!(!state.toggle(&id));
        assert!(!state.is_open(&id));
    }

    #[test]
    fn test_branches_toggle_independently() {
        let mut state = DisclosureState::expanded(&forest());
        let blog = NodeId::root("Blog");
        let use_cases = blog.child("Use Cases");

        state.toggle(&use_cases);

        assert!(state.is_open(&blog));
        assert!(!state.is_open(&use_cases));
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let mut state = DisclosureState::collapsed();
        let id = NodeId::root("Blog");

        state.open(&id);
        state.open(&id);
        assert!(state.is_open(&id));

        state.close(&id);
        state.close(&id);
        assert!(!state.is_open(&id));
    }
}
