//! Click dispatch for the rendered sidebar controls.
//!
//! Makes the propagation rule explicit: a click on the navigable label
//! inside a disclosure trigger stops at the link, so it navigates without
//! toggling the branch.

use wfs_nav::{DisclosureState, NodeId};

/// A click on one of the rendered sidebar controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget<'a> {
    /// A plain leaf link.
    Link {
        /// Route of the clicked link.
        href: &'a str,
    },
    /// A disclosure trigger, outside its link label.
    Trigger {
        /// Identity of the branch.
        id: &'a NodeId,
    },
    /// The navigable label inside a disclosure trigger.
    TriggerLink {
        /// Identity of the branch the label belongs to.
        id: &'a NodeId,
        /// Route of the label.
        href: &'a str,
    },
}

/// Result of dispatching a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Navigate to the route; disclosure state untouched.
    Navigate {
        /// Route to navigate to.
        href: String,
    },
    /// The branch was toggled.
    Toggled {
        /// Identity of the toggled branch.
        id: NodeId,
        /// New open state.
        open: bool,
    },
}

/// Apply a click to the disclosure state.
pub fn dispatch_click(target: ClickTarget<'_>, disclosure: &mut DisclosureState) -> ClickOutcome {
    match target {
        ClickTarget::Link { href } | ClickTarget::TriggerLink { href, .. } => {
            ClickOutcome::Navigate {
                href: href.to_owned(),
            }
        }
        ClickTarget::Trigger { id } => {
            let open = disclosure.toggle(id);
            ClickOutcome::Toggled {
                id: id.clone(),
                open,
            }
        }
    }
}
