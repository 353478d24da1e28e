//! Navigation tree core for the WFS documentation site.
//!
//! Pure data and queries: the [`NavEntry`] forest supplied by configuration,
//! active-entry matching against the current location, and the disclosure
//! open-state the sidebar renders from. No I/O and no rendering happen here.
//!
//! # Example
//!
//! ```
//! use wfs_nav::{DisclosureState, NavEntry, NodeId, is_active};
//!
//! let forest = vec![
//!     NavEntry::link("Blog", "/blog")
//!         .with_children(vec![NavEntry::link("FAQ", "/blog/005-faq")]),
//! ];
//!
//! assert!(is_active(Some("/blog"), "/blog/005-faq"));
//!
//! let disclosure = DisclosureState::expanded(&forest);
//! assert!(disclosure.is_open(&NodeId::root("Blog")));
//! ```

mod active;
mod disclosure;
mod entry;

pub use active::{MAX_NAV_DEPTH, has_active_descendant, is_active};
pub use disclosure::{DisclosureState, default_open_ids};
pub use entry::{NavEntry, NodeId, QuickLink, walk};
