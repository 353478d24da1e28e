//! Sidebar presenter for the WFS documentation site.
//!
//! Turns the navigation forest into a tree of renderable nodes, emits the
//! site's sidebar markup, and dispatches clicks on the rendered controls.
//! The node tree is also serializable, so the frontend can consume it as
//! JSON instead of prerendered HTML.
//!
//! # Example
//!
//! ```
//! use wfs_nav::{DisclosureState, NavEntry};
//! use wfs_render::{nav_list_html, render_forest};
//!
//! let forest = vec![
//!     NavEntry::link("Blog", "/blog")
//!         .with_children(vec![NavEntry::link("FAQ", "/blog/005-faq")]),
//! ];
//! let disclosure = DisclosureState::expanded(&forest);
//!
//! let nodes = render_forest(&forest, "/blog/005-faq", &disclosure);
//! let html = nav_list_html(&nodes);
//! assert!(html.contains(r#"class="nav-link active""#));
//! ```

mod html;
mod interaction;
mod node;

pub use html::{escape_html, nav_list_html, sidebar_html};
pub use interaction::{ClickOutcome, ClickTarget, dispatch_click};
pub use node::{DisclosureNode, LinkNode, SidebarNode, render_forest};
