//! HTML emission for the sidebar.
//!
//! Serializes the renderable node tree into the site's markup. Disclosure
//! content is always emitted; `data-state` carries the open/closed state so
//! visibility is a styling concern. All user text and URLs are escaped.

use std::fmt::Write;

use wfs_nav::QuickLink;

use crate::node::SidebarNode;

/// Escape HTML special characters for text and attribute contexts.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render the accordion list markup for a slice of sidebar nodes.
#[must_use]
pub fn nav_list_html(nodes: &[SidebarNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &SidebarNode, out: &mut String) {
    match node {
        SidebarNode::Link(link) => {
            write!(
                out,
                r#"<div class="nav-item level-{}"><a href="{}" class="nav-link{}">{}</a></div>"#,
                link.level,
                escape_html(&link.href),
                if link.active { " active" } else { "" },
                escape_html(&link.title)
            )
            .unwrap();
        }
        SidebarNode::Disclosure(branch) => {
            let state = if branch.open { "open" } else { "closed" };
            write!(
                out,
                r#"<div class="accordion-item level-{}{}" data-state="{state}">"#,
                branch.level,
                if branch.contains_active {
                    " contains-active"
                } else {
                    ""
                }
            )
            .unwrap();
            write!(
                out,
                r#"<button type="button" class="accordion-trigger" data-node="{}" aria-expanded="{}">"#,
                escape_html(branch.id.as_str()),
                branch.open
            )
            .unwrap();
            out.push_str(r#"<span class="chevron-icon" aria-hidden="true"></span>"#);
            match &branch.href {
                Some(href) => write!(
                    out,
                    r#"<a href="{}" class="nav-link{}">{}</a>"#,
                    escape_html(href),
                    if branch.active { " active" } else { "" },
                    escape_html(&branch.title)
                )
                .unwrap(),
                None => write!(
                    out,
                    r#"<span class="nav-label">{}</span>"#,
                    escape_html(&branch.title)
                )
                .unwrap(),
            }
            out.push_str("</button>");
            write!(
                out,
                r#"<div class="accordion-content" data-state="{state}"><div class="nav-children">"#
            )
            .unwrap();
            for child in &branch.children {
                write_node(child, out);
            }
            out.push_str("</div></div></div>");
        }
    }
}

/// Render the full sidebar shell: overlay, aside, quick links, nav list.
///
/// The overlay intercept region exists only while the mobile sidebar is
/// open; clicking it requests a close. Quick links marked external open in
/// a new tab.
#[must_use]
pub fn sidebar_html(nodes: &[SidebarNode], quick_links: &[QuickLink], open: bool) -> String {
    let mut out = String::new();
    if open {
        out.push_str(r#"<div class="sidebar-overlay" data-menu-close aria-hidden="true"></div>"#);
    }
    write!(
        out,
        r#"<aside class="sidebar{}"><nav class="sidebar-nav">"#,
        if open { " sidebar-open" } else { "" }
    )
    .unwrap();
    if !quick_links.is_empty() {
        out.push_str(r#"<div class="mobile-top-nav">"#);
        for link in quick_links {
            let target = if link.external {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            write!(
                out,
                r#"<a href="{}" class="mobile-nav-link"{target}>{}</a>"#,
                escape_html(&link.href),
                escape_html(&link.title)
            )
            .unwrap();
        }
        out.push_str("</div>");
    }
    write!(out, r#"<div class="nav-list">{}</div>"#, nav_list_html(nodes)).unwrap();
    out.push_str("</nav></aside>");
    out
}

#[cfg(test)]
mod tests {
    use wfs_nav::{DisclosureState, NavEntry};

    use super::*;
    use crate::node::render_forest;

    fn forest() -> Vec<NavEntry> {
        vec![
            NavEntry::link("Blog", "/blog")
                .with_children(vec![NavEntry::link("FAQ", "/blog/005-faq")]),
        ]
    }

    #[test]
    fn test_escape_html_covers_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Q&A's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Q&amp;A&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_active_link_gets_active_class() {
        let nodes = render_forest(
            &[NavEntry::link("About", "/about")],
            "/about",
            &DisclosureState::collapsed(),
        );

        let html = nav_list_html(&nodes);

        assert!(html.contains(r#"<a href="/about" class="nav-link active">About</a>"#));
        assert!(html.contains(r#"class="nav-item level-0""#));
    }

    #[test]
    fn test_open_disclosure_markup() {
        let disclosure = DisclosureState::expanded(&forest());
        let nodes = render_forest(&forest(), "/blog/005-faq", &disclosure);

        let html = nav_list_html(&nodes);

        assert!(html.contains(r#"data-state="open""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"data-node="Blog""#));
        assert!(html.contains(r#"<span class="chevron-icon" aria-hidden="true"></span>"#));
        // The trigger label is itself a link, marked active by prefix match.
        assert!(html.contains(r#"<a href="/blog" class="nav-link active">Blog</a>"#));
    }

    #[test]
    fn test_closed_disclosure_still_emits_children() {
        let nodes = render_forest(&forest(), "/", &DisclosureState::collapsed());

        let html = nav_list_html(&nodes);

        assert!(html.contains(r#"data-state="closed""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains("FAQ"));
    }

    #[test]
    fn test_branch_without_path_uses_label_span() {
        let forest =
            vec![NavEntry::group("Guides").with_children(vec![NavEntry::link("A", "/a")])];
        let nodes = render_forest(&forest, "/", &DisclosureState::collapsed());

        let html = nav_list_html(&nodes);

        assert!(html.contains(r#"<span class="nav-label">Guides</span>"#));
    }

    #[test]
    fn test_titles_are_escaped() {
        let nodes = render_forest(
            &[NavEntry::link("Q&A", "/qa")],
            "/",
            &DisclosureState::collapsed(),
        );

        let html = nav_list_html(&nodes);

        assert!(html.contains("Q&amp;A"));
    }

    #[test]
    fn test_overlay_only_rendered_while_open() {
        let nodes = render_forest(&forest(), "/", &DisclosureState::collapsed());

        let closed = sidebar_html(&nodes, &[], false);
        let open = sidebar_html(&nodes, &[], true);

        assert!(!closed.contains("sidebar-overlay"));
        assert!(!closed.contains("sidebar-open"));
        assert!(open.contains(r#"<div class="sidebar-overlay" data-menu-close aria-hidden="true"></div>"#));
        assert!(open.contains(r#"<aside class="sidebar sidebar-open">"#));
    }

    #[test]
    fn test_quick_links_strip() {
        let quick_links = vec![
            QuickLink::internal("Home", "/"),
            QuickLink::external("GitHub", "https://github.com/example/site"),
        ];

        let html = sidebar_html(&[], &quick_links, false);

        assert!(html.contains(r#"<a href="/" class="mobile-nav-link">Home</a>"#));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
    }

    #[test]
    fn test_no_quick_links_no_strip() {
        let html = sidebar_html(&[], &[], false);

        assert!(!html.contains("mobile-top-nav"));
    }
}
