//! Active-entry matching against the current location.
//!
//! Pure functions over the navigation forest and the current route. The
//! current path is supplied per render and never stored.

use crate::entry::NavEntry;

/// Maximum tree depth the active-descendant search will descend.
///
/// The forest is acyclic by construction, but it may be loaded from a config
/// file, so descent is bounded rather than trusted.
pub const MAX_NAV_DEPTH: usize = 64;

/// True if `entry_path` matches the current location.
///
/// Matches exactly, or as a prefix anchored on a full path segment: `/blog`
/// is active for `/blog` and `/blog/post-1` but not for `/blogging`. Entries
/// without a path are never active.
#[must_use]
pub fn is_active(entry_path: Option<&str>, current_path: &str) -> bool {
    let Some(path) = entry_path else {
        return false;
    };
    current_path == path
        || current_path
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// True if the entry itself or any descendant is active.
///
/// Pre-order search, stopping at the first hit. Descent stops at
/// [`MAX_NAV_DEPTH`] levels; entries beyond the bound report inactive and a
/// warning is logged.
#[must_use]
pub fn has_active_descendant(entry: &NavEntry, current_path: &str) -> bool {
    search(entry, current_path, 0)
}

fn search(entry: &NavEntry, current_path: &str, depth: usize) -> bool {
    if depth >= MAX_NAV_DEPTH {
        tracing::warn!(
            title = %entry.title,
            "navigation tree deeper than {MAX_NAV_DEPTH} levels, stopping active search"
        );
        return false;
    }
    if is_active(entry.path.as_deref(), current_path) {
        return true;
    }
    entry
        .children
        .iter()
        .any(|child| search(child, current_path, depth + 1))
}
