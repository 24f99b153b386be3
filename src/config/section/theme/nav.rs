//! `[[theme.nav]]` configuration.

use serde::{Deserialize, Serialize};
use rustc_hash::FxHashMap;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{LinkKind, RoutePath};

/// A single top-navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link target: a site-root path ("/day-1/introduction") or an
    /// external URL.
    pub link: String,
}

/// Validate the nav list: non-empty fields, absolute internal links, and
/// no duplicate labels or targets.
pub fn validate_nav(items: &[NavItem], diag: &mut ConfigDiagnostics) {
    let mut seen_labels: FxHashMap<String, usize> = FxHashMap::default();
    let mut seen_links: FxHashMap<String, usize> = FxHashMap::default();

    for (i, item) in items.iter().enumerate() {
        let label_field = FieldPath::from_string(format!("theme.nav[{i}].label"));
        let link_field = FieldPath::from_string(format!("theme.nav[{i}].link"));

        if item.label.trim().is_empty() {
            diag.error(label_field, "must not be empty");
        } else if let Some(first) = seen_labels.insert(item.label.trim().to_string(), i) {
            diag.error(
                label_field,
                format!("duplicate label '{}' (also at theme.nav[{first}])", item.label),
            );
        }

        validate_link_shape(&item.link, link_field, diag);

        if let Some(key) = link_key(&item.link)
            && let Some(first) = seen_links.insert(key, i)
        {
            diag.error(
                link_field,
                format!("duplicate link '{}' (also at theme.nav[{first}])", item.link),
            );
        }
    }
}

/// Check a nav/sidebar link syntactically.
///
/// Internal links must be absolute (site-root); fragments and relative
/// paths have no stable meaning outside a page body.
pub(super) fn validate_link_shape(link: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if link.trim().is_empty() {
        diag.error(field, "must not be empty");
        return;
    }

    match LinkKind::parse(link) {
        LinkKind::External(_) | LinkKind::SiteRoot(_) => {}
        LinkKind::Fragment(_) | LinkKind::FileRelative(_) => {
            diag.error_with_hint(
                field,
                format!("'{link}' is not an absolute path"),
                "links outside page bodies must start with '/'",
            );
        }
    }
}

/// Normalized duplicate-detection key for a link.
///
/// Internal links compare by route ("/guide" == "/guide/"); external
/// links compare verbatim.
pub(super) fn link_key(link: &str) -> Option<String> {
    if link.trim().is_empty() {
        return None;
    }
    match LinkKind::parse(link) {
        LinkKind::External(url) => Some(url.to_string()),
        LinkKind::SiteRoot(path) => Some(RoutePath::from_link(path).as_str().to_string()),
        _ => None,
    }
}
