//! `[[theme.sidebar]]` configuration.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::nav::{link_key, validate_link_shape};
use crate::config::{ConfigDiagnostics, FieldPath};

/// A sidebar section: a label grouping an ordered list of page links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarSection {
    /// Section heading.
    pub label: String,

    /// Page links shown under the heading, in display order.
    pub items: Vec<SidebarItem>,
}

/// A single sidebar entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarItem {
    /// Display label.
    pub label: String,

    /// Link target: a site-root path or an external URL.
    pub link: String,
}

/// Validate the sidebar tree: non-empty labels, unique section labels,
/// absolute internal links, and no duplicate targets within a section.
pub fn validate_sidebar(sections: &[SidebarSection], diag: &mut ConfigDiagnostics) {
    let mut seen_sections: FxHashMap<String, usize> = FxHashMap::default();

    for (s, section) in sections.iter().enumerate() {
        let section_field = FieldPath::from_string(format!("theme.sidebar[{s}].label"));

        if section.label.trim().is_empty() {
            diag.error(section_field, "must not be empty");
        } else if let Some(first) = seen_sections.insert(section.label.trim().to_string(), s) {
            diag.error(
                section_field,
                format!(
                    "duplicate section label '{}' (also at theme.sidebar[{first}])",
                    section.label
                ),
            );
        }

        if section.items.is_empty() {
            diag.warn(section_field, "section has no items");
        }

        let mut seen_links: FxHashMap<String, usize> = FxHashMap::default();
        for (i, item) in section.items.iter().enumerate() {
            let label_field =
                FieldPath::from_string(format!("theme.sidebar[{s}].items[{i}].label"));
            let link_field = FieldPath::from_string(format!("theme.sidebar[{s}].items[{i}].link"));

            if item.label.trim().is_empty() {
                diag.error(label_field, "must not be empty");
            }

            validate_link_shape(&item.link, link_field, diag);

            if let Some(key) = link_key(&item.link)
                && let Some(first) = seen_links.insert(key, i)
            {
                diag.error(
                    link_field,
                    format!(
                        "duplicate link '{}' (also at theme.sidebar[{s}].items[{first}])",
                        item.link
                    ),
                );
            }
        }
    }
}
