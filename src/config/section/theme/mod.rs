//! `[theme]` section configuration.
//!
//! The navigation surface the generator renders: top navigation, sidebar
//! tree, social links, and the footer.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! label = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! label = "Day 1 – Theory"
//!
//! [[theme.sidebar.items]]
//! label = "Introduction to testing"
//! link = "/day-1/introduction"
//!
//! [[theme.social]]
//! icon = "github"
//! link = "https://github.com/example/handbook"
//!
//! [theme.footer]
//! message = "Training material for internal use."
//! copyright = "©"
//! ```

mod footer;
mod nav;
mod sidebar;
mod social;

pub use footer::FooterConfig;
pub use nav::NavItem;
pub use sidebar::{SidebarItem, SidebarSection};
pub use social::SocialLink;

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Theme configuration: nav, sidebar, social links, footer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Top navigation items, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar sections, in display order.
    pub sidebar: Vec<SidebarSection>,

    /// Social links shown in the site header.
    pub social: Vec<SocialLink>,

    /// Footer text.
    pub footer: FooterConfig,
}

impl ThemeSectionConfig {
    /// Validate the theme structurally (shape, duplicates, non-empty
    /// fields). Link resolution against content pages happens in the
    /// `validate` command, which has the page store.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        nav::validate_nav(&self.nav, diag);
        sidebar::validate_sidebar(&self.sidebar, diag);
        social::validate_social(&self.social, diag);
        self.footer.validate(diag);
    }

    /// Iterate all internal nav and sidebar links with their field paths.
    ///
    /// External links are skipped; the `validate` command resolves the
    /// rest against the page store.
    pub fn internal_links(&self) -> impl Iterator<Item = (String, &str)> {
        let nav = self
            .nav
            .iter()
            .enumerate()
            .map(|(i, item)| (format!("theme.nav[{i}].link"), item.link.as_str()));

        let sidebar = self.sidebar.iter().enumerate().flat_map(|(s, section)| {
            section.items.iter().enumerate().map(move |(i, item)| {
                (
                    format!("theme.sidebar[{s}].items[{i}].link"),
                    item.link.as_str(),
                )
            })
        });

        nav.chain(sidebar)
            .filter(|(_, link)| !crate::utils::path::is_external_link(link))
    }
}
