//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module     | TOML Section   | Purpose                           |
//! |------------|----------------|-----------------------------------|
//! | `site`     | `[site]`       | Base path, language, title, desc  |
//! | `content`  | `[content]`    | Content directory                 |
//! | `theme`    | `[theme]`      | Nav, sidebar, social, footer      |
//! | `validate` | `[validate]`   | Link validation settings          |

mod content;
mod site;
pub mod theme;
mod validate;

// Re-export section configs
pub use content::ContentConfig;
pub use site::SiteSectionConfig;
pub use theme::{
    FooterConfig, NavItem, SidebarItem, SidebarSection, SocialLink, ThemeSectionConfig,
};
pub use validate::{ContentValidateConfig, NavValidateConfig, ValidateConfig, ValidateLevel};
