//! Site initialization module.
//!
//! Creates new site structure with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration file and starter content generation

mod config;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write configuration file and starter pages
/// 4. Write ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate::validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    // Content dir is absolute after finalize; recover the root-relative form
    let content_dir = site_config.root_relative(&site_config.content.dir);

    structure::create_structure(root, &content_dir)?;

    config::write_config(root)?;
    config::write_starter_content(root, &content_dir)?;
    config::write_ignore_files(root)?;

    log!("init"; "Site initialized successfully");
    Ok(())
}
