//! Configuration file generation.
//!
//! Creates folio.toml, starter content, and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "folio.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Starter pages: (path under the content dir, contents).
///
/// Kept consistent with the template's nav and sidebar so a fresh site
/// validates clean.
const STARTER_PAGES: &[(&str, &str)] = &[
    (
        "index.md",
        "# My Handbook\n\nWelcome. Start with the [guide](/guide/getting-started).\n",
    ),
    (
        "guide/getting-started.md",
        "# Getting started\n\nEdit `folio.toml` and the pages under this directory,\n\
         then run `folio validate`.\n",
    ),
];

/// Generate folio.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# Folio configuration file (v{version})
# https://github.com/folio-rs/folio

[site]
base = "/"                      # served path, must begin and end with '/'
language = "en"                 # BCP 47 tag, e.g. "en" or "et-EE"
title = "My Handbook"
description = "A documentation site"

[content]
dir = "docs"                    # content pages, relative to the site root

[[theme.nav]]
label = "Home"
link = "/"

[[theme.nav]]
label = "Guide"
link = "/guide/getting-started"

[[theme.sidebar]]
label = "Guide"

[[theme.sidebar.items]]
label = "Getting started"
link = "/guide/getting-started"

[[theme.social]]
icon = "github"
link = "https://github.com/folio-rs/folio"

[theme.footer]
message = "Built with folio."
copyright = "© My Handbook authors"

[validate]
orphans = true                  # hint on pages missing from nav and sidebar

[validate.nav]
enable = true
level = "error"                 # error | warn

[validate.content]
enable = true
level = "error"
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write default folio.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write starter content pages matching the template's nav and sidebar
pub fn write_starter_content(root: &Path, content_dir: &Path) -> Result<()> {
    let content_root = root.join(content_dir);

    for (rel, body) in STARTER_PAGES {
        let path = content_root.join(rel);
        // Only create if doesn't exist (don't overwrite user's pages)
        if !path.exists() {
            fs::write(&path, body)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Generator output directory (`/dist/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/dist/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
