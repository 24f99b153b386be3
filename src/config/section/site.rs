//! `[site]` section configuration.
//!
//! Basic site metadata: base path, language tag, title, description.
//! These values land verbatim in the exported configuration record.
//!
//! # Example
//!
//! ```toml
//! [site]
//! base = "/testing-handbook/"
//! language = "et-EE"
//! title = "Testing Handbook"
//! description = "A two-day training module"
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Plausible BCP 47 language tag: `et`, `et-EE`, `zh-Hans`, ...
static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").unwrap());

/// Generated-style field path accessors.
pub struct SiteSectionFields {
    pub base: FieldPath,
    pub language: FieldPath,
    pub title: FieldPath,
    pub description: FieldPath,
}

/// Site metadata exported to the generator record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Base path the site is served under (e.g., "/handbook/").
    pub base: String,

    /// Language tag (BCP 47, e.g., "en", "et-EE").
    pub language: String,

    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            base: "/".into(),
            language: "en".into(),
            title: String::new(),
            description: String::new(),
        }
    }
}

impl SiteSectionConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: SiteSectionFields = SiteSectionFields {
        base: FieldPath::new("site.base"),
        language: FieldPath::new("site.language"),
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
    };

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `base` must begin and end with `/`
    /// - `language` must look like a BCP 47 tag
    /// - `title` and `description` must be non-empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("'{}' must begin and end with '/'", self.base),
                "use \"/\" for sites served from the domain root",
            );
        }

        if !LANGUAGE_TAG.is_match(&self.language) {
            diag.error_with_hint(
                Self::FIELDS.language,
                format!("'{}' is not a valid language tag", self.language),
                "use a BCP 47 tag like \"en\" or \"et-EE\"",
            );
        }

        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "must not be empty");
        }

        if self.description.trim().is_empty() {
            diag.error(Self::FIELDS.description, "must not be empty");
        }
    }
}
