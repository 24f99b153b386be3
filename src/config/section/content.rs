//! `[content]` section configuration.
//!
//! Locates the content pages the theme links resolve against.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Generated-style field path accessors.
pub struct ContentFields {
    pub dir: FieldPath,
}

/// Content directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory, relative to the site root.
    pub dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs"),
        }
    }
}

impl ContentConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: ContentFields = ContentFields {
        dir: FieldPath::new("content.dir"),
    };

    /// Pre-normalization check: the configured dir must be relative.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.dir,
                format!("'{}' must be relative to the site root", self.dir.display()),
                "use a path like \"docs\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dir() {
        assert_eq!(ContentConfig::default().dir, PathBuf::from("docs"));
    }

    #[test]
    fn test_absolute_dir_rejected() {
        let config = ContentConfig {
            dir: PathBuf::from("/etc/docs"),
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate_paths(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_relative_dir_accepted() {
        let config = ContentConfig::default();
        let mut diag = ConfigDiagnostics::new();
        config.validate_paths(&mut diag);
        assert!(!diag.has_errors());
    }
}
