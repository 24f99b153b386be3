//! `[validate]` section configuration.
//!
//! Configuration for the `folio validate` command.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! orphans = true              # Hint on pages absent from nav and sidebar
//!
//! [validate.nav]
//! enable = true               # Resolve nav/sidebar links to content pages
//! level = "error"             # Failure level: error | warn
//!
//! [validate.content]
//! enable = true               # Resolve links inside content pages
//! level = "error"             # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Main ValidateConfig
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Hint on content pages reachable from neither nav nor sidebar.
    pub orphans: bool,

    /// Nav and sidebar link validation settings.
    pub nav: NavValidateConfig,

    /// Content page link validation settings.
    pub content: ContentValidateConfig,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            orphans: true,
            nav: NavValidateConfig::default(),
            content: ContentValidateConfig::default(),
        }
    }
}

// ============================================================================
// Per-check settings
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavValidateConfig {
    /// Enable nav/sidebar link validation.
    pub enable: bool,

    /// How to treat validation failures: "error" or "warn".
    pub level: ValidateLevel,
}

impl Default for NavValidateConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: ValidateLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentValidateConfig {
    /// Enable content page link validation.
    pub enable: bool,

    /// How to treat validation failures: "error" or "warn".
    pub level: ValidateLevel,
}

impl Default for ContentValidateConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: ValidateLevel::default(),
        }
    }
}

/// Validation error level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Treat validation failures as errors (command fails).
    #[default]
    Error,
    /// Treat validation failures as warnings (command succeeds).
    Warn,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_validate_config_defaults() {
        let config = test_parse_config("");
        assert!(config.validate.nav.enable);
        assert!(config.validate.content.enable);
        assert!(config.validate.orphans);
        assert_eq!(config.validate.nav.level, ValidateLevel::Error);
    }

    #[test]
    fn test_validate_config_custom() {
        let config = test_parse_config(
            r#"[validate]
orphans = false

[validate.nav]
enable = true
level = "warn"

[validate.content]
enable = false
level = "warn""#,
        );
        assert!(!config.validate.orphans);
        assert!(config.validate.nav.enable);
        assert!(!config.validate.content.enable);
        assert_eq!(config.validate.nav.level, ValidateLevel::Warn);
    }
}
