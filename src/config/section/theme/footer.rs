//! `[theme.footer]` configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Generated-style field path accessors.
pub struct FooterFields {
    pub message: FieldPath,
    pub copyright: FieldPath,
}

/// Footer text shown on every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer message line.
    pub message: String,

    /// Copyright line.
    pub copyright: String,
}

impl FooterConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: FooterFields = FooterFields {
        message: FieldPath::new("theme.footer.message"),
        copyright: FieldPath::new("theme.footer.copyright"),
    };

    /// Both footer fields must be non-empty strings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.message.trim().is_empty() {
            diag.error(Self::FIELDS.message, "must not be empty");
        }
        if self.copyright.trim().is_empty() {
            diag.error(Self::FIELDS.copyright, "must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_footer_passes() {
        let footer = FooterConfig {
            message: "Training material for internal use.".into(),
            copyright: "©".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_empty_fields_fail() {
        let footer = FooterConfig::default();
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_whitespace_only_fails() {
        let footer = FooterConfig {
            message: "  ".into(),
            copyright: "\t".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
