//! `[[theme.social]]` configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A social link shown in the site header.
///
/// The icon name belongs to the consuming generator's icon set; folio
/// only checks it is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Icon name (e.g., "github", "mastodon").
    pub icon: String,

    /// Absolute URL of the profile or repository.
    pub link: String,
}

/// Validate social links: icon present, link a well-formed http(s) URL.
pub fn validate_social(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    for (i, social) in links.iter().enumerate() {
        let icon_field = FieldPath::from_string(format!("theme.social[{i}].icon"));
        let link_field = FieldPath::from_string(format!("theme.social[{i}].link"));

        if social.icon.trim().is_empty() {
            diag.error(icon_field, "must not be empty");
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&social.link) {
            Ok(parsed) => {
                // Must be http or https, with a valid host
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        link_field,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/example",
                    );
                } else if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        link_field,
                        "URL must have a valid host",
                        "use format like https://github.com/example",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    link_field,
                    format!("invalid URL: {}", e),
                    "use format like https://github.com/example",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(icon: &str, link: &str) -> SocialLink {
        SocialLink {
            icon: icon.into(),
            link: link.into(),
        }
    }

    #[test]
    fn test_valid_social_passes() {
        let links = vec![social(
            "github",
            "https://github.com/example/handbook/tree/master",
        )];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&links, &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_relative_link_fails() {
        let links = vec![social("github", "/about")];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&links, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_non_http_scheme_fails() {
        let links = vec![social("email", "mailto:user@example.com")];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&links, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_empty_icon_fails() {
        let links = vec![social("", "https://example.com")];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&links, &mut diag);
        assert_eq!(diag.len(), 1);
    }
}
