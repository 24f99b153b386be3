//! Route path type for type-safe page URL handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Always starts and ends with `/`, so two routes compare by equality

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded, normalized page route
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Always ends with `/` (trailing slash is canonical form)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Create a page route. Normalizes leading/trailing slashes and strips
    /// query string and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        // Use url crate to properly strip query and fragment
        let path = Self::strip_query_fragment(trimmed);

        // Add leading slash if missing
        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        // Add trailing slash if missing
        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{}/", with_leading)
        };

        Self(Arc::from(normalized))
    }

    /// Create a route from a user-written link.
    ///
    /// Tolerates everything `from_page` tolerates, plus a `.html` or `.md`
    /// suffix (generators rewrite both to the extensionless page route).
    pub fn from_link(link: &str) -> Self {
        let (path, _fragment) = crate::utils::path::split_path_fragment(link);
        let path = path
            .strip_suffix(".html")
            .or_else(|| path.strip_suffix(".md"))
            .unwrap_or(path);
        Self::from_page(path)
    }

    /// Strip query string and fragment from a path using url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // Use a dummy base URL to parse the path
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // url crate returns percent-encoded path, decode it
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            // Fallback to simple split if url parsing fails
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded route as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the root route.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Get parent route.
    ///
    /// `/day-1/introduction/` -> `/day-1/`, `/day-1/` -> `/`, `/` -> `None`
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.rfind('/') {
            Some(0) => Some(Self(Arc::from("/"))),
            Some(idx) => Some(Self(Arc::from(format!("{}/", &trimmed[..idx])))),
            None => Some(Self(Arc::from("/"))),
        }
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RoutePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoutePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page() {
        let route = RoutePath::from_page("/day-1/introduction/");
        assert_eq!(route.as_str(), "/day-1/introduction/");
    }

    #[test]
    fn test_from_page_adds_slashes() {
        assert_eq!(
            RoutePath::from_page("day-1/introduction").as_str(),
            "/day-1/introduction/"
        );
    }

    #[test]
    fn test_from_page_root() {
        assert_eq!(RoutePath::from_page("/").as_str(), "/");
        assert_eq!(RoutePath::from_page("").as_str(), "/");
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        assert_eq!(
            RoutePath::from_page("/guide?v=1#setup").as_str(),
            "/guide/"
        );
    }

    #[test]
    fn test_from_page_decodes_unicode() {
        let route = RoutePath::from_page("/p%C3%A4ev-1/");
        assert_eq!(route.as_str(), "/päev-1/");
    }

    #[test]
    fn test_from_link_strips_html_suffix() {
        assert_eq!(RoutePath::from_link("/guide.html").as_str(), "/guide/");
        assert_eq!(
            RoutePath::from_link("/day-2/practical-api-testing.html#setup").as_str(),
            "/day-2/practical-api-testing/"
        );
    }

    #[test]
    fn test_from_link_strips_md_suffix() {
        assert_eq!(
            RoutePath::from_link("/day-1/advanced-topics.md").as_str(),
            "/day-1/advanced-topics/"
        );
    }

    #[test]
    fn test_from_link_plain() {
        assert_eq!(
            RoutePath::from_link("/day-1/introduction").as_str(),
            "/day-1/introduction/"
        );
    }

    #[test]
    fn test_trailing_slash_equality() {
        assert_eq!(
            RoutePath::from_link("/guide"),
            RoutePath::from_link("/guide/")
        );
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            RoutePath::from_page("/day-1/introduction/").parent(),
            Some(RoutePath::from_page("/day-1/"))
        );
        assert_eq!(
            RoutePath::from_page("/day-1/").parent(),
            Some(RoutePath::from_page("/"))
        );
        assert_eq!(RoutePath::from_page("/").parent(), None);
    }

    #[test]
    fn test_is_root() {
        assert!(RoutePath::from_page("/").is_root());
        assert!(!RoutePath::from_page("/guide/").is_root());
    }

    #[test]
    fn test_hash_dedup() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(RoutePath::from_page("/guide/"));
        set.insert(RoutePath::from_page("/guide")); // same route
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize_deserialize() {
        let route = RoutePath::from_page("/day-1/introduction/");
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#""/day-1/introduction/""#);

        let parsed: RoutePath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, route);
    }
}
