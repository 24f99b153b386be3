//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each config section declares a `FIELDS` const holding the dotted TOML
/// path of every reportable field, so diagnostics always name the exact
/// key to fix.
///
/// # Example
///
/// ```ignore
/// diag.error(SiteSectionConfig::FIELDS.title, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Build a field path at runtime (for indexed entries like
    /// `theme.nav[2].link`). Leaks the string; diagnostics are few and
    /// live until exit anyway.
    pub fn from_string(path: String) -> Self {
        Self(Box::leak(path.into_boxed_str()))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_roundtrip() {
        let path = FieldPath::from_string(format!("theme.nav[{}].link", 2));
        assert_eq!(path.as_str(), "theme.nav[2].link");
    }
}
