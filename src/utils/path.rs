//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - `normalize_path` - filesystem paths (canonicalize + fallback)
//! - `resolve_path` - resolve relative paths with fallback directory
//! - `is_external_link` - link scheme detection
//! - `split_path_fragment` - separate a URL path from its anchor

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path that may be relative to cwd or a fallback directory.
///
/// Always returns an absolute path.
///
/// Tries in order:
/// 1. If absolute, use as-is
/// 2. If exists relative to cwd, normalize to absolute
/// 3. Otherwise, resolve relative to fallback_dir
///
/// # Example
/// ```ignore
/// // User passes "day-1/introduction.md", fallback is the content dir
/// let resolved = resolve_path(Path::new("day-1/introduction.md"), content_dir);
/// ```
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    // Absolute path: use as-is
    if path.is_absolute() {
        return path.to_path_buf();
    }

    // Try cwd-relative first (handles `docs/day-1/introduction.md`)
    if path.exists() {
        return normalize_path(path);
    }

    // Fall back to fallback_dir-relative (handles `day-1/introduction.md`)
    normalize_path(&fallback_dir.join(path))
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/guide"));
/// assert!(!is_external_link("./sibling"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
///
/// # Returns
/// A tuple of (path, fragment) where fragment is empty string if no `#` found
///
/// # Examples
/// ```ignore
/// assert_eq!(split_path_fragment("/guide#setup"), ("/guide", "setup"));
/// assert_eq!(split_path_fragment("/guide"), ("/guide", ""));
/// ```
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.md");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.md");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path_absolute() {
        let path = Path::new("/absolute/path");
        let resolved = resolve_path(path, Path::new("/fallback"));
        assert_eq!(resolved, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_resolve_path_fallback() {
        // Non-existent relative path should use fallback
        let path = Path::new("nonexistent/path");
        let resolved = resolve_path(path, Path::new("/fallback"));
        assert_eq!(resolved, PathBuf::from("/fallback/nonexistent/path"));
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/guide"));
        assert!(!is_external_link("./sibling.md"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/guide#setup"), ("/guide", "setup"));
        assert_eq!(split_path_fragment("/guide"), ("/guide", ""));
        assert_eq!(split_path_fragment("#section"), ("", "section"));
    }
}
