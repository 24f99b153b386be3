//! Page route - source file to route mapping.

use std::path::{Path, PathBuf};

use crate::core::RoutePath;

/// Source -> route mapping for a content page
///
/// # Example
///
/// ```text
/// Source: docs/day-1/introduction.md
///
/// PageRoute {
///     source:   docs/day-1/introduction.md
///     relative: day-1/introduction.md
///     is_index: false
///     route:    /day-1/introduction/
/// }
/// ```
///
/// `index.md` maps to the route of its directory:
///
/// ```text
/// docs/index.md        -> /
/// docs/day-2/index.md  -> /day-2/
/// ```
#[derive(Debug, Clone)]
pub struct PageRoute {
    /// Source file path (e.g., docs/day-1/introduction.md)
    pub source: PathBuf,
    /// Path relative to the content dir, for display
    pub relative: String,
    /// Whether this is an index file
    pub is_index: bool,
    /// Derived route (e.g., /day-1/introduction/)
    pub route: RoutePath,
}

impl PageRoute {
    /// Derive the route for a content file.
    ///
    /// Returns `None` if the file is not under `content_dir` or is not a
    /// page file.
    pub fn from_source(source: &Path, content_dir: &Path) -> Option<Self> {
        if !is_page_file(source) {
            return None;
        }

        let rel = source.strip_prefix(content_dir).ok()?;
        let stem = rel.with_extension("");

        let mut segments: Vec<String> = Vec::new();
        for component in stem.components() {
            if let std::path::Component::Normal(s) = component {
                segments.push(s.to_string_lossy().into_owned());
            }
        }

        let is_index = segments.last().is_some_and(|s| s == "index");
        if is_index {
            segments.pop();
        }

        let mut url = String::from("/");
        for segment in &segments {
            url.push_str(segment);
            url.push('/');
        }

        Some(Self {
            source: source.to_path_buf(),
            relative: rel.to_string_lossy().into_owned(),
            is_index,
            route: RoutePath::from_page(&url),
        })
    }

    /// Route of the directory this page lives in.
    ///
    /// Relative links in the page body resolve against this. For an index
    /// page that is its own route; for any other page it is the parent.
    pub fn base_route(&self) -> RoutePath {
        if self.is_index {
            self.route.clone()
        } else {
            self.route.parent().unwrap_or_default()
        }
    }
}

/// Check whether a path is a content page (Markdown).
#[inline]
pub fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

/// Resolve a file-relative link against a directory route.
///
/// Handles `.` and `..` segments; extra `..` segments clamp at the root.
///
/// # Example
/// ```ignore
/// let base = RoutePath::from_page("/day-1/");
/// assert_eq!(resolve_relative(&base, "advanced-topics").as_str(),
///            "/day-1/advanced-topics/");
/// ```
pub fn resolve_relative(base: &RoutePath, link: &str) -> RoutePath {
    let (path, _fragment) = crate::utils::path::split_path_fragment(link);
    let path = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);

    let mut segments: Vec<&str> = base
        .as_str()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut url = String::from("/");
    for segment in &segments {
        url.push_str(segment);
        url.push('/');
    }
    RoutePath::from_page(&url)
}
