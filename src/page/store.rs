//! Page store - the set of routes a site serves.

use std::path::Path;

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;

use super::route::{PageRoute, is_page_file};
use crate::core::RoutePath;

/// All content pages of a site, indexed by route.
#[derive(Debug, Default)]
pub struct PageStore {
    pages: Vec<PageRoute>,
    routes: FxHashSet<RoutePath>,
}

impl PageStore {
    /// Build the store by walking the content directory.
    pub fn scan(content_dir: &Path) -> Result<Self> {
        if !content_dir.is_dir() {
            bail!("content directory '{}' not found", content_dir.display());
        }

        let files = super::collect_files(content_dir);
        let pages: Vec<PageRoute> = files
            .iter()
            .filter(|f| is_page_file(f))
            .filter_map(|f| PageRoute::from_source(f, content_dir))
            .collect();

        Self::from_pages(pages)
            .with_context(|| format!("failed to index '{}'", content_dir.display()))
    }

    /// Build the store from pre-derived pages.
    ///
    /// Fails on route collisions (two sources mapping to the same route,
    /// e.g. `guide.md` next to `guide/index.md`).
    pub fn from_pages(pages: Vec<PageRoute>) -> Result<Self> {
        let mut routes = FxHashSet::default();
        for page in &pages {
            if !routes.insert(page.route.clone()) {
                let other = pages
                    .iter()
                    .find(|p| p.route == page.route && p.source != page.source);
                match other {
                    Some(other) => bail!(
                        "route conflict: '{}' and '{}' both map to {}",
                        other.relative,
                        page.relative,
                        page.route
                    ),
                    None => bail!("duplicate source '{}'", page.relative),
                }
            }
        }
        Ok(Self { pages, routes })
    }

    /// Check whether a route exists.
    #[inline]
    pub fn contains(&self, route: &RoutePath) -> bool {
        self.routes.contains(route)
    }

    /// Resolve a site-root link against the route set.
    #[inline]
    pub fn resolve(&self, link: &str) -> bool {
        self.contains(&RoutePath::from_link(link))
    }

    /// Number of pages in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the store holds no pages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over all pages.
    pub fn pages(&self) -> impl Iterator<Item = &PageRoute> {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_page(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# page\n").unwrap();
    }

    #[test]
    fn test_scan_derives_routes() {
        let temp = TempDir::new().unwrap();
        write_page(temp.path(), "index.md");
        write_page(temp.path(), "day-1/introduction.md");
        write_page(temp.path(), "day-1/advanced-topics.md");

        let store = PageStore::scan(temp.path()).unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.resolve("/"));
        assert!(store.resolve("/day-1/introduction"));
        assert!(store.resolve("/day-1/advanced-topics/"));
        assert!(!store.resolve("/day-2/missing"));
    }

    #[test]
    fn test_scan_ignores_non_pages() {
        let temp = TempDir::new().unwrap();
        write_page(temp.path(), "index.md");
        fs::write(temp.path().join("logo.png"), [0u8; 4]).unwrap();

        let store = PageStore::scan(temp.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_scan_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("docs");
        assert!(PageStore::scan(&missing).is_err());
    }

    #[test]
    fn test_route_conflict_detected() {
        let temp = TempDir::new().unwrap();
        // guide.md and guide/index.md both map to /guide/
        write_page(temp.path(), "guide.md");
        write_page(temp.path(), "guide/index.md");

        let err = PageStore::scan(temp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("route conflict"));
    }

    #[test]
    fn test_resolve_tolerates_suffixes() {
        let temp = TempDir::new().unwrap();
        write_page(temp.path(), "day-2/practical-api-testing.md");

        let store = PageStore::scan(temp.path()).unwrap();
        assert!(store.resolve("/day-2/practical-api-testing.html"));
        assert!(store.resolve("/day-2/practical-api-testing.md"));
        assert!(store.resolve("/day-2/practical-api-testing#setup"));
    }
}
