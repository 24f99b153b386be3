//! Content page model.
//!
//! Folio never compiles pages; it only needs to know which routes exist
//! and which links each page carries. This module derives routes from the
//! content directory layout and holds them in a queryable store.

mod route;
mod store;

pub use route::{PageRoute, is_page_file, resolve_relative};
pub use store::PageStore;

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect all files from a directory recursively
pub fn collect_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}
