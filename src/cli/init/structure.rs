//! Site directory structure creation.
//!
//! Creates the standard folio site directory layout.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Subdirectories created under the content directory.
const CONTENT_DIRS: &[&str] = &["guide"];

/// Create site directory structure at the given root.
///
/// Creates the content directory and its starter subdirectories. The
/// root directory is created if it doesn't exist.
pub fn create_structure(root: &Path, content_dir: &Path) -> Result<()> {
    // Ensure root exists
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    let content_root = root.join(content_dir);
    for dir in CONTENT_DIRS {
        let path = content_root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my_site");

        create_structure(&root, Path::new("docs")).unwrap();

        assert!(root.join("docs").is_dir());
        assert!(root.join("docs/guide").is_dir());
    }

    #[test]
    fn test_create_structure_existing_root() {
        let temp = TempDir::new().unwrap();
        create_structure(temp.path(), Path::new("docs")).unwrap();

        assert!(temp.path().join("docs").is_dir());
    }
}
