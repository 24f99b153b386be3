//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::page::{collect_files, is_page_file};
use crate::utils::path::resolve_path;

/// Collect content files based on CLI paths
pub fn collect_content_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    // Handle stdin case: read paths from stdin when `-` is passed
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        // No paths specified: collect all content files
        let all_files = collect_files(content_dir);
        return Ok(filter_content_files(all_files));
    }

    // Collect files from all specified paths
    let mut all_files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if is_page_file(&resolved) {
                all_files.push(resolved);
            } else {
                anyhow::bail!("Not a content page: {}", path.display());
            }
        } else if resolved.is_dir() {
            let dir_files = collect_files(&resolved);
            all_files.extend(filter_content_files(dir_files));
        } else {
            // Provide helpful error message
            let content_relative = content_dir.join(path);
            anyhow::bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_relative.display()
            );
        }
    }

    Ok(all_files)
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

/// Filter a list of paths to only include content pages
pub fn filter_content_files(files: Vec<PathBuf>) -> Vec<PathBuf> {
    files.into_iter().filter(|p| is_page_file(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_all_when_no_paths() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.md"), "# home\n").unwrap();
        fs::write(temp.path().join("notes.txt"), "skip\n").unwrap();

        let files = collect_content_files(&[], temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("index.md"));
    }

    #[test]
    fn test_collect_specific_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.md"), "# home\n").unwrap();

        let files =
            collect_content_files(&[PathBuf::from("index.md")], temp.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_collect_rejects_non_page() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "skip\n").unwrap();

        let result = collect_content_files(&[PathBuf::from("notes.txt")], temp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_collect_missing_path_fails() {
        let temp = TempDir::new().unwrap();
        let result = collect_content_files(&[PathBuf::from("missing.md")], temp.path());
        assert!(result.is_err());
    }
}
