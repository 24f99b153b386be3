//! Content file scanning for validation.

use std::fs;
use std::path::Path;

use anyhow::Result;
use pulldown_cmark::{Event, Parser, Tag};

use crate::core::LinkKind;

/// A link extracted from a content file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLink {
    /// Link destination.
    pub dest: String,
}

impl ScannedLink {
    /// Classify this link.
    #[inline]
    pub fn kind(&self) -> LinkKind<'_> {
        LinkKind::parse(&self.dest)
    }
}

/// Result of scanning a single file
#[derive(Debug)]
pub struct ScanResult {
    /// Source file path (relative to the content dir).
    pub source: String,
    /// All page links found in the file.
    pub links: Vec<ScannedLink>,
}

/// Scan a Markdown file for page links.
///
/// Only `<a href>`-producing links are collected; image and other asset
/// references belong to the consuming generator.
pub fn scan_markdown(file: &Path, content_dir: &Path) -> Result<ScanResult> {
    let content = fs::read_to_string(file)?;

    let source = file
        .strip_prefix(content_dir)
        .unwrap_or(file)
        .to_string_lossy()
        .to_string();

    Ok(ScanResult {
        source,
        links: extract_links(&content),
    })
}

/// Extract link destinations from Markdown text.
fn extract_links(content: &str) -> Vec<ScannedLink> {
    let mut links = Vec::new();

    for event in Parser::new(content) {
        if let Event::Start(Tag::Link { dest_url, .. }) = event
            && !dest_url.is_empty()
        {
            links.push(ScannedLink {
                dest: dest_url.to_string(),
            });
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_inline_links() {
        let links = extract_links(
            "See [the intro](/day-1/introduction) and \
             [the workshop](./practical-workshop).\n",
        );
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].dest, "/day-1/introduction");
        assert_eq!(links[1].dest, "./practical-workshop");
    }

    #[test]
    fn test_extract_reference_links() {
        let links = extract_links("See [the intro][i].\n\n[i]: /day-1/introduction\n");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].dest, "/day-1/introduction");
    }

    #[test]
    fn test_images_are_skipped() {
        let links = extract_links("![logo](/images/logo.png)\n");
        assert!(links.is_empty());
    }

    #[test]
    fn test_links_in_code_blocks_skipped() {
        let links = extract_links("```\n[not a link](/nope)\n```\n");
        assert!(links.is_empty());
    }

    #[test]
    fn test_scanned_link_kind() {
        let link = ScannedLink {
            dest: "https://example.com".into(),
        };
        assert!(matches!(link.kind(), LinkKind::External(_)));

        let link = ScannedLink {
            dest: "/day-1/introduction".into(),
        };
        assert!(matches!(link.kind(), LinkKind::SiteRoot(_)));
    }
}
