//! Site validation command.

mod report;
mod scan;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::common::collect_content_files;
use crate::cli::ValidateArgs;
use crate::config::{SiteConfig, ValidateLevel};
use crate::core::{LinkKind, RoutePath};
use crate::log;
use crate::page::{PageRoute, PageStore, resolve_relative};
use crate::utils::{plural_count, plural_s};

use report::ValidationReport;
use scan::scan_markdown;

/// Validate nav, sidebar, and content links against the page set
pub fn validate_site(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    let check_nav = config.validate.nav.enable;
    let check_pages = config.validate.content.enable;

    if !check_nav && !check_pages {
        log!("validate"; "no checks enabled");
        return Ok(());
    }

    let store = PageStore::scan(&config.content.dir)?;
    log!("validate"; "indexed {}", plural_count(store.len(), "page"));

    // Unified report
    let report = Arc::new(RwLock::new(ValidationReport::default()));

    if check_nav {
        validate_theme_links(config, &store, &report);

        let count = report.read().nav_error_count();
        if count > 0 {
            log!("validate"; "found {} broken nav link{}", count, plural_s(count));
        } else {
            log!("validate"; "all nav and sidebar links valid");
        }
    }

    if check_pages {
        let files = collect_content_files(&args.paths, &config.content.dir)?;
        log!("validate"; "scanning {}", plural_count(files.len(), "file"));

        validate_page_links(&files, &config.content.dir, &store, &report);

        let count = report.read().page_error_count();
        if count > 0 {
            log!("validate"; "found {} broken page link{}", count, plural_s(count));
        } else {
            log!("validate"; "all page links valid");
        }
    }

    if config.validate.orphans {
        report_orphans(config, &store);
    }

    // Get final report
    let report = Arc::try_unwrap(report).unwrap().into_inner();

    // Print detailed report (nav -> pages)
    report.print();

    print_summary(&report, config)
}

/// Resolve every internal nav and sidebar link against the page store
fn validate_theme_links(
    config: &SiteConfig,
    store: &PageStore,
    report: &Arc<RwLock<ValidationReport>>,
) {
    for (field, link) in config.theme.internal_links() {
        if !store.resolve(link) {
            report.write().add_nav(
                field,
                format!("`{}`", link),
                "no matching page".to_string(),
            );
        }
    }
}

/// Scan content files in parallel and resolve their internal links
fn validate_page_links(
    files: &[std::path::PathBuf],
    content_dir: &Path,
    store: &PageStore,
    report: &Arc<RwLock<ValidationReport>>,
) {
    files.par_iter().for_each(|file| {
        let Ok(result) = scan_markdown(file, content_dir) else {
            return;
        };
        crate::debug!("scan"; "{}: {}", result.source, plural_count(result.links.len(), "link"));
        let page = PageRoute::from_source(file, content_dir);

        for link in &result.links {
            let resolved = match link.kind() {
                // External links: skip (no HTTP validation)
                LinkKind::External(_) => true,
                // Own-page anchors: fragments are not indexed
                LinkKind::Fragment(_) => true,
                LinkKind::SiteRoot(path) => store.resolve(path),
                LinkKind::FileRelative(path) => match &page {
                    Some(page) => store.contains(&resolve_relative(&page.base_route(), path)),
                    None => false,
                },
            };

            if !resolved {
                report.write().add_page(
                    result.source.clone(),
                    format!("`{}`", link.dest),
                    "no matching page".to_string(),
                );
            }
        }
    });
}

/// Hint on pages reachable from neither nav nor sidebar
fn report_orphans(config: &SiteConfig, store: &PageStore) {
    let referenced: FxHashSet<RoutePath> = config
        .theme
        .internal_links()
        .map(|(_, link)| RoutePath::from_link(link))
        .collect();

    let orphans: Vec<&PageRoute> = store
        .pages()
        .filter(|p| !referenced.contains(&p.route))
        .collect();

    if orphans.is_empty() {
        return;
    }

    log!(
        "hint";
        "{} not listed in nav or sidebar:",
        plural_count(orphans.len(), "page")
    );
    for page in orphans {
        eprintln!("- {} ({})", page.route, page.relative);
    }
}

/// Print final summary and return error if validation failed
fn print_summary(report: &ValidationReport, config: &SiteConfig) -> Result<()> {
    let nav_errors = report.nav_error_count();
    let page_errors = report.page_error_count();

    let nav_fails = nav_errors > 0 && config.validate.nav.level == ValidateLevel::Error;
    let pages_fail = page_errors > 0 && config.validate.content.level == ValidateLevel::Error;

    if nav_fails || pages_fail {
        let mut parts = Vec::new();
        if nav_errors > 0 {
            parts.push(format!(
                "{} broken nav link{}",
                nav_errors,
                plural_s(nav_errors)
            ));
        }
        if page_errors > 0 {
            parts.push(format!(
                "{} with page link errors",
                plural_count(report.page_file_count(), "file")
            ));
        }
        anyhow::bail!("found {}", parts.join(", "));
    }

    if nav_errors > 0 || page_errors > 0 {
        log!("validate"; "completed with warnings");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn write_page(dir: &Path, rel: &str, body: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn handbook_store(temp: &TempDir) -> PageStore {
        write_page(temp.path(), "index.md", "# Home\n");
        write_page(
            temp.path(),
            "day-1/introduction.md",
            "See [advanced](./advanced-topics).\n",
        );
        write_page(temp.path(), "day-1/advanced-topics.md", "# Advanced\n");
        PageStore::scan(temp.path()).unwrap()
    }

    #[test]
    fn test_theme_links_resolve() {
        let temp = TempDir::new().unwrap();
        let store = handbook_store(&temp);

        let config = test_parse_config(
            r#"
[[theme.nav]]
label = "Home"
link = "/"

[[theme.nav]]
label = "Day 1"
link = "/day-1/introduction"
"#,
        );

        let report = Arc::new(RwLock::new(ValidationReport::default()));
        validate_theme_links(&config, &store, &report);
        assert_eq!(report.read().nav_error_count(), 0);
    }

    #[test]
    fn test_theme_links_catch_missing_page() {
        let temp = TempDir::new().unwrap();
        let store = handbook_store(&temp);

        let config = test_parse_config(
            r#"
[[theme.nav]]
label = "Day 2"
link = "/day-2/practical-api-testing"
"#,
        );

        let report = Arc::new(RwLock::new(ValidationReport::default()));
        validate_theme_links(&config, &store, &report);

        let report = report.read();
        assert_eq!(report.nav_error_count(), 1);
        assert!(report.nav.contains_key("theme.nav[0].link"));
    }

    #[test]
    fn test_page_links_relative_resolution() {
        let temp = TempDir::new().unwrap();
        let store = handbook_store(&temp);

        let files = vec![temp.path().join("day-1/introduction.md")];
        let report = Arc::new(RwLock::new(ValidationReport::default()));
        validate_page_links(&files, temp.path(), &store, &report);

        // "./advanced-topics" resolves to /day-1/advanced-topics/
        assert_eq!(report.read().page_error_count(), 0);
    }

    #[test]
    fn test_page_links_catch_broken() {
        let temp = TempDir::new().unwrap();
        write_page(temp.path(), "day-2/index.md", "[gone](/day-2/missing)\n");
        let store = PageStore::scan(temp.path()).unwrap();

        let files = vec![temp.path().join("day-2/index.md")];
        let report = Arc::new(RwLock::new(ValidationReport::default()));
        validate_page_links(&files, temp.path(), &store, &report);

        let report = report.read();
        assert_eq!(report.page_error_count(), 1);
        assert!(report.pages.contains_key("day-2/index.md"));
    }

    #[test]
    fn test_external_and_fragment_links_skipped() {
        let temp = TempDir::new().unwrap();
        write_page(
            temp.path(),
            "index.md",
            "[repo](https://github.com/example) [top](#top)\n",
        );
        let store = PageStore::scan(temp.path()).unwrap();

        let files = vec![temp.path().join("index.md")];
        let report = Arc::new(RwLock::new(ValidationReport::default()));
        validate_page_links(&files, temp.path(), &store, &report);
        assert_eq!(report.read().page_error_count(), 0);
    }
}
