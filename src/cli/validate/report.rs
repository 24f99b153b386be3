//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The link that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Unified validation report for all error types
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Nav/sidebar link errors, grouped by config field path.
    pub nav: BTreeMap<String, Vec<ValidationError>>,
    /// Content page link errors, grouped by source file.
    pub pages: BTreeMap<String, Vec<ValidationError>>,
}

impl ValidationReport {
    /// Add a nav/sidebar link error.
    pub fn add_nav(&mut self, source: String, link: String, reason: String) {
        self.nav.entry(source).or_default().push(ValidationError {
            target: link,
            reason,
        });
    }

    /// Add a content page link error.
    pub fn add_page(&mut self, source: String, link: String, reason: String) {
        self.pages.entry(source).or_default().push(ValidationError {
            target: link,
            reason,
        });
    }

    /// Total nav link error count.
    pub fn nav_error_count(&self) -> usize {
        self.nav.values().map(|v| v.len()).sum()
    }

    /// Total content page link error count.
    pub fn page_error_count(&self) -> usize {
        self.pages.values().map(|v| v.len()).sum()
    }

    /// Count of files with page link errors.
    pub fn page_file_count(&self) -> usize {
        self.pages.len()
    }

    /// Print the full report to stderr (nav -> pages).
    pub fn print(&self) {
        self.print_section("navigation", &self.nav);
        self.print_section("pages", &self.pages);
    }

    /// Print section with format (target + reason for non-empty reason).
    fn print_section(&self, name: &str, errors: &BTreeMap<String, Vec<ValidationError>>) {
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let group_count = errors.len();
        let error_count: usize = errors.values().map(|v| v.len()).sum();

        // Section header
        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({error_count} error{} in {group_count} place{})",
                plural_s(error_count),
                plural_s(group_count)
            )
            .dimmed()
        );

        for (path, errs) in errors {
            // Source (config field or file path)
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for e in errs {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.target);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.target, e.reason);
                }
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nav = self.nav_error_count();
        let pages = self.page_error_count();
        let total = nav + pages;

        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = ValidationReport::default();
        report.add_nav(
            "theme.nav[1].link".into(),
            "/missing".into(),
            "no matching page".into(),
        );
        report.add_page(
            "day-1/introduction.md".into(),
            "/day-2/gone".into(),
            "no matching page".into(),
        );
        report.add_page(
            "day-1/introduction.md".into(),
            "./sibling".into(),
            "no matching page".into(),
        );

        assert_eq!(report.nav_error_count(), 1);
        assert_eq!(report.page_error_count(), 2);
        assert_eq!(report.page_file_count(), 1);
    }

    #[test]
    fn test_display_empty() {
        let report = ValidationReport::default();
        assert!(format!("{report}").contains("all checks passed"));
    }

    #[test]
    fn test_display_with_errors() {
        let mut report = ValidationReport::default();
        report.add_nav("theme.nav[0].link".into(), "/gone".into(), String::new());
        assert!(format!("{report}").contains('1'));
    }
}
