//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── content    # [content]
//! │   ├── site       # [site]
//! │   ├── theme/     # [theme] and sub-tables
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                      |
//! |--------------|----------------------------------------------|
//! | `[site]`     | Base path, language, title, description      |
//! | `[content]`  | Content directory the links resolve against  |
//! | `[theme]`    | Nav, sidebar tree, social links, footer      |
//! | `[validate]` | Link validation settings                     |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    ContentConfig, FooterConfig, NavItem, SidebarItem, SidebarSection, SiteSectionConfig,
    SocialLink, ThemeSectionConfig, ValidateConfig, ValidateLevel,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config};

use crate::{
    cli::{Cli, Commands, ValidateArgs},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (base, language, title, description)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Content directory settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Theme settings (nav, sidebar, social, footer)
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            content: ContentConfig::default(),
            theme: ThemeSectionConfig::default(),
            validate: ValidateConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'folio init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Validate raw paths before normalization
        if !cli.is_init() {
            config.validate_paths()?;
        }

        // Set paths and apply CLI options
        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        // Resolve root path
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
        self.normalize_paths(&root);
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (folio.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Get CLI arguments reference
    pub const fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Validate { args } => {
                self.apply_validate_args(args);
            }
            // Export and Init don't modify config
            Commands::Export { .. } | Commands::Init { .. } => {}
        }
    }

    /// Apply validate arguments from CLI.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        // CLI flags override config enable settings
        Self::update_option(&mut self.validate.nav.enable, args.nav.as_ref());
        Self::update_option(&mut self.validate.content.enable, args.pages.as_ref());

        // --warn-only sets all levels to Warn
        if args.warn_only {
            self.validate.nav.level = ValidateLevel::Warn;
            self.validate.content.level = ValidateLevel::Warn;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI path overrides first
        Self::update_option(&mut self.content.dir, cli.content.as_ref());

        // Normalize root to absolute path
        let root = crate::utils::path::normalize_path(root);
        self.set_root(&root);

        // Normalize config path (already set in main.rs, just canonicalize)
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        // Normalize content directory
        self.content.dir = crate::utils::path::normalize_path(&root.join(&self.content.dir));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// This must be called before `finalize()` because path normalization
    /// converts relative paths to absolute paths, making it impossible to
    /// detect if the user specified an absolute path in the config.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.content.validate_paths(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        // Validate each section
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` and `[theme.footer]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n\n\
         [theme.footer]\nmessage = \"Test\"\ncopyright = \"Test\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Handbook\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        // Default root is empty PathBuf, set during config loading
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.base, "/");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.content.dir, PathBuf::from("docs"));
        assert!(config.validate.nav.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_parse_full_record() {
        let config = test_parse_config(
            r#"
[content]
dir = "docs"

[[theme.nav]]
label = "Home"
link = "/"

[[theme.sidebar]]
label = "Day 1"

[[theme.sidebar.items]]
label = "Introduction"
link = "/day-1/introduction"

[[theme.social]]
icon = "github"
link = "https://github.com/example/handbook"
"#,
        );
        assert_eq!(config.theme.nav.len(), 1);
        assert_eq!(config.theme.sidebar.len(), 1);
        assert_eq!(config.theme.sidebar[0].items.len(), 1);
        assert_eq!(config.theme.social[0].icon, "github");
    }
}
