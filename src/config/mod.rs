//! Run configuration management for `docfix.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[build]`    | Docs directory, fragments, search data, assets   |
//! | `[page]`     | File names, selectors and text used on pages     |
//! | `[template]` | Document shell used when writing pages           |
//!
//! Every field has a default, so the config file itself is optional.
//!
//! # Example
//!
//! ```toml
//! [build]
//! docs = "docs"
//!
//! [page]
//! main_module = "module-async.html"
//! combined = "docs.html"
//!
//! [page.labels]
//! ControlFlow = "Control Flow"
//! ```

mod build;
pub mod defaults;
mod error;
mod page;

pub use build::{AssetEntry, BuildConfig};
pub use error::ConfigError;
pub use page::{PageConfig, TemplateConfig};

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing docfix.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Project root; asset sources and fragments resolve against it
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Paths read and written by a run
    #[serde(default)]
    pub build: BuildConfig,

    /// Page naming and rewriting settings
    #[serde(default)]
    pub page: PageConfig,

    /// Document shell for written pages
    #[serde(default)]
    pub template: TemplateConfig,
}

impl DocsConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: DocsConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named on the command line, falling back to defaults
    /// when the file does not exist, then apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(docs) = &cli.docs {
            self.build.docs = docs.clone();
        }
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        self.set_root(&root);
    }

    /// Set the root directory and resolve every relative path against it.
    pub fn set_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);

        self.build.docs = Self::normalize_path(&root.join(&self.build.docs));
        self.build.fragments = Self::normalize_path(&root.join(&self.build.fragments));
        for asset in &mut self.build.assets {
            asset.source = root.join(&asset.source);
            asset.dest = self.build.docs.join(&asset.dest);
        }

        self.root = root;
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before a run
    pub fn validate(&self) -> Result<()> {
        let page = &self.page;

        for (field, value) in [
            ("[page.main_module]", &page.main_module),
            ("[page.combined]", &page.combined),
            ("[page.module_prefix]", &page.module_prefix),
        ] {
            if value.is_empty() {
                bail!(ConfigError::Validation(format!("{field} must not be empty")));
            }
        }

        if page.combined == page.main_module {
            bail!(ConfigError::Validation(
                "[page.combined] must differ from [page.main_module]".into()
            ));
        }

        for (field, selector) in [
            ("[page.content_selector]", &page.content_selector),
            ("[page.title_selector]", &page.title_selector),
        ] {
            if kuchikiki::Selectors::compile(selector).is_err() {
                bail!(ConfigError::Validation(format!(
                    "{field} is not a valid selector: `{selector}`"
                )));
            }
        }

        if !self.build.docs.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[build.docs] not found: {}",
                self.build.docs.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> DocsConfig {
        let mut config = DocsConfig::default();
        config.set_root(dir.path());
        config
    }

    #[test]
    fn test_from_str_empty_uses_defaults() {
        let config = DocsConfig::from_str("").unwrap();
        assert_eq!(config.page.combined, "docs.html");
        assert_eq!(config.build.docs, PathBuf::from("docs"));
    }

    #[test]
    fn test_from_str_reports_toml_error() {
        let err = DocsConfig::from_str("[page\n").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = DocsConfig::from_path(Path::new("/nonexistent/docfix.toml")).unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("docfix.toml"));
    }

    #[test]
    fn test_set_root_resolves_paths() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.root, root);
        assert_eq!(config.build.docs, root.join("docs"));
        assert_eq!(config.build.fragments, root.join("support/jsdoc"));
        assert_eq!(config.build.assets[0].source, root.join("dist/async.js"));
        assert_eq!(
            config.build.assets[0].dest,
            root.join("docs").join("scripts/async.js")
        );
        assert_eq!(config.build.data_dir(), root.join("docs").join("data"));
    }

    #[test]
    fn test_validate_requires_docs_dir() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("[build.docs]"));

        fs::create_dir(dir.path().join("docs")).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_same_combined_and_main() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        let mut config = config_in(&dir);
        config.page.combined = config.page.main_module.clone();

        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("must differ"));
    }

    #[test]
    fn test_validate_rejects_bad_selector() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        let mut config = config_in(&dir);
        config.page.content_selector = "#[".into();

        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("[page.content_selector]"));
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        let mut config = config_in(&dir);
        config.page.module_prefix.clear();

        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("[page.module_prefix]"));
    }
}
