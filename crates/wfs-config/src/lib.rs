//! Configuration for the WFS documentation site navigation.
//!
//! Parses `wfs.toml` configuration files with serde and provides
//! auto-discovery of the config file in parent directories. The navigation
//! forest and the mobile quick links are defined here and borrowed read-only
//! by the rest of the site; a builtin forest is used when no file exists.
//!
//! Navigation entries are validated on load: titles must be non-empty and
//! unique among siblings, since node identity derives from the title path.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use wfs_nav::{NavEntry, QuickLink};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "wfs.toml";

/// Site navigation configuration.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navigation forest shown in the sidebar.
    pub navigation: Vec<NavEntry>,
    /// Quick links shown at the top of the mobile sidebar.
    pub quick_links: Vec<QuickLink>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `wfs.toml` in the current directory and parents, and
    /// falls back to [`Config::builtin`] when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            tracing::debug!("no {CONFIG_FILENAME} found, using builtin navigation");
            Ok(Self::builtin())
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading navigation config");
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// The builtin navigation used when no config file exists.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            navigation: vec![NavEntry::link("Blog", "/blog").with_children(vec![
                NavEntry::link("Quick Start Tutorial", "/blog/002-quick-start-tutorial"),
                NavEntry::link("FAQ", "/blog/005-faq"),
                NavEntry::link("Use Cases", "/use-case").with_children(vec![
                    NavEntry::link("Data Analysis Workflow", "/use-case/data-analysis"),
                    NavEntry::link("Code Review Workflow", "/use-case/code-review"),
                ]),
            ])],
            quick_links: vec![
                QuickLink::internal("Home", "/"),
                QuickLink::internal("Get Started", "/get-started"),
                QuickLink::internal("About", "/about"),
                QuickLink::external("GitHub", "https://github.com/breaking-brake/cc-wf-studio"),
            ],
            config_path: None,
        }
    }

    /// Validate the navigation forest and quick links.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a title is empty or duplicated
    /// among its siblings, or a quick link is missing a title or target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_level(&self.navigation, "navigation root")?;
        for link in &self.quick_links {
            if link.title.is_empty() {
                return Err(ConfigError::Validation(
                    "quick link with empty title".to_owned(),
                ));
            }
            if link.href.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "quick link '{}' has an empty href",
                    link.title
                )));
            }
        }
        Ok(())
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_config_from(std::env::current_dir().ok()?)
    }

    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

/// Require non-empty titles, unique among siblings, at every level.
fn validate_level(entries: &[NavEntry], parent: &str) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.title.is_empty() {
            return Err(ConfigError::Validation(format!(
                "navigation entry with empty title under {parent}"
            )));
        }
        if !seen.insert(entry.title.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate sibling title '{}' under {parent}",
                entry.title
            )));
        }
        validate_level(&entry.children, &entry.title)?;
    }
    Ok(())
}
