//! Configuration module for the tinct CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the tinct application, including user-defined languages.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use tinc_lang::Registry;
use tinc_lex::{LanguageSpec, ScanResult};
use tracing::debug;

use crate::error::{Result, TinctError};
use crate::render::Theme;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tinct.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Parallel workers for multi-file highlighting.
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Language used when detection by extension fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Token kind to colour name overrides.
    #[serde(default)]
    pub theme: BTreeMap<String, String>,

    /// User-defined languages, registered after the built-ins.
    #[serde(default, rename = "language", skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageDef>,
}

/// A language definition as written in the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageDef {
    /// Canonical name.
    pub name: String,
    /// Alternative names.
    pub aliases: Vec<String>,
    /// File extensions, with or without the leading dot.
    pub extensions: Vec<String>,
    /// Reserved words.
    pub keywords: Vec<String>,
    /// Built-in type names.
    pub types: Vec<String>,
    /// Characters that may start an operator.
    pub operator_start: String,
    /// Characters that may continue an operator.
    pub operator_continue: String,
    /// Single-character punctuation.
    pub punctuation: String,
    /// Characters allowed in a number after its leading digit.
    pub number_chars: String,
    /// Extra word characters, such as `$`.
    pub ident_extra: String,
    /// Character that starts a directive line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive_marker: Option<char>,
    /// Character that may prefix a word without changing its class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbatim_prefix: Option<char>,
}

impl LanguageDef {
    /// Validates the definition and turns it into a scanner language.
    pub fn build(&self) -> ScanResult<LanguageSpec> {
        let mut builder = LanguageSpec::builder(self.name.as_str())
            .aliases(self.aliases.iter().map(String::as_str))
            .extensions(self.extensions.iter().map(String::as_str))
            .keywords(self.keywords.iter().map(String::as_str))
            .types(self.types.iter().map(String::as_str))
            .operators(&self.operator_start, &self.operator_continue)
            .punctuation(&self.punctuation)
            .number_chars(&self.number_chars)
            .ident_extra(&self.ident_extra);
        if let Some(marker) = self.directive_marker {
            builder = builder.directive_marker(marker);
        }
        if let Some(prefix) = self.verbatim_prefix {
            builder = builder.verbatim_prefix(prefix);
        }
        builder.build()
    }
}

fn default_jobs() -> usize {
    num_cpus::get()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
            default_language: None,
            theme: BTreeMap::new(),
            languages: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/tinct`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TinctError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| TinctError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to the `tinct.toml` format.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TinctError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Checks settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(TinctError::Config("jobs must be at least 1".to_string()));
        }
        Theme::from_config(&self.theme)?;
        Ok(())
    }

    /// The theme with this configuration's overrides applied.
    pub fn theme(&self) -> Result<Theme> {
        Theme::from_config(&self.theme)
    }

    /// Builds a registry of the built-in languages plus the configured ones.
    pub fn registry(&self) -> Result<Registry> {
        let mut registry = Registry::with_builtins()?;
        for def in &self.languages {
            registry.register(def.build()?)?;
        }
        if let Some(name) = &self.default_language {
            registry.get(name).map_err(|e| {
                TinctError::Config(format!("default_language: {}", e))
            })?;
        }
        Ok(registry)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("tinct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("tinct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
