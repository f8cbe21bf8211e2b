//! Common types and utilities for tinct commands.
//!
//! This module provides the shared execution context, input handling and
//! language resolution used by every command.

use std::io::{self, Read, Write};
use std::path::Path;

use clap::ValueEnum;
use tinc_lang::{Registry, RegistryError};
use tinc_lex::LanguageSpec;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TinctError};
use crate::render::Theme;

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// Output formats for the token dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TokenFormat {
    /// One `kind<TAB>lexeme` line per token.
    #[default]
    Text,
    /// A JSON array of `{ "kind", "lexeme" }` objects.
    Json,
}

// ============================================================================
// Execution Context
// ============================================================================

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration.
    pub config: Config,
    /// Built-in and configured languages.
    pub registry: Registry,
    /// Colours for highlighting.
    pub theme: Theme,
    /// Whether ANSI colour may be written to stdout.
    pub color: bool,
}

impl Context {
    /// Builds the registry and theme described by `config`.
    pub fn new(config: Config, color: bool) -> Result<Self> {
        let registry = config.registry()?;
        let theme = config.theme()?;
        debug!(languages = registry.len(), color, "context ready");
        Ok(Self {
            config,
            registry,
            theme,
            color,
        })
    }

    /// Picks the language for `path`.
    ///
    /// An explicit name wins, then the file extension, then the configured
    /// default language.
    pub fn resolve_language(&self, explicit: Option<&str>, path: &Path) -> Result<&LanguageSpec> {
        if let Some(name) = explicit {
            return Ok(self.registry.get(name)?);
        }
        if let Some(language) = self.registry.detect(path) {
            return Ok(language);
        }
        if let Some(name) = &self.config.default_language {
            debug!(path = %path.display(), language = %name, "falling back to default language");
            return Ok(self.registry.get(name)?);
        }
        Err(RegistryError::UnknownLanguage(format!(
            "{} {}",
            error_messages::UNDETECTED_LANGUAGE,
            path.display()
        ))
        .into())
    }
}

// ============================================================================
// Input and Output
// ============================================================================

/// Reads a source file, or standard input for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if !path.exists() {
        return Err(TinctError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(TinctError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path)
        .map_err(|e| TinctError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Writes `text` to stdout. A closed pipe is not an error.
pub fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when no language answers for a path.
    pub const UNDETECTED_LANGUAGE: &str = "cannot detect language of";

    /// Error when some files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed to highlight:";

    /// Error when a worker count of zero is given.
    pub const ZERO_JOBS: &str = "jobs must be at least 1";
}
