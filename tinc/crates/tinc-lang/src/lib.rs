//! tinc-lang - Built-in Languages and Registry
//!
//! Language definitions for the `tinc-lex` scanner and a registry that finds
//! them by name, alias or file extension.
//!
//! # Example Usage
//!
//! ```
//! use std::path::Path;
//! use tinc_lang::Registry;
//! use tinc_lex::TokenKind;
//!
//! let registry = Registry::with_builtins().unwrap();
//! let csharp = registry.detect(Path::new("Program.cs")).unwrap();
//! assert_eq!(csharp.name(), "csharp");
//!
//! let tokens = tinc_lex::tokenize(csharp, "public int x;");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[2].kind, TokenKind::Type);
//! ```

#![warn(missing_docs)]

pub mod builtin;
pub mod error;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;
