//! Built-in language tables.
//!
//! Each language is pure data fed to the one generic scanner; no module here
//! contains scanning logic.

mod c;
mod csharp;
mod java;
mod javascript;

use tinc_lex::{LanguageSpec, ScanResult};

pub use c::{c, cpp};
pub use csharp::language as csharp;
pub use java::language as java;
pub use javascript::{javascript, typescript};

/// Builds every built-in language, in registration order.
pub fn all() -> ScanResult<Vec<LanguageSpec>> {
    [csharp, c, cpp, java, javascript, typescript]
        .into_iter()
        .map(|build| build())
        .collect()
}
