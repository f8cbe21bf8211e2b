//! Name, alias and extension lookup over a set of languages.

use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tinc_lex::LanguageSpec;
use tracing::debug;

use crate::builtin;
use crate::error::{RegistryError, RegistryResult};

/// A set of languages, kept in registration order.
///
/// Names and aliases are matched ignoring ASCII case and must be unique
/// across the whole registry. Extensions may be claimed again by a later
/// registration, which then wins.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Canonical lowercase name to definition.
    languages: IndexMap<String, LanguageSpec>,
    /// Lowercase name or alias to index in `languages`.
    names: FxHashMap<String, usize>,
    /// Lowercase extension to index in `languages`.
    extensions: FxHashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in language.
    pub fn with_builtins() -> RegistryResult<Self> {
        let mut registry = Self::new();
        for language in builtin::all()? {
            registry.register(language)?;
        }
        Ok(registry)
    }

    /// Adds a language.
    ///
    /// Fails without modifying the registry if the name or any alias is
    /// already taken.
    pub fn register(&mut self, language: LanguageSpec) -> RegistryResult<()> {
        let key = language.name().to_ascii_lowercase();
        if let Some(&index) = self.names.get(&key) {
            return Err(self.conflict(&key, index));
        }

        let mut aliases = Vec::with_capacity(language.aliases().len());
        for alias in language.aliases() {
            let alias = alias.to_ascii_lowercase();
            if alias == key || aliases.contains(&alias) {
                continue;
            }
            if let Some(&index) = self.names.get(&alias) {
                return Err(self.conflict(&alias, index));
            }
            aliases.push(alias);
        }

        let index = self.languages.len();
        self.names.insert(key.clone(), index);
        for alias in aliases {
            self.names.insert(alias, index);
        }
        for ext in language.extensions() {
            let ext = ext.to_ascii_lowercase();
            if let Some(previous) = self.extensions.insert(ext.clone(), index) {
                debug!(
                    extension = %ext,
                    from = %self.languages[previous].name(),
                    to = %language.name(),
                    "extension reassigned"
                );
            }
        }

        debug!(
            language = %language.name(),
            aliases = language.aliases().len(),
            extensions = language.extensions().len(),
            "registered language"
        );
        self.languages.insert(key, language);
        Ok(())
    }

    fn conflict(&self, taken: &str, index: usize) -> RegistryError {
        let owner = self.languages[index].name();
        if owner.eq_ignore_ascii_case(taken) {
            RegistryError::DuplicateName(owner.to_string())
        } else {
            RegistryError::DuplicateAlias {
                alias: taken.to_string(),
                language: owner.to_string(),
            }
        }
    }

    /// Looks up a language by name or alias, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&LanguageSpec> {
        let index = *self.names.get(&name.trim().to_ascii_lowercase())?;
        self.languages.get_index(index).map(|(_, lang)| lang)
    }

    /// Like [`find`](Self::find), but reports a miss as an error.
    pub fn get(&self, name: &str) -> RegistryResult<&LanguageSpec> {
        self.find(name)
            .ok_or_else(|| RegistryError::UnknownLanguage(name.to_string()))
    }

    /// Looks up a language by file extension. A leading dot is optional.
    pub fn find_by_extension(&self, ext: &str) -> Option<&LanguageSpec> {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
        let index = *self.extensions.get(&ext)?;
        self.languages.get_index(index).map(|(_, lang)| lang)
    }

    /// Picks a language from a path's extension.
    pub fn detect(&self, path: &Path) -> Option<&LanguageSpec> {
        let ext = path.extension()?.to_str()?;
        self.find_by_extension(ext)
    }

    /// Iterates over languages in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageSpec> {
        self.languages.values()
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns true if no language is registered.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a LanguageSpec;
    type IntoIter = indexmap::map::Values<'a, String, LanguageSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(name: &str, aliases: &[&str], exts: &[&str]) -> LanguageSpec {
        LanguageSpec::builder(name)
            .aliases(aliases.iter().copied())
            .extensions(exts.iter().copied())
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.find("csharp").is_none());
    }

    #[test]
    fn test_builtins_in_order() {
        let registry = Registry::with_builtins().unwrap();
        let names: Vec<_> = registry.iter().map(|l| l.name()).collect();
        assert_eq!(names, ["csharp", "c", "cpp", "java", "javascript", "typescript"]);
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_find_by_name_and_alias() {
        let registry = Registry::with_builtins().unwrap();
        assert_eq!(registry.find("csharp").unwrap().name(), "csharp");
        assert_eq!(registry.find("CS").unwrap().name(), "csharp");
        assert_eq!(registry.find("C#").unwrap().name(), "csharp");
        assert_eq!(registry.find("c++").unwrap().name(), "cpp");
        assert_eq!(registry.find("ts").unwrap().name(), "typescript");
        assert!(registry.find("cobol").is_none());
    }

    #[test]
    fn test_get_unknown() {
        let registry = Registry::with_builtins().unwrap();
        assert_eq!(
            registry.get("cobol").unwrap_err(),
            RegistryError::UnknownLanguage("cobol".to_string())
        );
    }

    #[test]
    fn test_find_by_extension() {
        let registry = Registry::with_builtins().unwrap();
        assert_eq!(registry.find_by_extension("cs").unwrap().name(), "csharp");
        assert_eq!(registry.find_by_extension(".CS").unwrap().name(), "csharp");
        assert_eq!(registry.find_by_extension("h").unwrap().name(), "c");
        assert_eq!(registry.find_by_extension("hpp").unwrap().name(), "cpp");
        assert_eq!(registry.find_by_extension("tsx").unwrap().name(), "typescript");
        assert!(registry.find_by_extension("rs").is_none());
    }

    #[test]
    fn test_detect() {
        let registry = Registry::with_builtins().unwrap();
        let detected = |p: &str| registry.detect(Path::new(p)).map(|l| l.name().to_string());
        assert_eq!(detected("src/Program.cs").as_deref(), Some("csharp"));
        assert_eq!(detected("main.c").as_deref(), Some("c"));
        assert_eq!(detected("App.java").as_deref(), Some("java"));
        assert_eq!(detected("Makefile"), None);
        assert_eq!(detected("notes.txt"), None);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = Registry::new();
        registry.register(lang("toy", &[], &[])).unwrap();
        assert_eq!(
            registry.register(lang("TOY", &[], &[])).unwrap_err(),
            RegistryError::DuplicateName("toy".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_alias_clash_leaves_registry_untouched() {
        let mut registry = Registry::new();
        registry.register(lang("toy", &["t"], &["toy"])).unwrap();

        let err = registry
            .register(lang("other", &["o", "T"], &["oth"]))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateAlias {
                alias: "t".to_string(),
                language: "toy".to_string(),
            }
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.find("o").is_none());
        assert!(registry.find_by_extension("oth").is_none());
    }

    #[test]
    fn test_name_clashing_with_alias() {
        let mut registry = Registry::new();
        registry.register(lang("toy", &["t"], &[])).unwrap();
        assert!(matches!(
            registry.register(lang("t", &[], &[])),
            Err(RegistryError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn test_padded_alias_and_extension_are_found() {
        let mut registry = Registry::new();
        registry.register(lang("mini", &[" mn "], &[" .MINI "])).unwrap();
        assert_eq!(registry.find("mn").unwrap().name(), "mini");
        assert_eq!(registry.find_by_extension("mini").unwrap().name(), "mini");
    }

    #[test]
    fn test_empty_alias_never_reaches_registry() {
        let mut registry = Registry::new();
        let result = LanguageSpec::builder("x")
            .aliases([""])
            .build()
            .map_err(RegistryError::from)
            .and_then(|lang| registry.register(lang));
        assert!(matches!(result, Err(RegistryError::Scan(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_later_registration_takes_extension() {
        let mut registry = Registry::new();
        registry.register(lang("first", &[], &["x"])).unwrap();
        registry.register(lang("second", &[], &["X"])).unwrap();
        assert_eq!(registry.find_by_extension("x").unwrap().name(), "second");
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let registry = Registry::with_builtins().unwrap();
        std::thread::scope(|s| {
            for name in ["csharp", "java", "c"] {
                let registry = &registry;
                s.spawn(move || {
                    let lang = registry.get(name).unwrap();
                    let tokens = tinc_lex::tokenize(lang, "int x = 1;");
                    assert_eq!(tokens.len(), 8);
                });
            }
        });
    }
}
