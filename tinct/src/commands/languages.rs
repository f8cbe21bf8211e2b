//! Languages command implementation.

use tracing::debug;

use crate::commands::common::{write_stdout, Context};
use crate::commands::traits::Command;
use crate::error::Result;

/// Languages command handler.
pub struct LanguagesCommand;

impl Command for LanguagesCommand {
    type Args = ();
    type Output = String;

    fn new(_args: Self::Args) -> Self {
        Self
    }

    /// One line per language: name, aliases, then extensions.
    fn execute(&self, ctx: &Context) -> Result<Self::Output> {
        let mut out = String::new();
        for language in &ctx.registry {
            let aliases = if language.aliases().is_empty() {
                "-".to_string()
            } else {
                language.aliases().join(", ")
            };
            let extensions: Vec<_> = language
                .extensions()
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect();
            out.push_str(&format!(
                "{:<12} {:<16} {}\n",
                language.name(),
                aliases,
                extensions.join(" ")
            ));
        }
        Ok(out)
    }

    fn name() -> &'static str {
        "languages"
    }
}

/// Run the languages command.
pub fn run_languages(ctx: &Context) -> Result<()> {
    debug!(command = LanguagesCommand::name(), "running");
    let output = LanguagesCommand::new(()).execute(ctx)?;
    write_stdout(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LanguageDef};

    #[test]
    fn test_lists_builtins_in_order() {
        let ctx = Context::new(Config::default(), false).unwrap();
        let out = LanguagesCommand::new(()).execute(&ctx).unwrap();
        let names: Vec<_> = out
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(names, ["csharp", "c", "cpp", "java", "javascript", "typescript"]);
        assert!(out.lines().next().unwrap().ends_with(".cs .csx"));
        assert!(out.contains("cs, c#"));
    }

    #[test]
    fn test_lists_user_languages() {
        let config = Config {
            languages: vec![LanguageDef {
                name: "mini".to_string(),
                extensions: vec!["mini".to_string()],
                ..LanguageDef::default()
            }],
            ..Config::default()
        };
        let ctx = Context::new(config, false).unwrap();
        let out = LanguagesCommand::new(()).execute(&ctx).unwrap();
        let last = out.lines().last().unwrap();
        assert!(last.starts_with("mini"));
        assert!(last.contains(" - "));
        assert!(last.ends_with(".mini"));
    }
}
