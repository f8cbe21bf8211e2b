//! Tokens command implementation.
//!
//! Dumps the token stream of one source file, as tab-separated text or JSON.

use std::path::PathBuf;

use serde::Serialize;
use tinc_lex::{Scanner, Token};
use tracing::debug;

use crate::commands::common::{read_source, write_stdout, Context, TokenFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file, or `-` for standard input.
    pub file: PathBuf,
    /// Language name or alias overriding detection.
    pub lang: Option<String>,
    /// Output format.
    pub format: TokenFormat,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
}

impl<'a> From<Token<'a>> for TokenRecord<'a> {
    fn from(token: Token<'a>) -> Self {
        Self {
            kind: token.kind.as_str(),
            lexeme: token.lexeme,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Formats `tokens` in the requested output format.
    fn format(&self, tokens: Vec<Token<'_>>) -> Result<String> {
        match self.args.format {
            TokenFormat::Text => {
                let mut out = String::new();
                for token in &tokens {
                    out.push_str(&format!("{}\t{:?}\n", token.kind, token.lexeme));
                }
                Ok(out)
            }
            TokenFormat::Json => {
                let records: Vec<TokenRecord<'_>> =
                    tokens.into_iter().map(TokenRecord::from).collect();
                let mut out = serde_json::to_string_pretty(&records)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, ctx: &Context) -> Result<Self::Output> {
        let source = read_source(&self.args.file)?;
        let language = ctx.resolve_language(self.args.lang.as_deref(), &self.args.file)?;
        let tokens = Scanner::new(language).tokenize(&source);
        debug!(
            file = %self.args.file.display(),
            language = language.name(),
            tokens = tokens.len(),
            "scanned"
        );
        self.format(tokens)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, ctx: &Context) -> Result<()> {
    debug!(command = TokensCommand::name(), "running");
    let output = TokensCommand::new(args).execute(ctx)?;
    write_stdout(&output)
}
