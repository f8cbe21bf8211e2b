//! Highlight command implementation.
//!
//! Scans files in parallel on a rayon pool and prints them, coloured by the
//! theme, in argument order.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tinc_lex::Scanner;
use tracing::{debug, error, info};

use crate::commands::common::{error_messages, read_source, write_stdout, Context};
use crate::commands::traits::Command;
use crate::error::{Result, TinctError};
use crate::render::render_ansi;

/// Arguments for the highlight command.
#[derive(Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Files to highlight; `-` reads standard input.
    pub files: Vec<PathBuf>,
    /// Language name or alias overriding detection for every file.
    pub lang: Option<String>,
    /// Worker count overriding the configured `jobs`.
    pub jobs: Option<usize>,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

impl HighlightCommand {
    /// Effective worker count.
    fn jobs(&self, ctx: &Context) -> Result<usize> {
        match self.args.jobs.unwrap_or(ctx.config.jobs) {
            0 => Err(TinctError::Validation(error_messages::ZERO_JOBS.to_string())),
            jobs => Ok(jobs),
        }
    }

    /// Reads, scans and renders a single file.
    fn render_file(&self, ctx: &Context, path: &Path) -> Result<String> {
        let source = read_source(path)?;
        let language = ctx.resolve_language(self.args.lang.as_deref(), path)?;
        let tokens = Scanner::new(language).tokenize(&source);
        debug!(
            file = %path.display(),
            language = language.name(),
            tokens = tokens.len(),
            "scanned"
        );

        if ctx.color {
            Ok(render_ansi(&tokens, &ctx.theme))
        } else {
            Ok(tokens.iter().map(|t| t.lexeme).collect())
        }
    }
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    /// One rendering per input file, in argument order.
    type Output = Vec<Result<String>>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, ctx: &Context) -> Result<Self::Output> {
        let jobs = self.jobs(ctx)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| TinctError::CommandExecution(format!("thread pool: {}", e)))?;

        let start_time = Instant::now();
        let rendered = pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| self.render_file(ctx, path))
                .collect::<Vec<_>>()
        });
        info!(
            files = self.args.files.len(),
            jobs,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "highlighted"
        );
        Ok(rendered)
    }

    fn name() -> &'static str {
        "highlight"
    }
}

/// Run the highlight command.
///
/// Every file that renders is printed; failures are logged and reported
/// together once the rest has been written.
pub fn run_highlight(args: HighlightArgs, ctx: &Context) -> Result<()> {
    debug!(command = HighlightCommand::name(), "running");
    let command = HighlightCommand::new(args);
    let rendered = command.execute(ctx)?;

    let mut failed = Vec::new();
    for (path, result) in command.args.files.iter().zip(rendered) {
        match result {
            Ok(text) => write_stdout(&text)?,
            Err(e) => {
                error!(file = %path.display(), "{}", e);
                failed.push(path.display().to_string());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(TinctError::CommandExecution(format!(
            "{} {} {}",
            failed.len(),
            error_messages::FILES_FAILED,
            failed.join(", ")
        )))
    }
}
