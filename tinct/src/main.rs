//! Tinct CLI - a command-line syntax highlighter.
//!
//! This is the main entry point for the tinct CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers, which scan sources with `tinc-lex` and the languages
//! registered in `tinc-lang`.

mod commands;
mod config;
mod error;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_config, run_highlight, run_languages, run_tokens, ConfigArgs, Context, HighlightArgs,
    TokenFormat, TokensArgs,
};
use config::Config;
use error::{Result, TinctError};

/// Tinct - a syntax highlighter for C-family languages
///
/// Tinct splits source files into classified tokens and prints them either
/// as a token dump or as ANSI-coloured text.
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(author = "Tincture Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A syntax highlighter for C-family languages", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TINCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TINCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TINCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tinct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a file
    ///
    /// One token per line as `kind<TAB>lexeme`, or a JSON array.
    Tokens(TokensCommand),

    /// Print files with syntax colouring
    ///
    /// Files are scanned in parallel and printed in argument order.
    Highlight(HighlightCommand),

    /// List the registered languages
    Languages,

    /// Show the effective configuration
    ///
    /// Prints the loaded configuration as TOML, or writes it to a file.
    Config(ConfigCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file, or `-` for standard input
    file: PathBuf,

    /// Language name or alias (default: detect from extension)
    #[arg(short, long)]
    lang: Option<String>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = TokenFormat::Text)]
    format: TokenFormat,
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Files to highlight; `-` reads standard input
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Language name or alias (default: detect from extension)
    #[arg(short, long)]
    lang: Option<String>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this path instead of stdout
    #[arg(short, long)]
    write: Option<PathBuf>,
}

/// Main entry point for the tinct CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let ctx = Context::new(config, !cli.no_color)?;

    execute_command(cli.command, &ctx)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with highlighted output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| TinctError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                file: args.file,
                lang: args.lang,
                format: args.format,
            },
            ctx,
        ),
        Commands::Highlight(args) => run_highlight(
            HighlightArgs {
                files: args.files,
                lang: args.lang,
                jobs: args.jobs,
            },
            ctx,
        ),
        Commands::Languages => run_languages(ctx),
        Commands::Config(args) => run_config(ConfigArgs { write: args.write }, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["tinct", "tokens", "main.c"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("main.c"));
            assert_eq!(args.lang, None);
            assert_eq!(args.format, TokenFormat::Text);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_lang_and_format() {
        let cli = Cli::parse_from(["tinct", "tokens", "-", "--lang", "cs", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("-"));
            assert_eq!(args.lang, Some("cs".to_string()));
            assert_eq!(args.format, TokenFormat::Json);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_highlight_many() {
        let cli = Cli::parse_from(["tinct", "highlight", "a.c", "b.cs", "-j", "2"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.files, [PathBuf::from("a.c"), PathBuf::from("b.cs")]);
            assert_eq!(args.jobs, Some(2));
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_highlight_requires_files() {
        assert!(Cli::try_parse_from(["tinct", "highlight"]).is_err());
    }

    #[test]
    fn test_cli_parse_languages() {
        let cli = Cli::parse_from(["tinct", "languages"]);
        assert!(matches!(cli.command, Commands::Languages));
    }

    #[test]
    fn test_cli_parse_config_write() {
        let cli = Cli::parse_from(["tinct", "config", "--write", "out.toml"]);
        if let Commands::Config(args) = cli.command {
            assert_eq!(args.write, Some(PathBuf::from("out.toml")));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["tinct", "tokens", "a.c", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "tinct",
            "languages",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/tinct.toml",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/tinct.toml")));
    }
}
