use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use prefind::index::{load_corpus, IndexConfig, DEFAULT_MAX_WORD_LEN};
use prefind::output::{print_json, print_matches, print_stats};
use prefind::query::query;
use prefind::tui::{self, SessionConfig, DEFAULT_MAX_QUERY_LEN};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use termcolor::ColorChoice;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prefind")]
#[command(about = "Incremental word search over a frequency-ranked prefix index")]
struct Cli {
    /// Text corpus to index
    corpus: Option<PathBuf>,

    /// Print the ranked matches for PREFIX and exit instead of starting the TUI
    #[arg(short, long, value_name = "PREFIX")]
    query: Option<String>,

    /// Maximum number of matches to print (the total is always reported)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print matches as JSON
    #[arg(long, requires = "query")]
    json: bool,

    /// When to use colors in one-shot output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Print index statistics
    #[arg(long)]
    stats: bool,

    /// Longest token indexed; longer runs of letters are skipped
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN, value_parser = parse_positive)]
    max_word_len: usize,

    /// Longest query accepted in interactive mode
    #[arg(long, default_value_t = DEFAULT_MAX_QUERY_LEN, value_parser = parse_positive)]
    max_query_len: usize,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(corpus) = cli.corpus.as_deref() else {
        println!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    let interactive = cli.query.is_none() && !cli.stats;
    init_logging(cli.log_file.as_deref(), interactive)?;

    let config = IndexConfig {
        max_word_len: cli.max_word_len,
    };
    let (trie, stats) = load_corpus(corpus, &config, !interactive)?;

    if cli.stats {
        print_stats(&stats);
    }

    if let Some(prefix) = cli.query.as_deref() {
        let result = query(&trie, prefix);
        if cli.json {
            print_json(result.as_ref(), cli.limit)?;
        } else {
            print_matches(result.as_ref(), cli.limit, cli.color.into())?;
        }
        return Ok(());
    }

    if interactive {
        tui::run(
            trie,
            SessionConfig {
                max_query_len: cli.max_query_len,
                ..SessionConfig::default()
            },
        )?;
    }

    Ok(())
}

/// Interactive mode owns the terminal, so it only logs to a file
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let to_file = log_file.is_some();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level(to_file)))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level(to_file)))
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Level used when `RUST_LOG` is unset. Stderr shares the terminal with
/// one-shot output, so only warnings go there.
fn default_level(to_file: bool) -> &'static str {
    if to_file { "info" } else { "warn" }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
