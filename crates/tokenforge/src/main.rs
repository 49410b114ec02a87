//! tokenforge command line interface.
//!
//! # Usage
//!
//! ```bash
//! # Web theme files from ./tokens into ./src/styles
//! tokenforge
//!
//! # Every platform, pruning web entries no longer in the tokens
//! tokenforge all --prune
//!
//! # Explicit collections
//! TOKENS_PRIMITIVE_KEY="Primitives" tokenforge android --tokens design/tokens.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tokenforge::{
    CollectionRules, Compiler, CompilerConfig, FsStore, MergePolicy, PlatformSelection, RunSummary,
    DEFAULT_TOKEN_SOURCE,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tokenforge")]
#[command(version)]
#[command(about = "Compile design tokens into web, Android, iOS, and Flutter theme files")]
#[command(long_about = None)]
struct Cli {
    /// Target platform: web, android, ios, flutter, or all
    #[arg(default_value = "web")]
    platform: String,

    /// Token document, or a directory of *.json token documents
    #[arg(long, default_value = DEFAULT_TOKEN_SOURCE)]
    tokens: PathBuf,

    /// Root directory for generated files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Drop web entries that the current tokens no longer produce
    #[arg(long)]
    prune: bool,

    /// Top-level key of the primitive collection
    #[arg(long, env = "TOKENS_PRIMITIVE_KEY")]
    primitive_key: Option<String>,

    /// Top-level key of the component/brand collection
    #[arg(long, env = "TOKENS_COMPONENT_KEY")]
    component_key: Option<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(summary) => {
            println!(
                "Generated {} files for {} themes from {} documents",
                summary.files.len(),
                summary.themes,
                summary.documents
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<RunSummary> {
    let platforms: PlatformSelection = cli.platform.parse()?;
    let merge_policy = if cli.prune {
        MergePolicy::Prune
    } else {
        MergePolicy::Retain
    };

    let config = CompilerConfig::new(&cli.tokens)
        .with_platforms(platforms)
        .with_rules(CollectionRules::default().with_overrides(cli.primitive_key, cli.component_key))
        .with_merge_policy(merge_policy);

    let compiler = Compiler::new(config).context("failed to set up generators")?;
    let mut store = FsStore::new(&cli.out_dir);
    compiler
        .run(&mut store)
        .with_context(|| format!("failed to compile tokens from {}", cli.tokens.display()))
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
