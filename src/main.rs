use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use antiplag::config::Config;
use antiplag::output::{dot, terminal};
use antiplag::{create_checker, SubmissionSet};

/// Antiplag: flag suspiciously similar source submissions.
///
/// Compares the same file across many submitters and reports the pairs whose
/// normalized contents are more similar than the threshold.
#[derive(Parser)]
#[command(name = "antiplag", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare one file across a directory of cloned repositories
    Check {
        /// Directory whose subdirectories are the submitters' repositories
        repo_root: PathBuf,

        /// Path of the file to compare, relative to each repository
        file: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Compare the files listed in a JSON manifest ({"identity": "path", ...})
    Compare {
        manifest: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Print a file after comment and blank-line stripping
    Normalize { file: PathBuf },
}

#[derive(Args)]
struct RunArgs {
    /// Only show matches involving this submitter
    #[arg(short, long)]
    identity: Option<String>,

    /// Report pairs strictly above this similarity (default: ANTIPLAG_THRESHOLD or 0.85)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Scoring strategy: cosine_similarity or sequence_matcher
    #[arg(short, long)]
    strategy: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Dot,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON/DOT output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("antiplag=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            repo_root,
            file,
            run,
        } => {
            info!(root = %repo_root.display(), file = %file.display(), "Resolving submissions");
            let submissions = SubmissionSet::from_repo_root(&repo_root, &file)?;
            run_comparison(submissions, &run)?;
        }

        Commands::Compare { manifest, run } => {
            let submissions = SubmissionSet::from_manifest(&manifest)?;
            run_comparison(submissions, &run)?;
        }

        Commands::Normalize { file } => {
            let raw = read_source(&file)?;
            println!("{}", antiplag::normalize(&raw));
        }
    }

    Ok(())
}

/// Build a checker from config + flags, evaluate, and print in the chosen format.
fn run_comparison(submissions: SubmissionSet, run: &RunArgs) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(threshold) = run.threshold {
        config.threshold = threshold;
    }
    if let Some(strategy) = &run.strategy {
        config.strategy = strategy.clone();
    }
    config.require_valid_threshold()?;

    if submissions.is_empty() {
        anyhow::bail!("No submissions found to compare.");
    }
    info!(
        submissions = submissions.len(),
        strategy = %config.strategy,
        threshold = config.threshold,
        "Comparing submissions"
    );

    let mut checker = create_checker(&config.strategy, submissions, config.threshold)?;

    let matches = match &run.identity {
        Some(identity) => checker.result_for_identity(identity),
        None => checker.results().to_vec(),
    };
    terminal::display_diagnostics(checker.diagnostics());

    match (run.format, &run.identity) {
        (Format::Json, _) => println!("{}", antiplag::output::to_json(&matches)?),
        (Format::Dot, _) => print!("{}", dot::to_dot(&matches)),
        (Format::Text, Some(identity)) => {
            terminal::display_identity_report(identity, &matches, config.threshold)
        }
        (Format::Text, None) => terminal::display_match_list(&matches, config.threshold),
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
