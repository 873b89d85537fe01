use std::path::PathBuf;

use clap::{Parser, Subcommand};
use redcast_core::{load_app_config_from_env, parse_join_key_policy, AppConfig};

mod charts;

#[derive(Debug, Parser)]
#[command(name = "redcast")]
#[command(about = "RedCast reconciliation pipeline command line interface")]
struct Cli {
    /// Override the post source path.
    #[arg(long, global = true)]
    posts: Option<PathBuf>,

    /// Override the sentiment source path.
    #[arg(long, global = true)]
    sentiment: Option<PathBuf>,

    /// Join key policy: auto|title|date|title-date.
    #[arg(long, global = true)]
    join_key: Option<String>,

    /// Number of entries in the top-posts view.
    #[arg(long, global = true)]
    top_n: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the pipeline and emit the chart spec catalogue as JSON.
    Charts {
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,

        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the pipeline and print a per-view status table.
    Summary,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    // Logs go to stderr so `charts` can pipe clean JSON through stdout.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Charts { pretty, out }) => charts::run_charts(&config, pretty, out),
        Some(Commands::Summary) => charts::run_summary(&config),
        None => charts::run_charts(&config, false, None),
    }
}

/// Merge CLI flag overrides into the env-derived configuration.
fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = load_app_config_from_env()?;
    if let Some(posts) = &cli.posts {
        config.posts_path.clone_from(posts);
    }
    if let Some(sentiment) = &cli.sentiment {
        config.sentiment_path.clone_from(sentiment);
    }
    if let Some(join_key) = &cli.join_key {
        config.join_key = parse_join_key_policy(join_key)?;
    }
    if let Some(top_n) = cli.top_n {
        config.top_n = top_n;
    }
    Ok(config)
}
