use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use ranking_reels::{
    catalog::load_ranking_categories,
    config::Config,
    pipeline::{MoodChoice, PipelineRunner, StatusHandle},
    server,
};

#[derive(Parser)]
#[command(
    name = "ranking-reels",
    version,
    about = "Turn college rankings into short-form ranking videos",
    long_about = "Ranking Reels collects college rankings, formats them with templates and pairs each ranking with campus imagery and a trending audio mood. Every stage currently produces text placeholders."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data root directory, overrides the configuration
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web interface
    Serve {
        /// Address to bind, overrides the configuration
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Run the whole pipeline once
    Run {
        /// Category to generate (repeatable); defaults to every catalogue category
        #[arg(short = 'C', long = "category")]
        categories: Vec<String>,

        /// Audio mood for every video; suggested per category when omitted
        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Only write the raw rankings and placeholder assets
    Collect,

    /// Format, compose and pair every ranking already on disk
    Generate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Ranking Reels v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };
    if let Some(root) = cli.root {
        config.paths.root = root;
    }
    config.validate()?;
    info!("Data root: {:?}", config.paths.root);

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            server::serve(config).await?;
        }
        Command::Run { categories, mood } => {
            let categories = if categories.is_empty() {
                load_ranking_categories(&config.paths.categories_file())?
                    .into_inner()
                    .into_iter()
                    .map(|entry| entry.name)
                    .collect()
            } else {
                categories
            };
            let mood = mood.map(MoodChoice::Fixed).unwrap_or(MoodChoice::Suggested);

            let runner = PipelineRunner::new(config, StatusHandle::new());
            let videos = tokio::task::spawn_blocking(move || runner.run(&categories, &mood)).await??;

            info!("Generated {} videos", videos.len());
            for video in &videos {
                info!("  {} ({}) -> {}", video.category, video.audio_mood, video.url);
            }
        }
        Command::Collect => {
            config.paths.ensure_dirs()?;
            PipelineRunner::new(config, StatusHandle::new()).collect_assets()?;
        }
        Command::Generate => {
            let runner = PipelineRunner::new(config, StatusHandle::new());
            let paired = tokio::task::spawn_blocking(move || runner.generate_all()).await??;

            info!("Generated {} videos with audio", paired.len());
            for video in &paired {
                info!("  {} ({}) -> {}", video.video_path.display(), video.audio_mood, video.path.display());
            }
        }
    }

    Ok(())
}
