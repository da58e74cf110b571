//! Thumbgrab main entry point
//!
//! Command-line interface around the thumbnail download pipeline.

use clap::Parser;
use std::path::PathBuf;
use thumbgrab::config::{load_config_with_hash, Config, DownloadConfig};
use thumbgrab::Downloader;
use tracing_subscriber::EnvFilter;

/// Thumbgrab: download image-search thumbnails
///
/// Fetches the image-search results page for a query and saves the
/// thumbnails it links to. Only low-resolution thumbnails are available
/// from the results markup, and the page offers roughly 20 at most.
#[derive(Parser, Debug)]
#[command(name = "thumbgrab")]
#[command(version = "1.0.0")]
#[command(about = "Download image-search thumbnails", long_about = None)]
struct Cli {
    /// Search term (URL-encode special characters yourself)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Number of thumbnails to download; zero or negative downloads all
    #[arg(short, long)]
    num: Option<i64>,

    /// Directory to save images into
    #[arg(short, long)]
    dir: Option<String>,

    /// Download exactly one image to the default directory
    #[arg(long, conflicts_with_all = ["num", "dir"])]
    one: bool,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration if a file was given, otherwise use defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    // CLI flags win over the config file
    let options = DownloadConfig {
        num: cli.num.unwrap_or(config.download.num),
        dir: cli.dir.clone().unwrap_or(config.download.dir),
    };

    let downloader = Downloader::with_user_agents(&config.user_agent)?;

    if cli.one {
        let image = downloader.download_one(&cli.query).await?;
        println!("{}", image.path.display());
    } else {
        let images = downloader.download(&cli.query, &options).await?;
        tracing::info!("Downloaded {} images", images.len());
        for image in &images {
            println!("{}", image.path.display());
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("thumbgrab=info,warn"),
            1 => EnvFilter::new("thumbgrab=debug,info"),
            2 => EnvFilter::new("thumbgrab=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
