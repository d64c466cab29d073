//! CLI entry point for mdblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdblog")]
#[command(version)]
#[command(about = "Turns a directory of markdown posts into a static HTML site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site from ./content into ./build
    #[command(alias = "g")]
    Generate,

    /// Remove the build directory
    Clean,

    /// List posts, newest first
    List,

    /// Create a new post dated today
    New {
        /// Title of the new post
        title: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdblog=debug,info"
    } else {
        "mdblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let site = mdblog::Site::new(&base_dir)?;
            tracing::info!("Generating site from {:?}", site.content_dir);
            site.generate()?;
            println!("Site generation complete!");
        }

        Commands::Clean => {
            let site = mdblog::Site::new(&base_dir)?;
            tracing::info!("Cleaning build folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = mdblog::Site::new(&base_dir)?;
            mdblog::commands::list::run(&site)?;
        }

        Commands::New { title } => {
            let site = mdblog::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            site.new_post(&title)?;
        }

        Commands::Version => {
            println!("mdblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
