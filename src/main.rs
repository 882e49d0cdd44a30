//! CLI entry point for build-posts

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "build-posts")]
#[command(version)]
#[command(about = "Render markdown posts into HTML pages and a sitemap", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "build_posts=debug,info"
    } else {
        "build_posts=info"
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

    let site = build_posts::Site::new(&base_dir)?;
    let report = site.generate()?;

    let sitemap_name = report
        .sitemap
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| site.config.sitemap.clone());
    println!(
        "Generated {} pages and {}",
        report.generated(),
        sitemap_name
    );

    Ok(())
}
