//! Command-line front end: render a single asset tag to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use static_asset_tags::{AssetConfig, AssetTagHelper};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TagKind {
    Stylesheet,
    Script,
    Image,
}

/// Render a cache-busted HTML tag for a static asset.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Kind of tag to render.
    #[arg(value_enum)]
    kind: TagKind,

    /// Logical asset URL relative to the asset root, e.g. /stylesheets/app.css.
    url: String,

    /// Directory containing the served static files.
    #[arg(long, default_value = "public")]
    asset_root: PathBuf,

    /// URL prefix the application is mounted under, empty at the root.
    #[arg(long, default_value = "")]
    mount_prefix: String,

    /// Load asset root and mount prefix from a JSON config file instead.
    #[arg(long, conflicts_with_all = ["asset_root", "mount_prefix"])]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to initialise logging")?;

    let config = match &cli.config {
        Some(path) => AssetConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AssetConfig {
            asset_root: cli.asset_root.clone(),
            mount_prefix: cli.mount_prefix.clone(),
        },
    };

    let helper = AssetTagHelper::new(config);
    let rendered = match cli.kind {
        TagKind::Stylesheet => helper.stylesheet_tag(&cli.url),
        TagKind::Script => helper.script_tag(&cli.url),
        TagKind::Image => helper.image_tag(&cli.url),
    }
    .with_context(|| format!("failed to render tag for {}", cli.url))?;

    println!("{rendered}");
    Ok(())
}
