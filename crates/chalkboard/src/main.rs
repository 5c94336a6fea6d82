//! Chalkboard CLI - YAML menu to static HTML page generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use chalkboard_menu::{load_document, validate};
use chalkboard_static::{BuildConfig, PageBuilder};

mod config;

#[derive(Parser)]
#[command(name = "chalkboard")]
#[command(about = "YAML menu to static HTML page generator")]
#[command(version)]
pub struct Cli {
    /// Path to the menu YAML document
    menu_path: Option<PathBuf>,

    /// Path of the generated HTML page
    output_path: Option<PathBuf>,

    /// Path to chalkboard.toml config file
    #[arg(short, long, default_value = "chalkboard.toml")]
    config: PathBuf,

    /// Skip stylesheet minification
    #[arg(long)]
    no_minify: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; standard output is reserved for the status line.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let file_config = config::load(&cli.config)?;

    let menu_path = cli
        .menu_path
        .unwrap_or_else(|| PathBuf::from(&file_config.menu.path));
    let output_path = cli
        .output_path
        .unwrap_or_else(|| PathBuf::from(&file_config.build.output));
    let minify = if cli.no_minify {
        false
    } else {
        file_config.build.minify
    };

    tracing::debug!("Loading menu from {}", menu_path.display());
    let doc = load_document(&menu_path)?;
    let menu = validate(&doc)?;

    let builder = PageBuilder::new(BuildConfig {
        output_path,
        minify,
    });
    let result = builder.build(&menu)?;

    tracing::info!(
        "Rendered {} sections with {} items in {}ms",
        result.sections,
        result.items,
        result.duration_ms
    );

    println!("Generated {}", result.output_path.display());

    Ok(())
}
