//! Docsite CLI - Hyperapp documentation site.
//!
//! Provides commands for:
//! - `render`: Render one page into its mount target
//! - `inspect`: Print the application state for a URL
//! - `export`: Write a static snapshot of every page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExportArgs, InspectArgs, RenderArgs};
use output::Output;

/// Docsite - Hyperapp documentation site.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (dispatch and effect logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page and print the mount target's HTML.
    Render(RenderArgs),
    /// Print the application state for a URL as JSON.
    Inspect(InspectArgs),
    /// Write every page as a standalone HTML document.
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
        Commands::Export(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
