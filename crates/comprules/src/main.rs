//! comprules CLI - Comprehensive Rules page generator.
//!
//! Provides commands for:
//! - `build`: Download the rules text and write the HTML page
//! - `markdown`: Write the structured rules markup only
//! - `locate`: Print the URL of the current rules text

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, LocateArgs, MarkdownArgs};
use output::Output;

/// comprules - Magic: The Gathering Comprehensive Rules as a single HTML page.
#[derive(Parser)]
#[command(name = "comprules", version, about)]
struct Cli {
    /// Enable verbose output (stage timings and document statistics).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the rules HTML page.
    Build(BuildArgs),
    /// Write the structured rules markup.
    Markdown(MarkdownArgs),
    /// Print the URL of the rules text.
    Locate(LocateArgs),
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
        Commands::Build(args) => args.execute(),
        Commands::Markdown(args) => args.execute(),
        Commands::Locate(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
