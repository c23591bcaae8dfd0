//! tagdown CLI - Markdown with custom tags.
//!
//! Provides commands for:
//! - `render`: Render Markdown files (or stdin) to HTML
//! - `styles`: Print the CSS style block used by rendered documents

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, StylesArgs};
use output::Output;

/// tagdown - Markdown with video, color and direction tags.
#[derive(Parser)]
#[command(name = "tagdown", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown documents to HTML.
    Render(RenderArgs),
    /// Print the style block.
    Styles(StylesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Styles(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
