//! Host tools for measured templates on a grid board.
//!
//! Loads a board scenario and prints template highlights, caught tokens,
//! measurements and placement previews.
//! Run with: `template-cli <command> <scenario.ron>`

mod board;
mod commands;
mod session;

use anyhow::Result;
use clap::Parser;
use commands::{Highlight, Measure, Place, Tokens};
use session::GlobalArgs;

/// Measured template tools for grid boards
#[derive(Parser)]
#[command(name = "template-cli")]
#[command(about = "Measured template tools for grid boards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Draw the cells highlighted by placed templates
    Highlight(Highlight),

    /// List tokens standing inside a template
    Tokens(Tokens),

    /// Measure the distance between two pixel points
    Measure(Measure),

    /// Preview a template dragged out between two points
    Place(Place),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Highlight(cmd) => cmd.execute(&cli.global),
        Command::Tokens(cmd) => cmd.execute(&cli.global),
        Command::Measure(cmd) => cmd.execute(&cli.global),
        Command::Place(cmd) => cmd.execute(&cli.global),
    }
}
