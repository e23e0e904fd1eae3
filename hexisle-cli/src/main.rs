//! HEXISLE CLI - Command-line interface
//!
//! Commands:
//! - serve: start the game server
//! - map: generate a map and print its statistics

mod map_cmd;
mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexisle")]
#[command(about = "HEXISLE hex-grid strategy server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the game server
    Serve(serve::ServeArgs),
    /// Generate a map and print land statistics
    Map(map_cmd::MapArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args),
        Commands::Map(args) => map_cmd::run(args),
    }
}
