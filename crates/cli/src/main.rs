//! ClauseCheck CLI — the main entry point.
//!
//! Commands:
//! - `serve`   — Start the HTTP analysis server
//! - `analyze` — Analyze an agreement file (or stdin) without the server

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "clausecheck",
    about = "ClauseCheck — Terms-of-Service risk analysis",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP analysis server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Analyze an agreement from a file, or "-" for stdin
    Analyze {
        /// Path to the agreement text, or "-" to read stdin
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Analyze { input } => commands::analyze::run(&input).await?,
    }

    Ok(())
}
