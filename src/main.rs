use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// mindbridge - MindBridge Education website
#[derive(Parser)]
#[command(name = "mindbridge")]
#[command(about = "MindBridge Education single-page website", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Render the landing page to a file, or stdout
    Render {
        /// Output file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mindbridge::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mindbridge::observability::init_observability("mindbridge", &config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => mindbridge::cli::serve(config, host, port).await,
        Commands::Render { output } => mindbridge::cli::render(&config, output),
    }
}
