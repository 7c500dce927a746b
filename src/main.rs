use anyhow::Result;
use clap::{Parser, Subcommand};

/// visionflow - Vision Flow Technologies contact service
#[derive(Parser)]
#[command(name = "visionflow")]
#[command(about = "Contact wizard and email dispatch for the Vision Flow website", long_about = None)]
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
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = visionflow::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    visionflow::observability::init_observability(
        "visionflow",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => visionflow::cli::serve(config, host, port).await,
    }
}
