use anyhow::Result;
use clap::{Parser, Subcommand};

/// oaksurveys - Oak Surveys marketing site
#[derive(Parser)]
#[command(name = "oaksurveys")]
#[command(about = "Marketing site for Oak Surveys", long_about = None)]
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

    let config = oaksurveys::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    oaksurveys::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => oaksurveys::server::serve(config, host, port).await,
    }
}
