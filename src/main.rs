use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;
mod migrate;

/// filmapi - Movie catalog JSON service
#[derive(Parser)]
#[command(name = "filmapi")]
#[command(about = "Movie and director catalog with token authentication", long_about = None)]
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
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Load the demo directors and movies into an empty catalog
    Seed,
    /// Change the role of an account
    SetRole {
        #[arg(long)]
        username: String,

        #[arg(long, value_enum)]
        role: cli::user::Role,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = filmapi::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    filmapi::observability::init_observability(
        "filmapi",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => migrate::migrate(&config).await,
        Commands::Reset => migrate::reset(&config).await,
        Commands::Seed => cli::catalog::seed(config).await,
        Commands::SetRole { username, role } => cli::user::set_role(config, username, role).await,
    }
}
