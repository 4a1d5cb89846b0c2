mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use rafflekit_core::{Network, RafflekitError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rafflekit")]
#[command(about = "RaffleKit SDK - collectible detection for lottery collateral")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Network preset (mainnet, testnet, devnet, localnet)
    #[arg(short, long, global = true)]
    network: Option<Network>,

    /// RPC endpoint, overrides the network preset
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collectible detection commands
    #[command(subcommand)]
    Assets(commands::AssetCommands),

    /// Configuration commands
    #[command(subcommand)]
    Config(commands::ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "rafflekit={},rafflekit_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = cli.config.unwrap_or_else(CliConfig::default_path);

    let app = match CliConfig::load(&config_path)
        .and_then(|config| config.resolve(cli.network, cli.rpc_url))
    {
        Ok(app) => app,
        Err(e) => {
            match e {
                RafflekitError::Config(msg) => {
                    eprintln!("Error: Invalid configuration: {}", msg);
                    eprintln!("Check {} or the command-line overrides", config_path.display());
                }
                RafflekitError::Serialization(err) => {
                    eprintln!("Error: Could not parse {}: {}", config_path.display(), err);
                }
                _ => {
                    eprintln!("Error: {}", e);
                }
            }
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Assets(cmd) => commands::handle_asset_command(cmd, &app).await,
        Commands::Config(cmd) => commands::handle_config_command(cmd, &app).await,
    };

    if let Err(e) = result {
        match e {
            RafflekitError::InvalidAddress(addr) => {
                eprintln!("Error: Invalid address: {}", addr);
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
