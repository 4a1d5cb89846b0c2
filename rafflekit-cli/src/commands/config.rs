use crate::config::AppConfig;
use clap::Subcommand;
use rafflekit_core::Result;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}

pub async fn handle_config_command(cmd: ConfigCommands, config: &AppConfig) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }

    Ok(())
}
