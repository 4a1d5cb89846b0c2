pub mod assets;
pub mod config;

pub use assets::{handle_asset_command, AssetCommands};
pub use config::{handle_config_command, ConfigCommands};
