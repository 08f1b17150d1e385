//! CLI command implementations.

pub mod config;
pub mod home;
pub mod session;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Only list products in this category (e.g. "electronics").
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
