//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError, Mode};

#[derive(Debug, Parser)]
#[command(
    name = "callerboard",
    version,
    about = "Browse recent callers of the vanity-number service"
)]
pub struct Cli {
    /// Path to config file (default: ~/.config/callerboard/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the build mode
    #[arg(long, global = true, value_enum, env = "CALLERBOARD_MODE")]
    pub mode: Option<Mode>,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Interactive view (default)
    Tui,
    /// Fetch once and print the recent callers
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Load the config file, apply command-line overrides, then validate.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::parse_from(&path)?;

        if let Some(mode) = self.mode {
            config.app.mode = mode;
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}
