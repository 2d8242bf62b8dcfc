pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub use toml_config::ToolConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "name-strings")]
#[command(about = "Helpers for namespace/name identifiers and short labels")]
pub struct CliConfig {
    /// Path to a TOML file with default settings
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Split a qualified name into namespace and name
    Split {
        qualified: String,

        /// Reject malformed names instead of splitting loosely
        #[arg(long)]
        strict: bool,
    },
    /// Join a namespace and a name
    Join { namespace: String, name: String },
    /// Shorten text to a maximum byte length
    Shorten {
        text: String,

        #[arg(long)]
        max: Option<usize>,
    },
    /// Print the indefinite article for a noun
    Article {
        noun: String,

        #[arg(long)]
        padding: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads and validates the TOML defaults (if any), then applies
    /// command-line overrides. Overrides are not held to the file's limits,
    /// so `--max 0` is accepted.
    pub fn resolve(&self) -> crate::Result<ToolConfig> {
        let mut config = match &self.config {
            Some(path) => ToolConfig::from_file(path)?,
            None => ToolConfig::default(),
        };
        config.validate()?;

        if self.json {
            config.format = "json".to_string();
        }

        match &self.command {
            Command::Split { strict: true, .. } => config.strict = true,
            Command::Shorten { max: Some(max), .. } => config.max_length = Some(*max),
            Command::Article {
                padding: Some(padding),
                ..
            } => config.padding = padding.clone(),
            _ => {}
        }

        Ok(config)
    }
}
