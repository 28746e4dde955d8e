use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use tasker_config::DisplayConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tasker` binary.
#[derive(Debug, Parser)]
#[command(name = "tasker", version, about = "Tasker - personal and work task tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: json, table, raw (defaults to `display.format` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags, falling back to config for the format.
    pub fn global_flags(&self, display: &DisplayConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&display.format, true)
                .map_err(|error| anyhow!("invalid display.format in config: {error}"))?,
        };

        Ok(GlobalFlags { format })
    }

    /// The chosen subcommand, `interactive` when none was given.
    #[must_use]
    pub fn subcommand(&self) -> Commands {
        self.command.unwrap_or_default()
    }
}
