// NOTE: `render` and `regions` run the full page setup (grammar pass,
// alternation check, first entry) before printing anything, so their output
// matches what `show` displays.

use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gviz")]
#[command(about = "View grammar parse logs with abbreviation and slideshow navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml [default: $GVIZ_PATH, then the platform data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Columns to lay the page out in [default: config, then terminal width, then 100]
    #[arg(long, global = true)]
    pub width: Option<u16>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the page as text after abbreviation
    Render {
        /// HTML page produced by the parser
        file: PathBuf,

        /// Log entry to show (1-based)
        #[arg(long)]
        entry: Option<usize>,
    },

    /// Print the collapsible regions of the grammar or of one entry
    Regions {
        file: PathBuf,

        /// Report the regions of this log entry (1-based) instead of the grammar
        #[arg(long)]
        entry: Option<usize>,
    },

    /// Step through the parse log interactively
    Show { file: PathBuf },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
