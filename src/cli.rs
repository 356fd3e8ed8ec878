use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored table output
    Terminal,
    /// Machine-readable JSON
    Json,
    /// Markdown report
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "dqscope")]
#[command(about = "Terminal dashboard for visualizing data quality scores", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive dashboard
    Dashboard {
        /// Directory to offer data files from (defaults to the current directory)
        input: Option<PathBuf>,

        /// Configuration file (defaults to .dqscope.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the simulated analysis delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Override the number of radar grid levels
        #[arg(long)]
        levels: Option<usize>,
    },

    /// Print or write the quality report without entering the dashboard
    Report {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File name to record as the report source (metadata only)
        #[arg(long)]
        source: Option<PathBuf>,
    },

    /// Create a default .dqscope.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
