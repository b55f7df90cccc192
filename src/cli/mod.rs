//! CLI module for tracedash
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `show` - Load traces and print the dashboard
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Load the last 100 traces and show page 2
//! tracedash show --limit 100 --page 2
//!
//! # Plot tokens instead of latency, dump everything as JSON
//! tracedash show --metric tokens --json
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod show;
pub mod terminal;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tracedash - LLM trace analytics dashboard
#[derive(Parser, Debug)]
#[command(
    name = "tracedash",
    version,
    about = "Trace analytics dashboard for LLM API calls"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load traces and print KPIs, the call table and charts
    Show(ShowArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "tracedash.toml")]
    pub config: PathBuf,

    /// Base URL of the trace API
    #[arg(short, long, env = "TRACEDASH_API_URL")]
    pub url: Option<String>,

    /// Number of traces to load (1-200)
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Table page to show
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Time-series metric (avg_latency, calls, tokens)
    #[arg(short, long)]
    pub metric: Option<String>,

    /// Model chart metric (calls, tokens, avg_latency)
    #[arg(long)]
    pub model_metric: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, env = "TRACEDASH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "tracedash.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
