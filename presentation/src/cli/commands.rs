//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for termgate
#[derive(Parser, Debug)]
#[command(name = "termgate")]
#[command(author, version, about = "Resolve the current taxonomy term and evaluate bundle conditions")]
#[command(long_about = r#"
termgate resolves the "current taxonomy term" of a request path and evaluates
bundle conditions against it.

Site data (categories, terms and routes) is read from a TOML fixture file.
Condition configuration is stored per instance in a JSON file.

Configuration files are loaded from (in priority order):
1. TERMGATE_* environment variables
2. --config <path>     Explicit config file
3. ./termgate.toml     Project-level config
4. ~/.config/termgate/config.toml   Global config

Example:
  termgate options
  termgate configure front_block --bundle 1 --bundle 2
  termgate resolve /taxonomy/term/10
  termgate evaluate front_block /taxonomy/term/10
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Append condition decisions to this JSONL file
    #[arg(long, value_name = "PATH", global = true)]
    pub decision_log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the current term context for a request path
    Resolve {
        /// Request path, e.g. /taxonomy/term/10
        path: String,
    },

    /// List the contexts the provider can offer
    Contexts,

    /// List the bundles a condition can select
    Options,

    /// Save the bundle selection of a condition instance
    Configure {
        /// Condition instance id
        instance: String,

        /// Selected bundle id (can be specified multiple times)
        #[arg(short, long = "bundle", value_name = "ID")]
        bundles: Vec<String>,

        /// Match when the term is NOT in the selection
        #[arg(long)]
        negate: bool,
    },

    /// Evaluate a condition instance for a request path
    Evaluate {
        /// Condition instance id
        instance: String,

        /// Request path, e.g. /taxonomy/term/10
        path: String,
    },

    /// Show configuration file locations and exit
    ShowConfig,
}
