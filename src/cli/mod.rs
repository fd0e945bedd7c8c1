//! Command-line interface for metagraph-workflow-config.
//!
//! Available commands:
//!
//! - **keys**: List the configuration keys a workflow config file may contain
//! - **formats**: List the supported annotation matrix formats
//! - **label-option**: Print the `metagraph annotate` option for a label source
//!
//! ## Usage
//!
//! ```text
//! # All keys, grouped by subsystem
//! metagraph-workflow-config keys
//!
//! # Only the per-rule resource overrides, as JSON
//! metagraph-workflow-config keys --group rule_overrides --format json
//!
//! # Option to pass to the annotator
//! metagraph-workflow-config label-option sequence_file_names
//! ```

use clap::{Parser, Subcommand};

pub mod formats;
pub mod keys;
pub mod label_option;

#[derive(Parser)]
#[command(name = "metagraph-workflow-config")]
#[command(version)]
#[command(about = "Inspect configuration keys and annotation options of the metagraph workflow")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List workflow configuration keys
    Keys(keys::KeysArgs),

    /// List supported annotation matrix formats
    Formats,

    /// Print the annotation command-line option for a label source
    LabelOption(label_option::LabelOptionArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
