//! CLI argument definitions for indicheck.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indicheck")]
#[command(version)]
#[command(about = "Validate hierarchical indicator model databases", long_about = None)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a dataset directory and print the report
    Check {
        /// Directory containing the dataset sheets (descricao.csv, ...)
        dir: PathBuf,
        /// Write the JSON summary to this file
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
        /// Maximum messages printed per check (0 = unlimited)
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// Do not run the spellcheck
        #[arg(long)]
        no_spellcheck: bool,
        /// Do not warn about over-long indicator names
        #[arg(long)]
        no_title_length: bool,
    },
    /// Print the expected column layout of one or all sheets
    Schema {
        /// Sheet name (e.g. "descricao"); omit for all sheets
        sheet: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
