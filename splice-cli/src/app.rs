use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// splice - SPLICE drum machine pattern inspection
#[derive(Debug, Parser)]
#[command(name = "splice", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical text report for a pattern file.
    Render {
        /// Path to the .splice pattern file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Display pattern overview: version, tempo, and per-track summary.
    Info {
        /// Path to the .splice pattern file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
