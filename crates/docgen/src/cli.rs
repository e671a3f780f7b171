//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docgen")]
#[command(version, about = "Render documentation templates and update changed targets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to docgen.toml (default: search the current and parent directories)
    #[arg(short, long, global = true, env = "DOCGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every template and write targets whose content changed
    Generate {
        /// Fail on placeholders that have no value
        #[arg(long)]
        strict: bool,
    },

    /// Report out-of-date targets without writing (exits 1 if any)
    Check {
        /// Fail on placeholders that have no value
        #[arg(long)]
        strict: bool,
    },
}
