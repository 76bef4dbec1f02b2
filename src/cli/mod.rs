//! CLI module

pub mod serve;

use clap::{Parser, Subcommand};

/// Phraseforge - multi-tenant localization platform backend
#[derive(Parser)]
#[command(name = "phraseforge-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
