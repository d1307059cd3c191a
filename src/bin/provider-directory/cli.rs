//! Command-line interface definitions for the provider directory server.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the provider directory server.
#[derive(Debug, Parser)]
#[command(name = "provider-directory")]
#[command(
    author,
    version,
    about = "Provider directory REST backend: provider lookup and user registration"
)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub listen: String,

    /// Path to YAML provider seed file
    #[arg(long)]
    pub providers: Option<PathBuf>,
}
