//! # Provider Directory Server CLI
//!
//! Command-line interface for the provider directory backend.
//!
//! This binary runs the HTTP server with an in-memory provider directory,
//! optionally pre-populated from a YAML seed file.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use provider_directory_rs::http::{build_router, AppState};
use provider_directory_rs::seed::DirectorySeed;
use provider_directory_rs::store::{MemoryAccounts, MemoryDirectory};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load provider seed data (can work without file - empty directory)
    let seed = if let Some(path) = &cli.providers {
        DirectorySeed::load_from_path(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
    } else {
        DirectorySeed::default()
    };
    tracing::info!("loaded {} provider(s)", seed.providers.len());

    let directory = Arc::new(MemoryDirectory::with_providers(seed.providers));
    let accounts = Arc::new(MemoryAccounts::new());

    let state = AppState::builder().with_directory(directory).with_accounts(accounts).build()?;

    let app = build_router(state);

    let addr: SocketAddr = cli.listen.parse().map_err(io::Error::other)?;
    tracing::info!("starting provider-directory on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
