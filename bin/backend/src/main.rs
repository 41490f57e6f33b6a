pub mod api;
pub mod cli;
pub mod http;
pub mod model;
pub mod opts;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let runtime = Cli::create_runtime(cli.worker_threads)?;
    runtime.block_on(async move { http::run(cli.http, cli.engine).await })
}
