use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*};

use healthpipe::runner::LocalRunner;
use healthpipe::{cli, pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .init();

    let config = cli::get_opts();
    let runner = LocalRunner::new();
    pipeline::run_pipeline(Path::new(".healthpipe"), &config, &runner)
        .await
        .context("data processing run failed")?;

    Ok(())
}
