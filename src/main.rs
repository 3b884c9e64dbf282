#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use workout_datasource::{cli, server, store::WorkoutStore, utils};

#[macro_use]
extern crate workout_datasource;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let addr = format!("{}:{}", cli.host, cli.port);
    dlog!(
        "mode=serve addr={} timeout_secs={}",
        addr,
        cli.timeout_secs
    );

    let store = Arc::new(WorkoutStore::new());
    let app = server::create_router(
        server::AppState::new(store),
        Duration::from_secs(cli.timeout_secs),
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(addr = %addr, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(err = %e, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("interrupt received, shutting down");
}
