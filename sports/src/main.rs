mod config;
mod db;
mod service;

use anyhow::Context;
use clap::Parser;
use db::{EventsRepository, SqliteEventsRepository};
use entain_proto::sports::sports_server::SportsServer;
use entain_store::Database;
use service::SportsService;
use std::sync::Arc;
use tonic::transport::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with span durations
    use tracing_subscriber::fmt::format::FmtSpan;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let args = config::Args::parse();
    tracing::info!("Starting sports gRPC server");

    let db_path = args.db_path();
    tracing::info!("Using database: {}", db_path.display());
    let database = Database::open(&db_path)
        .await
        .with_context(|| format!("failed to open {}", db_path.display()))?;

    // Schema and seed data are in place before the first request is served.
    let repo = Arc::new(SqliteEventsRepository::new(database.pool().clone()));
    repo.init().await.context("failed to initialise sports events")?;

    let addr = tokio::net::lookup_host(args.grpc_endpoint.as_str())
        .await
        .with_context(|| format!("invalid endpoint {}", args.grpc_endpoint))?
        .next()
        .with_context(|| format!("no address for {}", args.grpc_endpoint))?;
    tracing::info!("gRPC server listening on {}", addr);

    Server::builder()
        .add_service(SportsServer::new(SportsService::new(repo)))
        .serve(addr)
        .await?;

    Ok(())
}
