//! Command-line configuration for the racing server.

use clap::Parser;
use std::path::PathBuf;

/// Database file name inside the data directory.
pub const DB_FILE: &str = "racing.db";

#[derive(Debug, Parser)]
#[command(name = "racing-server", about = "gRPC query service for races")]
pub struct Args {
    /// gRPC server endpoint
    #[arg(long, default_value = "localhost:9000")]
    pub grpc_endpoint: String,

    /// SQLite database path (defaults to the data directory)
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

impl Args {
    pub fn db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| entain_store::get_db_path(DB_FILE))
    }
}
