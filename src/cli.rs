//! CLI definition for task-rest.
//!
//! Flags are the whole configuration surface; there are no config files.

use clap::Parser;
use std::net::SocketAddr;

/// Minimal REST API for task management backed by SQLite
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// Path to the database file
    #[arg(short, long, default_value = "tasks.db")]
    pub database: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(long, default_value = "2")]
    pub log: String,
}
