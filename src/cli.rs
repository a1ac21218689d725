//! Command-line interface for lifeboard.

use clap::Parser;

/// Lifeboard - Game of Life board service over HTTP
#[derive(Parser, Debug)]
#[command(name = "lifeboard")]
#[command(about = "Game of Life board service over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Path to the database file (created if it doesn't exist)
    #[arg(long, default_value = "lifeboard.db")]
    pub db_path: String,

    /// Keep boards in process memory instead of the database
    #[arg(long)]
    pub memory: bool,
}
