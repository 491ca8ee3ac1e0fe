// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry::server::{ServerConfig, run_server};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about = "Recipe CRUD service backed by SQLite", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the recipe database
    Init {
        /// Database path (default: pantry.db)
        #[arg(short, long, default_value = "pantry.db")]
        db_path: PathBuf,
    },
    /// Run the HTTP server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        bind_addr: SocketAddr,
        /// Database path (default: pantry.db)
        #[arg(short, long, default_value = "pantry.db")]
        db_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { db_path }) => {
            info!("Initializing recipe database at {}", db_path.display());
            pantry::db::init(&db_path)?;
            println!("Database initialized at {}", db_path.display());
            Ok(())
        }
        Some(Commands::Serve { bind_addr, db_path }) => {
            run_server(ServerConfig { bind_addr, db_path }).await
        }
        None => {
            // No command provided, show help
            println!("Pantry v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'pantry --help' for usage information");
            Ok(())
        }
    }
}
