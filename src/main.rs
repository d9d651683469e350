//! Chatmatch service CLI
//!
//! Runs the chat backend or computes friend suggestions offline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use chatmatch::api::{AppState, create_router};
use chatmatch::config::Config;
use chatmatch::{initialize, load_population, open_db, recommend};

#[derive(Parser)]
#[command(name = "chatmatch")]
#[command(version)]
#[command(about = "Minimal chat backend with interest-based friend suggestions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON); flags below override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// RocksDB directory holding registered accounts
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Profile population document consulted by friend suggestions
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print suggested friends for a profile without starting the service
    Suggest {
        /// Profile id to compute suggestions for
        user_id: u64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(db_path) = cli.db {
        config.storage.db_path = db_path;
    }
    if let Some(profiles_path) = cli.profiles {
        config.storage.profiles_path = profiles_path;
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let db = open_db(&config.storage.db_path)?;
            initialize(&db)?;

            let state = AppState {
                db,
                profiles_path: config.storage.profiles_path,
            };
            let router = create_router(state);

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("Listening on {}", addr);
            axum::serve(listener, router).await?;
        }
        Commands::Suggest { user_id } => {
            let snapshot = load_population(&config.storage.profiles_path)?;
            let suggestions = recommend(user_id, &snapshot)?;

            if suggestions.is_empty() {
                println!("No suggestions for user {}", user_id);
            }
            for (rank, profile) in suggestions.iter().enumerate() {
                println!("{}. user {}", rank + 1, profile.id);
                for (interest, level) in &profile.interests {
                    println!("     {}: {}", interest, level);
                }
            }
        }
    }

    Ok(())
}
