mod app;
mod handlers;
mod state;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use picus_core::storage::ItemRepository;
use picus_storage::{DynamoDbConfig, DynamoDbRepository, InMemoryRepository};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, state::AppState};

/// Picus API - list, create and read items stored in DynamoDB
#[derive(Parser, Debug)]
#[command(name = "picus-api")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = Storage::Dynamodb, env = "PICUS_STORAGE")]
    storage: Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Storage {
    /// DynamoDB table named by DYNAMODB_TABLE_NAME
    Dynamodb,
    /// Process-local store, lost on exit
    Memory,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "picus_api=info,picus_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let repository = init_repository(cli.storage).await;
    let app = create_app(AppState::new(repository));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the repository once; every request shares it through the state.
async fn init_repository(storage: Storage) -> Arc<dyn ItemRepository> {
    match storage {
        Storage::Dynamodb => {
            let config = DynamoDbConfig::from_env();
            tracing::info!(store = %config.target_display(), "DynamoDB client initialized");
            Arc::new(DynamoDbRepository::connect(&config).await)
        }
        Storage::Memory => {
            tracing::warn!("Using in-memory storage, items are lost on exit");
            Arc::new(InMemoryRepository::new())
        }
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
