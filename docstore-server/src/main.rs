use std::sync::Arc;

use clap::Parser;
use docstore::{backend::DynStoreBackend, memory::DocumentStore};
use docstore_server::{Config, Mode};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(config).await {
        tracing::error!("server exited with an error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(config.bind).await.inspect_err(|e| {
        tracing::error!("unable to listen on {}: {e}", config.bind);
    })?;

    match config.mode {
        Mode::Lock => {
            tracing::info!("using lock-based document store");
            let store: Arc<dyn DynStoreBackend> = Arc::new(DocumentStore::new());

            tracing::info!("server is running on {}", config.bind);
            docstore_server::serve(listener, store, shutdown_signal()).await?;
        }
        Mode::Actor => {
            tracing::info!(
                mailbox_capacity = config.mailbox_capacity,
                request_timeout_ms = ?config.request_timeout_ms,
                "using actor-based document store"
            );
            let (actor, handle) = config.actor_builder().build_actor()?;
            let worker = actor.spawn();
            let store: Arc<dyn DynStoreBackend> = Arc::new(handle);

            tracing::info!("server is running on {}", config.bind);
            docstore_server::serve(listener, store, shutdown_signal()).await?;

            // The router held the last handle, so the actor drains its inbox and stops.
            let documents = worker.await?;
            tracing::info!(documents = documents.len(), "store actor drained");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c signal: {e}");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
