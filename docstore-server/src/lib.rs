//! HTTP adapter for docstore.
//!
//! The adapter maps a small REST surface onto a [`DynStoreBackend`] and knows nothing
//! about which access discipline sits behind it:
//!
//! | route | store operation | responses |
//! |-------|-----------------|-----------|
//! | `GET /read/{id}` | `read` | 200 JSON document, 404 |
//! | `POST /create` | `create_if_absent` | 200, 409 existing id, 500 bad body |
//! | `POST /update` | `update` | 200, 404 missing id, 500 bad body |
//! | `DELETE /delete/{id}` | `exists` then `delete` | 200, 404 |
//! | `GET /list` | `list` | 200 JSON array |

use std::{future::Future, io, sync::Arc};

use docstore::backend::DynStoreBackend;
use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod routes;

pub use config::{Config, Mode};
pub use routes::router;

/// Serves `store` on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<dyn DynStoreBackend>,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await
}
