//! HTTP handlers that translate requests into store operations.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{delete, get, post},
};
use docstore::{
    backend::DynStoreBackend,
    document::Document,
    map::CreateOutcome,
};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<dyn DynStoreBackend>,
}

/// Builds the router serving `store`.
pub fn router(store: Arc<dyn DynStoreBackend>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/read/{id}", get(read_document))
        .route("/create", post(create_document))
        .route("/update", post(update_document))
        .route("/delete/{id}", delete(delete_document))
        .route("/list", get(list_documents))
        .with_state(AppState { store })
}

async fn home() -> &'static str {
    "docstore is running"
}

async fn read_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    state
        .store
        .read(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_document(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<String, ApiError> {
    let document = Document::from_slice(&body).map_err(ApiError::Body)?;
    let id = document.id.clone();

    match state.store.create_if_absent(document).await? {
        CreateOutcome::Inserted => {
            tracing::info!(%id, "created document");
            Ok(format!("Added document to database: {id}"))
        }
        CreateOutcome::Existing(_) => Err(ApiError::Conflict),
    }
}

async fn update_document(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<String, ApiError> {
    let document = Document::from_slice(&body).map_err(ApiError::Body)?;
    let id = document.id.clone();

    if !state.store.update(document).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(%id, "updated document");
    Ok(format!("Updated document in database: {id}"))
}

async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    // Advisory only: a concurrent delete may still win between the two calls.
    if !state.store.exists(&id).await? {
        return Err(ApiError::NotFound);
    }

    state.store.delete(&id).await?;

    tracing::info!(%id, "deleted document");
    Ok(format!("Deleted document from database: {id}"))
}

async fn list_documents(State(state): State<AppState>) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.store.list().await?))
}
