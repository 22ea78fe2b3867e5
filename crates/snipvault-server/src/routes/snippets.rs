use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::{Value, json};

use snipvault_core::models::snippet::{CreateSnippetDto, Snippet, UpdateSnippetDto};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn list_snippets(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Snippet>>, ApiError> {
    let table = state.table.lock().await;
    Ok(Json(table.list_for(&user.sub)))
}

pub async fn create_snippet(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(dto): Json<CreateSnippetDto>,
) -> Result<Json<Snippet>, ApiError> {
    dto.validate()?;
    let mut table = state.table.lock().await;
    let snippet = table.insert(&user.sub, &dto);
    tracing::info!(id = %snippet.id, owner = %user.sub, "snippet created");
    Ok(Json(snippet))
}

pub async fn update_snippet(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateSnippetDto>,
) -> Result<Json<Snippet>, ApiError> {
    patch.validate()?;
    let mut table = state.table.lock().await;
    table
        .update(&user.sub, &id, &patch)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("snippet not found: {id}")))
}

pub async fn delete_snippet(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut table = state.table.lock().await;
    if table.delete(&user.sub, &id) {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound(format!("snippet not found: {id}")))
    }
}
