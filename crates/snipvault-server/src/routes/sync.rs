use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use snipvault_core::models::snippet::CreateSnippetDto;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    pub snippets: Vec<CreateSnippetDto>,
}

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub synced_count: usize,
}

/// Commit a batch of locally-created snippets under the caller's
/// identity, all or nothing. Client-supplied ids never reach this point;
/// the table mints fresh ones. A validation failure anywhere in the
/// batch rejects the whole request with nothing committed.
pub async fn batch_sync(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<SyncRequest>,
) -> Result<Json<SyncResponse>, ApiError> {
    if req.snippets.is_empty() {
        return Ok(Json(SyncResponse {
            success: true,
            synced_count: 0,
        }));
    }

    let mut table = state.table.lock().await;
    let synced_count = table.insert_batch(&user.sub, &req.snippets)?;
    tracing::info!(owner = %user.sub, synced_count, "batch sync committed");

    Ok(Json(SyncResponse {
        success: true,
        synced_count,
    }))
}
