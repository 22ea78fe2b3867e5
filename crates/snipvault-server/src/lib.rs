//! snipvault-server
//!
//! The remote store collaborator: an axum API exposing owner-scoped
//! snippet CRUD and the transactional batch-sync endpoint the sync
//! controller drives on login.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, patch, post};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use state::AppState;

/// Build the full route tree. `/health` is open; everything else sits
/// behind bearer authentication.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/snippets", get(routes::snippets::list_snippets))
        .route("/snippets", post(routes::snippets::create_snippet))
        .route("/snippets/{id}", patch(routes::snippets::update_snippet))
        .route("/snippets/{id}", delete(routes::snippets::delete_snippet))
        .route("/sync", post(routes::sync::batch_sync))
        .layer(axum_mw::from_fn(middleware::auth::require_auth))
        .with_state(state);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(protected)
}
