use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::SnippetTable;

/// Shared application state, injected into all route handlers via Axum
/// state. The single mutex around the table is what makes the batch-sync
/// endpoint transactional: no other request can observe a half-applied
/// batch.
#[derive(Clone, Default)]
pub struct AppState {
    pub table: Arc<Mutex<SnippetTable>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
