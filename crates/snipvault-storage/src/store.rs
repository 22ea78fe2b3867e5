use snipvault_core::models::snippet::{CreateSnippetDto, Snippet, UpdateSnippetDto};

use crate::error::StorageError;

/// The capability contract both backends implement.
///
/// The facade holds one [`crate::local::LocalStore`] and builds a
/// [`crate::remote::RemoteStore`] per session, then dispatches to one of
/// them per call. Keeping the contract explicit here means the two paths
/// cannot drift apart in surface or semantics.
pub trait SnippetStore {
    /// All snippets visible to this store, most recently updated first.
    async fn list(&self) -> Result<Vec<Snippet>, StorageError>;

    /// Persist a new snippet. The store mints `id` and both timestamps.
    async fn create(&self, dto: &CreateSnippetDto) -> Result<Snippet, StorageError>;

    /// Apply a partial update, restamping `updated_at`. Fails with
    /// [`StorageError::NotFound`] when `id` is absent (or not owned, on
    /// the remote path).
    async fn update(&self, id: &str, patch: &UpdateSnippetDto) -> Result<Snippet, StorageError>;

    /// Remove a snippet. Deleting an absent id is reported as
    /// [`StorageError::NotFound`] at this level so callers can tell the
    /// two outcomes apart; the facade collapses both into success.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}
