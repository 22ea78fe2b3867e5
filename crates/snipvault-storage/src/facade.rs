use std::path::PathBuf;

use snipvault_core::models::session::Session;
use snipvault_core::models::snippet::{CreateSnippetDto, Snippet, UpdateSnippetDto};

use crate::error::StorageError;
use crate::local::LocalStore;
use crate::remote::RemoteStore;
use crate::store::SnippetStore;

/// The single CRUD surface the application talks to.
///
/// Each call dispatches on whether a [`Session`] is supplied: absent
/// means the device-local store, present means the remote store scoped to
/// that session. The session is the only signal — there is no network
/// probe. The facade never caches; callers re-read after every mutation
/// and get whatever the backing store now holds.
#[derive(Debug, Clone)]
pub struct SnippetFacade {
    local: LocalStore,
    http: reqwest::Client,
    remote_base_url: String,
}

impl SnippetFacade {
    pub fn new(local_dir: impl Into<PathBuf>, remote_base_url: impl Into<String>) -> Self {
        Self {
            local: LocalStore::new(local_dir),
            http: reqwest::Client::new(),
            remote_base_url: remote_base_url.into(),
        }
    }

    /// The local store, for the sync controller to share.
    pub fn local(&self) -> &LocalStore {
        &self.local
    }

    /// A remote client bound to the given session.
    pub fn remote_for(&self, session: &Session) -> RemoteStore {
        RemoteStore::new(self.http.clone(), self.remote_base_url.clone(), session)
    }

    pub async fn get_all(&self, session: Option<&Session>) -> Result<Vec<Snippet>, StorageError> {
        match session {
            None => self.local.list().await,
            Some(s) => self.remote_for(s).list().await,
        }
    }

    /// Create a snippet in whichever store applies. Input is validated
    /// before either store is touched.
    pub async fn create(
        &self,
        dto: &CreateSnippetDto,
        session: Option<&Session>,
    ) -> Result<Snippet, StorageError> {
        dto.validate()?;
        match session {
            None => self.local.create(dto).await,
            Some(s) => self.remote_for(s).create(dto).await,
        }
    }

    /// Partial update. Fails with [`StorageError::NotFound`] when the id
    /// is absent (local) or not owned by the session (remote).
    pub async fn update(
        &self,
        id: &str,
        patch: &UpdateSnippetDto,
        session: Option<&Session>,
    ) -> Result<Snippet, StorageError> {
        patch.validate()?;
        match session {
            None => self.local.update(id, patch).await,
            Some(s) => self.remote_for(s).update(id, patch).await,
        }
    }

    /// Delete is idempotent at this level: removing an id that is already
    /// gone succeeds on both paths, unlike `update`.
    pub async fn delete(&self, id: &str, session: Option<&Session>) -> Result<(), StorageError> {
        let result = match session {
            None => self.local.delete(id).await,
            Some(s) => self.remote_for(s).delete(id).await,
        };
        match result {
            Err(StorageError::NotFound { .. }) => Ok(()),
            other => other,
        }
    }

    /// Flip `is_favorite` on a record in whichever store applies.
    ///
    /// A missing record is a silent no-op rather than `NotFound` — the
    /// toggle is fired from list rows that may have just been deleted.
    pub async fn toggle_favorite(
        &self,
        id: &str,
        session: Option<&Session>,
    ) -> Result<(), StorageError> {
        let all = self.get_all(session).await?;
        let Some(current) = all.iter().find(|s| s.id == id) else {
            tracing::debug!(id, "favorite toggle on missing snippet, ignoring");
            return Ok(());
        };

        let patch = UpdateSnippetDto {
            is_favorite: Some(!current.is_favorite),
            ..Default::default()
        };
        match self.update(id, &patch, session).await {
            // Deleted between the read and the write: same silent no-op.
            Err(StorageError::NotFound { .. }) => Ok(()),
            Err(e) => Err(e),
            Ok(_) => Ok(()),
        }
    }
}
