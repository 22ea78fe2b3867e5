use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use snipvault_core::models::session::Session;
use snipvault_core::models::snippet::{CreateSnippetDto, Snippet, UpdateSnippetDto};

use crate::error::StorageError;
use crate::store::SnippetStore;

/// Request body for the batch-sync endpoint.
#[derive(Debug, Serialize)]
pub struct SyncRequest<'a> {
    pub snippets: &'a [CreateSnippetDto],
}

/// Response body of a committed batch sync.
#[derive(Debug, Deserialize)]
pub struct SyncResponse {
    pub success: bool,
    pub synced_count: u64,
}

/// HTTP client for the shared remote store.
///
/// Stateless: every call carries the session's bearer token and the
/// server scopes rows to the identity behind it. The client never sends
/// an owner id — ownership is assigned server-side.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl RemoteStore {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, session: &Session) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: session.access_token.clone(),
        }
    }

    /// Convenience constructor with a fresh HTTP client.
    pub fn connect(base_url: impl Into<String>, session: &Session) -> Self {
        Self::new(reqwest::Client::new(), base_url, session)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map an error status to the storage taxonomy. `id` feeds the
    /// `NotFound` arm for the single-record operations.
    async fn fail(resp: reqwest::Response, id: Option<&str>) -> StorageError {
        let status = resp.status();
        match status {
            StatusCode::UNAUTHORIZED => StorageError::Unauthorized,
            StatusCode::NOT_FOUND => StorageError::NotFound {
                id: id.unwrap_or_default().to_string(),
            },
            _ => {
                let message = resp.text().await.unwrap_or_default();
                StorageError::Server {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }

    /// Create every given record under the caller's identity as one
    /// transaction: either all are committed or none are. Client-supplied
    /// ids are never sent; the server mints fresh ones. Returns the
    /// committed count.
    pub async fn batch_create(&self, snippets: &[CreateSnippetDto]) -> Result<u64, StorageError> {
        let resp = self
            .http
            .post(self.url("/sync"))
            .bearer_auth(&self.access_token)
            .json(&SyncRequest { snippets })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::fail(resp, None).await);
        }
        let body: SyncResponse = resp.json().await?;
        Ok(body.synced_count)
    }
}

impl SnippetStore for RemoteStore {
    async fn list(&self) -> Result<Vec<Snippet>, StorageError> {
        let resp = self
            .http
            .get(self.url("/snippets"))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::fail(resp, None).await);
        }
        Ok(resp.json().await?)
    }

    async fn create(&self, dto: &CreateSnippetDto) -> Result<Snippet, StorageError> {
        let resp = self
            .http
            .post(self.url("/snippets"))
            .bearer_auth(&self.access_token)
            .json(dto)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::fail(resp, None).await);
        }
        Ok(resp.json().await?)
    }

    async fn update(&self, id: &str, patch: &UpdateSnippetDto) -> Result<Snippet, StorageError> {
        let resp = self
            .http
            .patch(self.url(&format!("/snippets/{id}")))
            .bearer_auth(&self.access_token)
            .json(patch)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::fail(resp, Some(id)).await);
        }
        Ok(resp.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let resp = self
            .http
            .delete(self.url(&format!("/snippets/{id}")))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::fail(resp, Some(id)).await);
        }
        Ok(())
    }
}
