use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use jiff::Timestamp;
use uuid::Uuid;

use snipvault_core::models::snippet::{CreateSnippetDto, Snippet, UpdateSnippetDto};
use snipvault_core::seed;

use crate::error::StorageError;
use crate::store::SnippetStore;

/// File name of the single storage slot, under the directory the store
/// was opened with.
const LOCAL_DB_FILE: &str = "snippet_vault_local_db.json";

/// Device-local snippet storage: one JSON document, whole-list replace.
///
/// No network and no authentication awareness. Reads degrade rather than
/// fail: a never-written slot yields the seed dataset, an unreadable or
/// corrupt slot yields the empty list.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(LOCAL_DB_FILE),
        }
    }

    /// The persisted list.
    ///
    /// A missing file means the slot was never initialized, which is
    /// distinct from an explicitly emptied slot (that one persists `[]`).
    pub fn read(&self) -> Vec<Snippet> {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(snippets) => snippets,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "local store corrupt, reading as empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => seed::seed_snippets(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "local store unavailable, reading as empty");
                Vec::new()
            }
        }
    }

    /// Replace the entire persisted list.
    ///
    /// Writes to a sibling temp file and renames it over the slot, so a
    /// concurrent reader never observes a partial list.
    pub fn write(&self, snippets: &[Snippet]) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(&snippets)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SnippetStore for LocalStore {
    async fn list(&self) -> Result<Vec<Snippet>, StorageError> {
        Ok(self.read())
    }

    async fn create(&self, dto: &CreateSnippetDto) -> Result<Snippet, StorageError> {
        let now = Timestamp::now();
        let snippet = Snippet {
            id: Uuid::new_v4().to_string(),
            title: dto.title.clone(),
            description: dto.description.clone(),
            code: dto.code.clone(),
            language: dto.language,
            tags: dto.tags.clone(),
            is_favorite: dto.is_favorite,
            owner_id: None,
            created_at: now,
            updated_at: now,
        };

        // Most-recent-first ordering: new records go to the front.
        let mut snippets = self.read();
        snippets.insert(0, snippet.clone());
        self.write(&snippets)?;
        Ok(snippet)
    }

    async fn update(&self, id: &str, patch: &UpdateSnippetDto) -> Result<Snippet, StorageError> {
        let mut snippets = self.read();
        let Some(snippet) = snippets.iter_mut().find(|s| s.id == id) else {
            return Err(StorageError::NotFound { id: id.to_string() });
        };
        patch.apply(snippet);
        let updated = snippet.clone();
        self.write(&snippets)?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut snippets = self.read();
        let before = snippets.len();
        snippets.retain(|s| s.id != id);
        if snippets.len() == before {
            return Err(StorageError::NotFound { id: id.to_string() });
        }
        self.write(&snippets)?;
        Ok(())
    }
}
