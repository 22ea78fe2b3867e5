use jiff::Timestamp;
use uuid::Uuid;

use snipvault_core::error::CoreError;
use snipvault_core::models::snippet::{CreateSnippetDto, Snippet, UpdateSnippetDto};

/// Owner-scoped snippet rows.
///
/// Every operation takes the owner resolved from the session, and the
/// ownership check runs on each mutation, not just on read — a caller
/// can never touch another identity's rows through any code path here.
#[derive(Debug, Default)]
pub struct SnippetTable {
    rows: Vec<Snippet>,
}

impl SnippetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows owned by `owner`, ordered by `updated_at` descending.
    pub fn list_for(&self, owner: &str) -> Vec<Snippet> {
        let mut rows: Vec<Snippet> = self
            .rows
            .iter()
            .filter(|s| s.owner_id.as_deref() == Some(owner))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        rows
    }

    /// Insert one row. The server mints the id and timestamps, and the
    /// owner comes from the session — never from client input.
    pub fn insert(&mut self, owner: &str, dto: &CreateSnippetDto) -> Snippet {
        let now = Timestamp::now();
        let snippet = Snippet {
            id: Uuid::new_v4().to_string(),
            title: dto.title.clone(),
            description: dto.description.clone(),
            code: dto.code.clone(),
            language: dto.language,
            tags: dto.tags.clone(),
            is_favorite: dto.is_favorite,
            owner_id: Some(owner.to_string()),
            created_at: now,
            updated_at: now,
        };
        self.rows.push(snippet.clone());
        snippet
    }

    /// Patch a row owned by `owner`. Returns `None` when no such row
    /// exists under that owner.
    pub fn update(
        &mut self,
        owner: &str,
        id: &str,
        patch: &UpdateSnippetDto,
    ) -> Option<Snippet> {
        let row = self
            .rows
            .iter_mut()
            .find(|s| s.id == id && s.owner_id.as_deref() == Some(owner))?;
        patch.apply(row);
        Some(row.clone())
    }

    /// Delete a row owned by `owner`. Returns whether a row was removed,
    /// so zero-rows-affected stays distinguishable from success.
    pub fn delete(&mut self, owner: &str, id: &str) -> bool {
        let before = self.rows.len();
        self.rows
            .retain(|s| !(s.id == id && s.owner_id.as_deref() == Some(owner)));
        self.rows.len() != before
    }

    /// Insert a whole batch under `owner` or nothing at all.
    ///
    /// Every record is validated before the first insert, so a rejection
    /// partway through the batch can never leave a prefix committed.
    pub fn insert_batch(
        &mut self,
        owner: &str,
        dtos: &[CreateSnippetDto],
    ) -> Result<usize, CoreError> {
        for dto in dtos {
            dto.validate()?;
        }
        for dto in dtos {
            self.insert(owner, dto);
        }
        Ok(dtos.len())
    }
}
