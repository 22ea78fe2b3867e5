use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The language a snippet is written in. Closed set; `Text` is the
/// catch-all for anything not listed. The `code` body is never validated
/// against this — it only drives display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetLanguage {
    TypeScript,
    JavaScript,
    Python,
    Html,
    Css,
    Sql,
    Json,
    Markdown,
    #[default]
    Text,
}

/// A saved code snippet.
///
/// `owner_id` is `None` for a record that only exists on the local device
/// and `Some` for a record held in the remote store — never both. Migration
/// drops the local id and lets the server mint a fresh one, so the same
/// record is never present in both stores under one identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub code: String,
    #[serde(default)]
    pub language: SnippetLanguage,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub owner_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating a snippet. The store mints `id`, `owner_id` and
/// both timestamps; callers cannot supply them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSnippetDto {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub code: String,
    #[serde(default)]
    pub language: SnippetLanguage,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl CreateSnippetDto {
    /// Reject malformed input before it reaches any store.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::MissingField("title".to_string()));
        }
        Ok(())
    }

    /// Re-express an existing record as a create payload, discarding its
    /// id, owner, and timestamps. This is what batch migration sends.
    pub fn from_snippet(snippet: &Snippet) -> Self {
        Self {
            title: snippet.title.clone(),
            description: snippet.description.clone(),
            code: snippet.code.clone(),
            language: snippet.language,
            tags: snippet.tags.clone(),
            is_favorite: snippet.is_favorite,
        }
    }
}

/// Partial update. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSnippetDto {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub language: Option<SnippetLanguage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_favorite: Option<bool>,
}

impl UpdateSnippetDto {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err(CoreError::InvalidField {
                field: "title".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge this patch into `snippet` and restamp `updated_at`.
    /// `updated_at` moves forward on every mutation, favorite flips included.
    pub fn apply(&self, snippet: &mut Snippet) {
        if let Some(title) = &self.title {
            snippet.title = title.clone();
        }
        if let Some(description) = &self.description {
            snippet.description = Some(description.clone());
        }
        if let Some(code) = &self.code {
            snippet.code = code.clone();
        }
        if let Some(language) = self.language {
            snippet.language = language;
        }
        if let Some(tags) = &self.tags {
            snippet.tags = tags.clone();
        }
        if let Some(is_favorite) = self.is_favorite {
            snippet.is_favorite = is_favorite;
        }
        snippet.updated_at = Timestamp::now();
    }
}
