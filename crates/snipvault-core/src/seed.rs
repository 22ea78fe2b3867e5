use jiff::Timestamp;

use crate::models::snippet::{Snippet, SnippetLanguage};

/// Starter snippets shown the first time a device opens the app.
///
/// The local store returns these when its storage key has never been
/// written. An explicitly emptied store persists `[]` instead, so "never
/// initialized" and "user deleted everything" stay distinguishable.
pub fn seed_snippets() -> Vec<Snippet> {
    let now = Timestamp::now();
    vec![
        Snippet {
            id: "seed-1".to_string(),
            title: "React useEffect fetch".to_string(),
            description: Some("Standard pattern for fetching data with cleanup.".to_string()),
            code: "useEffect(() => {\n  const controller = new AbortController();\n\n  fetch('/api/data', { signal: controller.signal })\n    .then(res => res.json())\n    .then(data => setData(data));\n\n  return () => controller.abort();\n}, []);"
                .to_string(),
            language: SnippetLanguage::TypeScript,
            tags: vec!["react".to_string(), "hooks".to_string(), "fetch".to_string()],
            is_favorite: true,
            owner_id: None,
            created_at: now,
            updated_at: now,
        },
        Snippet {
            id: "seed-2".to_string(),
            title: "Python list comprehension".to_string(),
            description: Some("Filter even numbers from a list.".to_string()),
            code: "numbers = [1, 2, 3, 4, 5, 6]\nevens = [n for n in numbers if n % 2 == 0]\nprint(evens)"
                .to_string(),
            language: SnippetLanguage::Python,
            tags: vec!["python".to_string(), "basics".to_string()],
            is_favorite: false,
            owner_id: None,
            created_at: now,
            updated_at: now,
        },
    ]
}
